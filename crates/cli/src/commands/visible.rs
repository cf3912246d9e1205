// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visible command: the ordered phases a role may see

use crate::context::Context;
use crate::error::PitstopError;
use crate::output;
use clap::Args;
use pitstop_core::{labels_for, visible_phases, CategoryKind, Phase, Progress, Role};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Args)]
pub struct VisibleArgs {
    /// Acting role (mechanic, customer, front-desk)
    #[arg(long)]
    pub role: Role,
    /// Job JSON file or id; applies the job's skip rules and labels
    #[arg(long)]
    pub job: Option<String>,
    /// Phase to hide (repeatable)
    #[arg(long = "exclude", value_name = "PHASE")]
    pub exclude: Vec<Phase>,
    /// Hide the phases of a widget defined in the profile
    #[arg(long)]
    pub widget: Option<String>,
}

#[derive(Serialize)]
struct VisiblePhase {
    phase: Phase,
    name: &'static str,
    label: &'static str,
}

impl fmt::Display for VisiblePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:<12} {}", self.phase, self.name, self.label)
    }
}

pub fn handle(context: &Context, args: VisibleArgs) -> Result<(), PitstopError> {
    let excluded = context.excluded(&args.exclude, args.widget.as_deref())?;

    let phases: Vec<VisiblePhase> = match args.job {
        Some(job) => {
            let job = context.load_job(&job)?;
            Progress::evaluate(&job, args.role, &excluded, context.config())
                .steps
                .into_iter()
                .map(|step| VisiblePhase {
                    phase: step.phase,
                    name: step.phase.name(),
                    label: step.label,
                })
                .collect()
        }
        None => {
            let labels = labels_for(CategoryKind::General);
            visible_phases(args.role, &excluded, &BTreeSet::new())
                .into_iter()
                .map(|phase| VisiblePhase {
                    phase,
                    name: phase.name(),
                    label: labels.full(phase),
                })
                .collect()
        }
    };

    output::print_list(&phases, context.format);
    Ok(())
}
