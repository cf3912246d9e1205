// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress command: a job's phases as seen by one role

use crate::context::Context;
use crate::error::PitstopError;
use crate::output;
use clap::Args;
use pitstop_core::{Phase, PhaseClassification, Progress, Role};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ProgressArgs {
    /// Job JSON file, or a job id under .pitstop/jobs
    #[arg(long)]
    pub job: String,
    /// Acting role (mechanic, customer, front-desk)
    #[arg(long)]
    pub role: Role,
    /// Phase to hide (repeatable)
    #[arg(long = "exclude", value_name = "PHASE")]
    pub exclude: Vec<Phase>,
    /// Hide the phases of a widget defined in the profile
    #[arg(long)]
    pub widget: Option<String>,
}

#[derive(Serialize)]
#[serde(transparent)]
struct ProgressReport(Progress);

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = &self.0;
        let job = progress
            .job_id
            .as_ref()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        writeln!(f, "Job: {}", job)?;
        writeln!(f, "  Role: {}", progress.role)?;
        match progress.current {
            Some(phase) => writeln!(f, "  Current: {} ({})", phase, phase.name())?,
            None => writeln!(f, "  Current: -")?,
        }
        if progress.finished {
            writeln!(f, "  Finished")?;
        }
        for step in &progress.steps {
            let marker = if progress.current == Some(step.phase) {
                '>'
            } else {
                ' '
            };
            write!(
                f,
                "\n{} {} {:<10} {}",
                marker,
                step.phase,
                step.classification,
                step.label
            )?;
        }
        Ok(())
    }
}

pub fn handle(context: &Context, args: ProgressArgs) -> Result<(), PitstopError> {
    let job = context.load_job(&args.job)?;
    let excluded = context.excluded(&args.exclude, args.widget.as_deref())?;
    let progress = Progress::evaluate(&job, args.role, &excluded, context.config());

    let skipped: Vec<Phase> = progress
        .classification()
        .with(PhaseClassification::Skipped)
        .collect();
    if !skipped.is_empty() {
        tracing::debug!(?skipped, "phases skipped for this job");
    }

    output::print(&ProgressReport(progress), context.format);
    Ok(())
}
