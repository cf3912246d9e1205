// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Nav command: step to the adjacent visible phase

use crate::context::Context;
use crate::error::PitstopError;
use crate::output;
use clap::{Args, ValueEnum};
use pitstop_core::{Direction, Navigation, Phase, Progress, RouteError, Role};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NavDirection {
    Next,
    Prev,
}

impl From<NavDirection> for Direction {
    fn from(direction: NavDirection) -> Self {
        match direction {
            NavDirection::Next => Direction::Next,
            NavDirection::Prev => Direction::Previous,
        }
    }
}

#[derive(Args)]
pub struct NavArgs {
    /// Which way to step
    #[arg(value_enum)]
    pub direction: NavDirection,
    /// Job JSON file, or a job id under .pitstop/jobs
    #[arg(long)]
    pub job: String,
    /// Acting role (mechanic, customer, front-desk)
    #[arg(long)]
    pub role: Role,
    /// Phase the user is on (id or name); defaults to the current phase
    #[arg(long)]
    pub from: Option<Phase>,
    /// Phase to hide (repeatable)
    #[arg(long = "exclude", value_name = "PHASE")]
    pub exclude: Vec<Phase>,
    /// Hide the phases of a widget defined in the profile
    #[arg(long)]
    pub widget: Option<String>,
}

#[derive(Serialize)]
#[serde(transparent)]
pub(crate) struct NavigationReport(pub(crate) Navigation);

impl fmt::Display for NavigationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Navigation::Allowed { phase, route } => {
                write!(f, "{} ({}) {}", phase, phase.name(), route)
            }
            Navigation::Denied { notice } => write!(f, "notice: {}", notice),
        }
    }
}

pub fn handle(context: &Context, args: NavArgs) -> Result<(), PitstopError> {
    let job = context.load_job(&args.job)?;
    let excluded = context.excluded(&args.exclude, args.widget.as_deref())?;
    let progress = Progress::evaluate(&job, args.role, &excluded, context.config());

    let Some(from) = args.from.or(progress.current) else {
        return Err(PitstopError::new("No phase is visible to this role")
            .because(format!("Role '{}' with exclusions {:?}", args.role, excluded))
            .hint("Drop some --exclude flags or the --widget option"));
    };
    if progress.step(from).is_none() {
        return Err(
            PitstopError::new(format!("Phase {} is not visible to '{}'", from, args.role))
                .hint(format!(
                    "Visible phases: {}",
                    join_phases(&progress.visible())
                )),
        );
    }

    let navigator = context.config().navigator();
    let navigation = progress
        .navigate(&navigator, args.direction.into(), from)
        .map_err(|e| match e {
            RouteError::MissingJobId { phase } => PitstopError::missing_job_id(phase, e),
        })?;

    let report = navigation.map(NavigationReport);
    output::print_optional(report.as_ref(), context.format);
    Ok(())
}

fn join_phases(phases: &[Phase]) -> String {
    if phases.is_empty() {
        return "none".to_string();
    }
    phases
        .iter()
        .map(Phase::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
