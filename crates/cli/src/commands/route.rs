// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Route command

use super::nav::NavigationReport;
use crate::context::Context;
use crate::error::PitstopError;
use crate::output;
use clap::Args;
use pitstop_core::{Phase, RouteError, Role};

#[derive(Args)]
pub struct RouteArgs {
    /// Target phase (id or name)
    #[arg(long)]
    pub phase: Phase,
    /// Job identifier substituted into the route
    #[arg(long)]
    pub job_id: Option<String>,
    /// Check the role's permission for the phase first
    #[arg(long)]
    pub role: Option<Role>,
}

pub fn handle(context: &Context, args: RouteArgs) -> Result<(), PitstopError> {
    let navigator = context.config().navigator();
    let job_id = args.job_id.as_deref();
    let missing = |e: RouteError| match e {
        RouteError::MissingJobId { phase } => PitstopError::missing_job_id(phase, e),
    };

    match args.role {
        Some(role) => {
            let navigation = navigator.request(role, args.phase, job_id).map_err(missing)?;
            output::print(&NavigationReport(navigation), context.format);
        }
        None => {
            let route = navigator
                .routes()
                .route_for(args.phase, job_id)
                .map_err(missing)?;
            output::print(&route, context.format);
        }
    }
    Ok(())
}
