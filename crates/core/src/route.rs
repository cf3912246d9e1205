// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destination routes for each phase

use crate::phase::Phase;
use std::collections::BTreeMap;
use thiserror::Error;

/// Placeholder substituted with the job id in route templates
pub const JOB_ID_PLACEHOLDER: &str = "{job_id}";

/// Errors building a route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("cannot build route for phase {phase}: job id is missing")]
    MissingJobId { phase: Phase },
}

/// Route template for each phase, parameterized by job id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    templates: BTreeMap<Phase, String>,
}

impl RouteTable {
    /// The built-in route table
    pub fn standard() -> Self {
        let templates = Phase::ALL
            .into_iter()
            .map(|phase| (phase, standard_template(phase).to_string()))
            .collect();
        Self { templates }
    }

    /// Replace the template for one phase
    pub fn with_template(mut self, phase: Phase, template: impl Into<String>) -> Self {
        self.templates.insert(phase, template.into());
        self
    }

    pub fn template(&self, phase: Phase) -> &str {
        self.templates
            .get(&phase)
            .map(String::as_str)
            .unwrap_or_else(|| standard_template(phase))
    }

    /// Build the route for a phase of the given job.
    ///
    /// A blank id is treated as missing.
    pub fn route_for(&self, phase: Phase, job_id: Option<&str>) -> Result<String, RouteError> {
        let job_id = job_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(RouteError::MissingJobId { phase })?;
        Ok(self.template(phase).replace(JOB_ID_PLACEHOLDER, job_id))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_template(phase: Phase) -> &'static str {
    match phase {
        Phase::PreCheckin => "/customer/pre-checkin/{job_id}",
        Phase::Intake => "/admin/intake/{job_id}",
        Phase::Diagnosis => "/mechanic/diagnosis/{job_id}",
        Phase::Estimate => "/admin/estimate/{job_id}",
        Phase::Approval => "/customer/approval/{job_id}",
        Phase::Work => "/mechanic/work/{job_id}",
        Phase::Report => "/customer/report/{job_id}",
    }
}
