// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress view
//!
//! Everything a step indicator needs for one job and one role: the
//! visible phases with labels and classification, and where the job
//! currently stands.

use crate::catalog::labels_for;
use crate::category::CategoryKind;
use crate::classify::{Classification, PhaseClassification};
use crate::config::WorkflowConfig;
use crate::job::{JobId, JobSnapshot};
use crate::navigator::{Direction, Navigation, Navigator};
use crate::phase::Phase;
use crate::role::{visible_phases, Role};
use crate::route::RouteError;
use serde::Serialize;

/// One visible phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub phase: Phase,
    pub short_label: &'static str,
    pub label: &'static str,
    pub classification: PhaseClassification,
}

/// A job's progress as seen by one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub job_id: Option<JobId>,
    pub role: Role,
    pub category: CategoryKind,
    pub steps: Vec<Step>,
    /// Phase to highlight, if any phase is visible
    pub current: Option<Phase>,
    /// First visible phase
    pub initial: Option<Phase>,
    /// Whether the report phase is completed
    pub finished: bool,
    #[serde(skip)]
    classification: Classification,
}

impl Progress {
    /// Evaluate a job snapshot for a role.
    ///
    /// `excluded` hides phases on top of role filtering.
    pub fn evaluate(
        job: &JobSnapshot,
        role: Role,
        excluded: &[Phase],
        config: &WorkflowConfig,
    ) -> Self {
        let category = job.category_kind(&config.categories);
        let labels = labels_for(category);
        let classification = Classification::of(job, &config.categories);
        let visible = visible_phases(role, excluded, &classification.skipped());

        let steps: Vec<Step> = visible
            .iter()
            .map(|phase| Step {
                phase: *phase,
                short_label: labels.short(*phase),
                label: labels.full(*phase),
                classification: classification.get(*phase),
            })
            .collect();

        let current = current_phase(&steps);
        let initial = visible.first().copied();
        let finished = classification.get(Phase::Report) == PhaseClassification::Completed;

        tracing::debug!(
            job_id = job.id.as_ref().map(JobId::as_str),
            role = role.name(),
            current = current.map(Phase::id),
            visible = visible.len(),
            "evaluated progress"
        );

        Self {
            job_id: job.id.clone(),
            role,
            category,
            steps,
            current,
            initial,
            finished,
            classification,
        }
    }

    /// Visible phases, in order
    pub fn visible(&self) -> Vec<Phase> {
        self.steps.iter().map(|s| s.phase).collect()
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn step(&self, phase: Phase) -> Option<&Step> {
        self.steps.iter().find(|s| s.phase == phase)
    }

    /// Step from `from` in the given direction using this view's role,
    /// visible phases and classification
    pub fn navigate(
        &self,
        navigator: &Navigator,
        direction: Direction,
        from: Phase,
    ) -> Result<Option<Navigation>, RouteError> {
        navigator.step(
            direction,
            self.role,
            from,
            &self.visible(),
            self.classification.is_reachable(from),
            self.job_id.as_ref().map(JobId::as_str),
        )
    }
}

// The active phase, else the first unfinished phase past the furthest
// completed one, else the last one. A walk-in job leaves phase 0 pending
// forever, so "first unfinished" alone would point back at it.
fn current_phase(steps: &[Step]) -> Option<Phase> {
    if let Some(active) = steps
        .iter()
        .find(|s| s.classification == PhaseClassification::Active)
    {
        return Some(active.phase);
    }
    let start = steps
        .iter()
        .rposition(|s| s.classification == PhaseClassification::Completed)
        .map_or(0, |i| i + 1);
    steps[start..]
        .iter()
        .find(|s| s.classification != PhaseClassification::Completed)
        .or_else(|| steps.last())
        .map(|s| s.phase)
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
