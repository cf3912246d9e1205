// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status-to-phase mapping
//!
//! Derives, from a job's lifecycle status, which phases are completed,
//! which one is active and which are still pending. Phase 0 is never
//! driven by the status field: the pre-checkin form is submitted before
//! the job has a meaningful status, so it reads the pre-checkin marker.

use crate::category::CategoryRules;
use crate::job::JobSnapshot;
use crate::phase::Phase;
use crate::skip::skipped_for_job;
use crate::status::JobStatus;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Where a phase stands for a given job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseClassification {
    Active,
    Completed,
    Skipped,
    Pending,
}

impl PhaseClassification {
    pub fn name(self) -> &'static str {
        match self {
            PhaseClassification::Active => "active",
            PhaseClassification::Completed => "completed",
            PhaseClassification::Skipped => "skipped",
            PhaseClassification::Pending => "pending",
        }
    }

    /// Whether a user may move on from a phase in this state
    pub fn is_reachable(self) -> bool {
        matches!(
            self,
            PhaseClassification::Active | PhaseClassification::Completed
        )
    }
}

impl std::fmt::Display for PhaseClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Status sets driving one phase
#[derive(Debug, Clone, Copy)]
pub struct PhaseRule {
    /// Statuses while the phase is being worked
    pub active: &'static [JobStatus],
    /// Statuses reached only after the phase is done
    pub completed: &'static [JobStatus],
}

use JobStatus::*;

const INTAKE: PhaseRule = PhaseRule {
    active: &[AwaitingIntake],
    completed: &[
        IntakeComplete,
        AwaitingEstimate,
        EstimatePresented,
        AwaitingCustomerApproval,
        AwaitingPartsOrder,
        AwaitingParts,
        AwaitingWork,
        AwaitingRelease,
        Released,
    ],
};

const DIAGNOSIS: PhaseRule = PhaseRule {
    active: &[IntakeComplete],
    completed: &[
        AwaitingEstimate,
        EstimatePresented,
        AwaitingCustomerApproval,
        AwaitingPartsOrder,
        AwaitingParts,
        AwaitingWork,
        AwaitingRelease,
        Released,
    ],
};

const ESTIMATE: PhaseRule = PhaseRule {
    active: &[AwaitingEstimate],
    completed: &[
        EstimatePresented,
        AwaitingCustomerApproval,
        AwaitingPartsOrder,
        AwaitingParts,
        AwaitingWork,
        AwaitingRelease,
        Released,
    ],
};

const APPROVAL: PhaseRule = PhaseRule {
    active: &[EstimatePresented, AwaitingCustomerApproval],
    completed: &[
        AwaitingPartsOrder,
        AwaitingParts,
        AwaitingWork,
        AwaitingRelease,
        Released,
    ],
};

const WORK: PhaseRule = PhaseRule {
    active: &[AwaitingWork],
    completed: &[AwaitingRelease, Released],
};

const REPORT: PhaseRule = PhaseRule {
    active: &[AwaitingRelease],
    completed: &[Released],
};

/// Status rule for a phase; `None` for the pre-checkin phase
pub fn rule_for(phase: Phase) -> Option<PhaseRule> {
    match phase {
        Phase::PreCheckin => None,
        Phase::Intake => Some(INTAKE),
        Phase::Diagnosis => Some(DIAGNOSIS),
        Phase::Estimate => Some(ESTIMATE),
        Phase::Approval => Some(APPROVAL),
        Phase::Work => Some(WORK),
        Phase::Report => Some(REPORT),
    }
}

/// Classify a status-driven phase.
///
/// Precedence: skipped, then active, then completed, else pending. With
/// no recognized status every phase is pending. Phase 0 has no status
/// rule and is pending here unless skipped; see [`classify_pre_checkin`].
pub fn classify(
    phase: Phase,
    status: Option<JobStatus>,
    skipped: &BTreeSet<Phase>,
) -> PhaseClassification {
    if skipped.contains(&phase) {
        return PhaseClassification::Skipped;
    }
    let (Some(rule), Some(status)) = (rule_for(phase), status) else {
        return PhaseClassification::Pending;
    };
    if rule.active.contains(&status) {
        PhaseClassification::Active
    } else if rule.completed.contains(&status) {
        PhaseClassification::Completed
    } else {
        PhaseClassification::Pending
    }
}

/// Classify phase 0 from the pre-checkin marker alone
pub fn classify_pre_checkin(has_marker: bool) -> PhaseClassification {
    if has_marker {
        PhaseClassification::Completed
    } else {
        PhaseClassification::Pending
    }
}

/// Per-phase classification of one job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    phases: BTreeMap<Phase, PhaseClassification>,
}

impl Classification {
    /// Classify every phase of a job snapshot
    pub fn of(job: &JobSnapshot, rules: &CategoryRules) -> Self {
        let status = job.status();
        let skipped = skipped_for_job(job, rules);

        let phases = Phase::ALL
            .into_iter()
            .map(|phase| {
                let class = match phase {
                    Phase::PreCheckin => classify_pre_checkin(job.has_pre_checkin()),
                    _ => classify(phase, status, &skipped),
                };
                (phase, class)
            })
            .collect();
        Self { phases }
    }

    pub fn get(&self, phase: Phase) -> PhaseClassification {
        self.phases
            .get(&phase)
            .copied()
            .unwrap_or(PhaseClassification::Pending)
    }

    pub fn is_reachable(&self, phase: Phase) -> bool {
        self.get(phase).is_reachable()
    }

    /// The phase currently being worked, if the job sits in one
    pub fn active(&self) -> Option<Phase> {
        self.with(PhaseClassification::Active).next()
    }

    pub fn skipped(&self) -> BTreeSet<Phase> {
        self.with(PhaseClassification::Skipped).collect()
    }

    /// Phases carrying the given classification, in order
    pub fn with(&self, class: PhaseClassification) -> impl Iterator<Item = Phase> + '_ {
        self.phases
            .iter()
            .filter(move |(_, c)| **c == class)
            .map(|(p, _)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phase, PhaseClassification)> + '_ {
        self.phases.iter().map(|(p, c)| (*p, *c))
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
