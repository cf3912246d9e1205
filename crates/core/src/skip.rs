// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Skip rules
//!
//! An inspection that turned up no additional work has nothing to
//! estimate, so it goes straight from the intake inspection to the final
//! check.

use crate::category::{CategoryKind, CategoryRules};
use crate::job::JobSnapshot;
use crate::phase::Phase;
use std::collections::BTreeSet;

/// Phases removed for inspections without additional estimate items
pub const INSPECTION_SKIPPED: [Phase; 2] = [Phase::Estimate, Phase::Approval];

/// Phases skipped for a job of the given kind
pub fn skipped_phases(kind: CategoryKind, has_additional_estimate: bool) -> BTreeSet<Phase> {
    match kind {
        CategoryKind::Inspection if !has_additional_estimate => {
            INSPECTION_SKIPPED.into_iter().collect()
        }
        _ => BTreeSet::new(),
    }
}

/// Phases skipped for a job snapshot
pub fn skipped_for_job(job: &JobSnapshot, rules: &CategoryRules) -> BTreeSet<Phase> {
    skipped_phases(job.category_kind(rules), job.has_additional_estimate)
}
