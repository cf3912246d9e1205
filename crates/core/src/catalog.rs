// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase catalog: display labels per phase

use crate::category::CategoryKind;
use crate::phase::Phase;
use serde::Serialize;
use std::collections::BTreeMap;

/// Short and full display labels for every phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseLabels {
    pub short: BTreeMap<Phase, &'static str>,
    pub full: BTreeMap<Phase, &'static str>,
}

impl PhaseLabels {
    pub fn short(&self, phase: Phase) -> &'static str {
        self.short.get(&phase).copied().unwrap_or_default()
    }

    pub fn full(&self, phase: Phase) -> &'static str {
        self.full.get(&phase).copied().unwrap_or_default()
    }
}

fn base_labels(phase: Phase) -> (&'static str, &'static str) {
    match phase {
        Phase::PreCheckin => ("事前", "事前チェックイン"),
        Phase::Intake => ("受付", "入庫受付"),
        Phase::Diagnosis => ("診断", "故障診断"),
        Phase::Estimate => ("見積", "見積作成"),
        Phase::Approval => ("承認", "お客様承認"),
        Phase::Work => ("作業", "作業実施"),
        Phase::Report => ("報告", "作業報告・出庫"),
    }
}

// Inspections replace diagnosis with an intake inspection and work with a final check.
fn inspection_labels(phase: Phase) -> (&'static str, &'static str) {
    match phase {
        Phase::Diagnosis => ("受入", "受入点検"),
        Phase::Work => ("完成", "完成検査"),
        other => base_labels(other),
    }
}

/// Labels for a job of the given category kind
pub fn labels_for(kind: CategoryKind) -> PhaseLabels {
    let lookup = match kind {
        CategoryKind::Inspection => inspection_labels,
        CategoryKind::General => base_labels,
    };

    let mut short = BTreeMap::new();
    let mut full = BTreeMap::new();
    for phase in Phase::ALL {
        let (s, f) = lookup(phase);
        short.insert(phase, s);
        full.insert(phase, f);
    }
    PhaseLabels { short, full }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
