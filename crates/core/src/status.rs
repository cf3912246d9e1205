// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job lifecycle statuses
//!
//! The job record persists its status as a Japanese label. Each label
//! also has an English alias for use on the command line and in tests.

use serde::{Deserialize, Serialize};

/// The current lifecycle status of a job.
///
/// Variants are declared in canonical lifecycle order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "入庫待ち", alias = "awaiting_intake")]
    AwaitingIntake,
    #[serde(rename = "入庫済み", alias = "intake_complete")]
    IntakeComplete,
    #[serde(rename = "見積作成待ち", alias = "awaiting_estimate")]
    AwaitingEstimate,
    #[serde(rename = "見積提示済み", alias = "estimate_presented")]
    EstimatePresented,
    #[serde(rename = "お客様承認待ち", alias = "awaiting_customer_approval")]
    AwaitingCustomerApproval,
    #[serde(rename = "部品発注待ち", alias = "awaiting_parts_order")]
    AwaitingPartsOrder,
    #[serde(rename = "部品調達待ち", alias = "awaiting_parts")]
    AwaitingParts,
    #[serde(rename = "作業待ち", alias = "awaiting_work")]
    AwaitingWork,
    #[serde(rename = "出庫待ち", alias = "awaiting_release")]
    AwaitingRelease,
    #[serde(rename = "出庫済み", alias = "released")]
    Released,
}

impl JobStatus {
    /// All statuses in canonical lifecycle order
    pub const ALL: [JobStatus; 10] = [
        JobStatus::AwaitingIntake,
        JobStatus::IntakeComplete,
        JobStatus::AwaitingEstimate,
        JobStatus::EstimatePresented,
        JobStatus::AwaitingCustomerApproval,
        JobStatus::AwaitingPartsOrder,
        JobStatus::AwaitingParts,
        JobStatus::AwaitingWork,
        JobStatus::AwaitingRelease,
        JobStatus::Released,
    ];

    /// The label persisted on the job record
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::AwaitingIntake => "入庫待ち",
            JobStatus::IntakeComplete => "入庫済み",
            JobStatus::AwaitingEstimate => "見積作成待ち",
            JobStatus::EstimatePresented => "見積提示済み",
            JobStatus::AwaitingCustomerApproval => "お客様承認待ち",
            JobStatus::AwaitingPartsOrder => "部品発注待ち",
            JobStatus::AwaitingParts => "部品調達待ち",
            JobStatus::AwaitingWork => "作業待ち",
            JobStatus::AwaitingRelease => "出庫待ち",
            JobStatus::Released => "出庫済み",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            JobStatus::AwaitingIntake => "awaiting_intake",
            JobStatus::IntakeComplete => "intake_complete",
            JobStatus::AwaitingEstimate => "awaiting_estimate",
            JobStatus::EstimatePresented => "estimate_presented",
            JobStatus::AwaitingCustomerApproval => "awaiting_customer_approval",
            JobStatus::AwaitingPartsOrder => "awaiting_parts_order",
            JobStatus::AwaitingParts => "awaiting_parts",
            JobStatus::AwaitingWork => "awaiting_work",
            JobStatus::AwaitingRelease => "awaiting_release",
            JobStatus::Released => "released",
        }
    }

    /// Position in the canonical lifecycle ordering
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Look up a status by persisted label or English alias.
    ///
    /// Returns `None` for anything else; callers treat that as "no status".
    pub fn parse(s: &str) -> Option<JobStatus> {
        let s = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.label() == s || status.alias() == s)
    }

    /// Check if the job has left the shop
    pub fn is_released(self) -> bool {
        self == JobStatus::Released
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
