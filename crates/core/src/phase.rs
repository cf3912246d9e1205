// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job phases
//!
//! A job moves through seven ordered phases, from the customer's
//! pre-checkin form to the final report at release.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading a phase out of user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseError {
    #[error("invalid phase id {0}: expected 0-6")]
    OutOfRange(u8),
    #[error("unknown phase: {0}")]
    Unknown(String),
}

/// One stage of a job's lifecycle.
///
/// The discriminant is the phase id and defines the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Phase {
    PreCheckin = 0,
    Intake = 1,
    Diagnosis = 2,
    Estimate = 3,
    Approval = 4,
    Work = 5,
    Report = 6,
}

impl Phase {
    /// All phases in lifecycle order
    pub const ALL: [Phase; 7] = [
        Phase::PreCheckin,
        Phase::Intake,
        Phase::Diagnosis,
        Phase::Estimate,
        Phase::Approval,
        Phase::Work,
        Phase::Report,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Phase> {
        Phase::ALL.get(usize::from(id)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::PreCheckin => "pre-checkin",
            Phase::Intake => "intake",
            Phase::Diagnosis => "diagnosis",
            Phase::Estimate => "estimate",
            Phase::Approval => "approval",
            Phase::Work => "work",
            Phase::Report => "report",
        }
    }

    /// Whether this is the last phase of the lifecycle
    pub fn is_terminal(self) -> bool {
        self == Phase::Report
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.id()
    }
}

impl TryFrom<u8> for Phase {
    type Error = PhaseError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Phase::from_id(id).ok_or(PhaseError::OutOfRange(id))
    }
}

impl std::str::FromStr for Phase {
    type Err = PhaseError;

    /// Accepts either the numeric id or the phase name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Phase::try_from(id);
        }
        Phase::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| PhaseError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
