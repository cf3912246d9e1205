// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Informational notices for refused navigation
//!
//! Refusals are shown to the user as a non-blocking notice. They are
//! values, not errors.

use crate::phase::Phase;
use crate::role::Role;
use crate::traced::Traced;
use serde::Serialize;

/// Why a navigation request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The source phase is neither active nor completed
    FinishCurrentPhase { phase: Phase },
    /// The role has no access to the destination phase
    NotPermitted { role: Role, phase: Phase },
}

impl Notice {
    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Notice::FinishCurrentPhase { .. } => "現在のフェーズを完了してください",
            Notice::NotPermitted { .. } => "このフェーズへのアクセス権限がありません",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Traced for Notice {
    fn name(&self) -> &'static str {
        match self {
            Notice::FinishCurrentPhase { .. } => "finish_current_phase",
            Notice::NotPermitted { .. } => "not_permitted",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Notice::FinishCurrentPhase { phase } => vec![("phase", phase.to_string())],
            Notice::NotPermitted { role, phase } => {
                vec![("role", role.to_string()), ("phase", phase.to_string())]
            }
        }
    }
}
