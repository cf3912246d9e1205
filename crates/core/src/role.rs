// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Role-based phase visibility

use crate::phase::Phase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The acting party, taken from the authenticated session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Mechanic,
    Customer,
    #[serde(alias = "admin")]
    FrontDesk,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Mechanic, Role::Customer, Role::FrontDesk];

    pub fn name(self) -> &'static str {
        match self {
            Role::Mechanic => "mechanic",
            Role::Customer => "customer",
            Role::FrontDesk => "front-desk",
        }
    }

    /// Phases this role may view or navigate into, in order
    pub fn phases(self) -> &'static [Phase] {
        match self {
            Role::Mechanic => &[Phase::Diagnosis, Phase::Work],
            Role::Customer => &[Phase::PreCheckin, Phase::Approval, Phase::Report],
            Role::FrontDesk => &Phase::ALL,
        }
    }

    pub fn permits(self, phase: Phase) -> bool {
        self.phases().contains(&phase)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mechanic" => Ok(Role::Mechanic),
            "customer" => Ok(Role::Customer),
            "front-desk" | "frontdesk" | "admin" => Ok(Role::FrontDesk),
            other => Err(format!(
                "unknown role '{}': expected mechanic, customer, front-desk or admin",
                other
            )),
        }
    }
}

/// The phases a role sees, in ascending order.
///
/// Role filtering comes first, then the caller's exclusions, then skipped
/// phases. Filtering only ever removes phases.
pub fn visible_phases(role: Role, excluded: &[Phase], skipped: &BTreeSet<Phase>) -> Vec<Phase> {
    role.phases()
        .iter()
        .copied()
        .filter(|phase| !excluded.contains(phase))
        .filter(|phase| !skipped.contains(phase))
        .collect()
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
