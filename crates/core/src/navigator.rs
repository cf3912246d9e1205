// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase navigation
//!
//! Stepping moves along the visible phase list. Moving forward requires
//! the current phase to be active or completed; landing on any phase
//! requires the role to be permitted there.

use crate::notice::Notice;
use crate::phase::Phase;
use crate::role::Role;
use crate::route::{RouteError, RouteTable};
use crate::traced::Traced;
use serde::{Deserialize, Serialize};

/// Which way to step along the visible phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

/// The phase before `current` in `visible`
pub fn previous(current: Phase, visible: &[Phase]) -> Option<Phase> {
    let idx = visible.iter().position(|p| *p == current)?;
    idx.checked_sub(1).and_then(|i| visible.get(i)).copied()
}

/// The phase after `current` in `visible`.
///
/// Returns `None` unless the caller asserts `current` is reachable.
pub fn next(current: Phase, visible: &[Phase], is_current_reachable: bool) -> Option<Phase> {
    if !is_current_reachable {
        return None;
    }
    let idx = visible.iter().position(|p| *p == current)?;
    visible.get(idx + 1).copied()
}

/// Outcome of a navigation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    Allowed { phase: Phase, route: String },
    Denied { notice: Notice },
}

impl Navigation {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Navigation::Allowed { .. })
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Navigation::Denied { notice } => Some(notice),
            Navigation::Allowed { .. } => None,
        }
    }
}

impl Traced for Navigation {
    fn name(&self) -> &'static str {
        match self {
            Navigation::Allowed { .. } => "allowed",
            Navigation::Denied { notice } => notice.name(),
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Navigation::Allowed { phase, route } => {
                vec![("phase", phase.to_string()), ("route", route.clone())]
            }
            Navigation::Denied { notice } => notice.fields(),
        }
    }
}

/// Turns navigation intents into routes or notices
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    routes: RouteTable,
}

impl Navigator {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Request navigation straight to `target`.
    ///
    /// A role without access gets a notice. A permitted request without a
    /// job id is a caller error.
    pub fn request(
        &self,
        role: Role,
        target: Phase,
        job_id: Option<&str>,
    ) -> Result<Navigation, RouteError> {
        let navigation = if role.permits(target) {
            let route = self.routes.route_for(target, job_id)?;
            Navigation::Allowed {
                phase: target,
                route,
            }
        } else {
            Navigation::Denied {
                notice: Notice::NotPermitted {
                    role,
                    phase: target,
                },
            }
        };
        trace(&navigation, job_id);
        Ok(navigation)
    }

    /// Step from `current` to its neighbour in `visible`.
    ///
    /// `Ok(None)` means there is no neighbour in that direction.
    pub fn step(
        &self,
        direction: Direction,
        role: Role,
        current: Phase,
        visible: &[Phase],
        is_current_reachable: bool,
        job_id: Option<&str>,
    ) -> Result<Option<Navigation>, RouteError> {
        let target = match direction {
            Direction::Previous => previous(current, visible),
            Direction::Next => {
                let Some(target) = next(current, visible, true) else {
                    return Ok(None);
                };
                if !is_current_reachable {
                    let navigation = Navigation::Denied {
                        notice: Notice::FinishCurrentPhase { phase: current },
                    };
                    trace(&navigation, job_id);
                    return Ok(Some(navigation));
                }
                Some(target)
            }
        };

        target
            .map(|target| self.request(role, target, job_id))
            .transpose()
    }
}

fn trace(navigation: &Navigation, job_id: Option<&str>) {
    match navigation {
        Navigation::Allowed { .. } => {
            tracing::debug!(job_id, outcome = navigation.name(), fields = ?navigation.fields(), "navigation")
        }
        Navigation::Denied { .. } => {
            tracing::info!(job_id, outcome = navigation.name(), fields = ?navigation.fields(), "navigation refused")
        }
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;
