// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pitstop-core: the job phase state machine for the pitstop shop tools
//!
//! This crate provides:
//! - The seven-phase catalog with category-dependent labels
//! - Skip rules and status-to-phase classification
//! - Role-based visibility and phase navigation
//! - Route construction for each phase
//!
//! Everything here is a pure function of a job snapshot supplied by the
//! caller.

pub mod phase;
pub mod status;
pub mod traced;

// Rules (order matters for dependencies)
pub mod category;
pub mod catalog;
pub mod job;
pub mod skip;
pub mod classify;
pub mod role;
pub mod route;
pub mod notice;
pub mod navigator;
pub mod config;
pub mod progress;

// Re-exports
pub use catalog::{labels_for, PhaseLabels};
pub use category::{CategoryKind, CategoryRules};
pub use classify::{classify, classify_pre_checkin, Classification, PhaseClassification};
pub use config::WorkflowConfig;
pub use job::{JobId, JobSnapshot};
pub use navigator::{next, previous, Direction, Navigation, Navigator};
pub use notice::Notice;
pub use phase::{Phase, PhaseError};
pub use progress::{Progress, Step};
pub use role::{visible_phases, Role};
pub use route::{RouteError, RouteTable, JOB_ID_PLACEHOLDER};
pub use skip::{skipped_for_job, skipped_phases};
pub use status::JobStatus;
pub use traced::Traced;
