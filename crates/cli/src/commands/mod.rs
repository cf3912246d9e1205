// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod nav;
pub mod progress;
pub mod route;
pub mod statuses;
pub mod visible;
