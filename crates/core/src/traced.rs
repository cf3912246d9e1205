// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing infrastructure for navigation outcomes

/// Trait for outcomes that should be traced
///
/// Provides consistent naming and structured fields for logging.
pub trait Traced {
    /// Outcome name for log events (e.g., "allowed", "not_permitted")
    fn name(&self) -> &'static str;

    /// Key-value pairs for structured logging
    fn fields(&self) -> Vec<(&'static str, String)>;
}
