// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statuses command: the canonical lifecycle ordering

use crate::output::{self, OutputFormat};
use pitstop_core::JobStatus;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct StatusEntry {
    rank: usize,
    label: &'static str,
    alias: &'static str,
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2} {} ({})", self.rank, self.label, self.alias)
    }
}

pub fn handle(format: OutputFormat) {
    let entries: Vec<StatusEntry> = JobStatus::ALL
        .into_iter()
        .map(|status| StatusEntry {
            rank: status.rank(),
            label: status.label(),
            alias: status.alias(),
        })
        .collect();
    output::print_list(&entries, format);
}
