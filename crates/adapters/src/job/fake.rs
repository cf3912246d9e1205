// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake job source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{JobSource, SourceError};
use pitstop_core::{JobId, JobSnapshot};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory job source that records every lookup
#[derive(Clone, Default)]
pub struct FakeJobSource {
    jobs: Arc<Mutex<HashMap<JobId, JobSnapshot>>>,
    calls: Arc<Mutex<Vec<JobId>>>,
}

impl FakeJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot under its own id
    pub fn insert(&self, job: JobSnapshot) {
        if let Some(id) = job.id.clone() {
            self.jobs
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .insert(id, job);
        }
    }

    /// Get all recorded lookups
    pub fn calls(&self) -> Vec<JobId> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl JobSource for FakeJobSource {
    fn load(&self, id: &JobId) -> Result<JobSnapshot, SourceError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(id.clone());
        self.jobs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.clone()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
