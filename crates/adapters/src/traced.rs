// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging wrapper for job sources

use crate::job::{JobSource, SourceError};
use pitstop_core::{JobId, JobSnapshot};
use std::time::Instant;

/// Runs every load of the inner source inside a `job.load` span
#[derive(Clone)]
pub struct TracedJobSource<S> {
    inner: S,
}

impl<S> TracedJobSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: JobSource> JobSource for TracedJobSource<S> {
    fn load(&self, id: &JobId) -> Result<JobSnapshot, SourceError> {
        tracing::info_span!("job.load", id = %id).in_scope(|| {
            let started = Instant::now();
            let result = self.inner.load(id);
            let elapsed_ms = started.elapsed().as_millis() as u64;

            match &result {
                Ok(job) => tracing::info!(
                    elapsed_ms,
                    status = job.status.as_deref(),
                    category = %job.service_category,
                    "job loaded"
                ),
                // A missing job is a usage problem reported by the caller
                Err(e @ SourceError::NotFound(_)) => {
                    tracing::debug!(elapsed_ms, error = %e, "load failed")
                }
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "load failed"),
            }
            result
        })
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
