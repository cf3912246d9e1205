// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job snapshot sources

mod file;

pub use file::{read_snapshot, FileJobSource};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeJobSource;

use pitstop_core::{JobId, JobSnapshot};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading a job snapshot
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid job record in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Adapter for fetching the latest snapshot of a job
pub trait JobSource: Clone + Send + Sync + 'static {
    /// Load the job with the given id
    fn load(&self, id: &JobId) -> Result<JobSnapshot, SourceError>;
}
