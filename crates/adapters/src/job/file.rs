// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job records exported as JSON files

use super::{JobSource, SourceError};
use pitstop_core::{JobId, JobSnapshot};
use std::path::{Path, PathBuf};

/// Reads `<dir>/<job id>.json`
#[derive(Debug, Clone)]
pub struct FileJobSource {
    dir: PathBuf,
}

impl FileJobSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: &JobId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl JobSource for FileJobSource {
    fn load(&self, id: &JobId) -> Result<JobSnapshot, SourceError> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(SourceError::NotFound(id.clone()));
        }
        let mut job = read_snapshot(&path)?;
        // Exports keyed by file name may omit the id
        if job.id.is_none() {
            job.id = Some(id.clone());
        }
        Ok(job)
    }
}

/// Read a single job snapshot from a JSON file
pub fn read_snapshot(path: &Path) -> Result<JobSnapshot, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
