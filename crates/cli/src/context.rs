// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shop context shared by commands: profile, job lookup and output format

use crate::error::PitstopError;
use crate::output::OutputFormat;
use pitstop_adapters::{read_snapshot, FileJobSource, JobSource, TracedJobSource};
use pitstop_core::{JobId, JobSnapshot, Phase, WorkflowConfig};
use pitstop_profile::{load_profile, load_profile_or_default, Profile, PROFILE_PATH};
use std::path::{Path, PathBuf};

/// Directory of exported job records, relative to the shop root
pub const JOBS_DIR: &str = ".pitstop/jobs";

pub struct Context {
    pub root: PathBuf,
    pub profile: Profile,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the shop root and load its profile
    pub fn load(
        root: Option<PathBuf>,
        profile: Option<PathBuf>,
        format: OutputFormat,
    ) -> Result<Self, PitstopError> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir()
                .map_err(|e| PitstopError::new("Cannot determine current directory").caused_by(e))?,
        };

        let profile = match profile {
            Some(path) => {
                load_profile(&path).map_err(|e| PitstopError::invalid_profile(&path, e))?
            }
            None => load_profile_or_default(&root)
                .map_err(|e| PitstopError::invalid_profile(&root.join(PROFILE_PATH), e))?,
        };

        Ok(Self {
            root,
            profile,
            format,
        })
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.profile.config
    }

    /// Load a job from a JSON file path, or by id from the jobs directory
    pub fn load_job(&self, job: &str) -> Result<JobSnapshot, PitstopError> {
        let source = TracedJobSource::new(FileJobSource::new(self.root.join(JOBS_DIR)));
        load_job_with(&source, job)
    }

    /// Phases to hide: explicit exclusions plus the named widget's
    pub fn excluded(
        &self,
        exclude: &[Phase],
        widget: Option<&str>,
    ) -> Result<Vec<Phase>, PitstopError> {
        let mut excluded = exclude.to_vec();
        if let Some(name) = widget {
            let def = self.profile.get_widget(name).ok_or_else(|| {
                let mut available: Vec<&str> =
                    self.profile.widgets.keys().map(String::as_str).collect();
                available.sort_unstable();
                PitstopError::unknown_widget(name, &available)
            })?;
            excluded.extend(def.exclude.iter().copied());
        }
        excluded.sort_unstable();
        excluded.dedup();
        Ok(excluded)
    }
}

/// Resolve `job` as a file path first, then as a job id in `source`
pub fn load_job_with<S: JobSource>(source: &S, job: &str) -> Result<JobSnapshot, PitstopError> {
    let path = Path::new(job);
    if path.is_file() {
        return read_snapshot(path).map_err(|e| PitstopError::job_unavailable(job, e));
    }
    source
        .load(&JobId::from(job))
        .map_err(|e| PitstopError::job_unavailable(job, e))
}
