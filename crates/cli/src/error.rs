// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing errors.
//!
//! A [`PitstopError`] is printed as one `error:` line, followed by the
//! causes that led to it and hints for getting unstuck.

use pitstop_core::{Phase, RouteError};
use std::fmt;
use std::path::Path;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub struct PitstopError {
    message: String,
    causes: Vec<String>,
    hints: Vec<String>,
    source: Option<BoxedSource>,
}

impl PitstopError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
            hints: Vec::new(),
            source: None,
        }
    }

    /// Record what led to the failure
    pub fn because(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Suggest a way forward
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Keep the underlying error; its message becomes the first cause
    pub fn caused_by<E>(self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let mut err = self.because(source.to_string());
        err.source = Some(Box::new(source));
        err
    }

    // Builders for the failures commands share

    pub fn invalid_profile<E>(path: &Path, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(format!("Failed to load profile '{}'", path.display()))
            .caused_by(err)
            .hint("Phase ids in [routes] and widget exclusions must be 0-6")
            .hint("Route templates must start with '/' and use only {job_id}")
    }

    pub fn job_unavailable<E>(job: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(format!("Failed to load job '{}'", job))
            .caused_by(err)
            .hint("Pass a path to a job JSON file: --job ./job.json")
            .hint(format!(
                "Or export the job to {}/<id>.json",
                crate::context::JOBS_DIR
            ))
    }

    pub fn missing_job_id(phase: Phase, err: RouteError) -> Self {
        Self::new(format!("Cannot build a route for phase {}", phase))
            .because("The job has no id")
            .hint("Pass --job-id, or include \"id\" in the job record")
            .with_source(err)
    }

    pub fn unknown_widget(name: &str, defined: &[&str]) -> Self {
        let err = Self::new(format!("Unknown widget '{}'", name));
        if defined.is_empty() {
            err.because("The profile defines no widgets")
                .hint("Add a [widget.<name>] table to the profile")
        } else {
            err.because(format!("Defined widgets: {}", defined.join(", ")))
        }
    }

    fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for PitstopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;
        for cause in &self.causes {
            writeln!(f, "  cause: {}", cause)?;
        }
        for hint in &self.hints {
            writeln!(f, "  hint: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for PitstopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
