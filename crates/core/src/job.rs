// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job snapshot
//!
//! The job record is owned by the shop backend. The phase machine only
//! ever sees a read-only snapshot of the fields it needs.

use crate::category::{CategoryKind, CategoryRules};
use crate::status::JobStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier of a job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        JobId(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        JobId(s.to_string())
    }
}

/// The fields of a job the phase machine reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    #[serde(default)]
    pub id: Option<JobId>,
    /// Raw status as persisted; may be missing or unrecognized
    #[serde(default)]
    pub status: Option<String>,
    /// Free-form category; `null` in the export reads as empty (general)
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_category: String,
    /// Whether the inspection turned up extra work needing an estimate
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_additional_estimate: bool,
    /// Set once the customer has submitted the pre-checkin form
    #[serde(default)]
    pub pre_checkin_at: Option<DateTime<Utc>>,
}

impl JobSnapshot {
    pub fn new(service_category: impl Into<String>) -> Self {
        Self {
            service_category: service_category.into(),
            ..Self::default()
        }
    }

    pub fn with_id(self, id: impl Into<JobId>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn with_status(self, status: JobStatus) -> Self {
        Self {
            status: Some(status.label().to_string()),
            ..self
        }
    }

    /// Set the status from an arbitrary string, recognized or not
    pub fn with_raw_status(self, status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..self
        }
    }

    pub fn with_additional_estimate(self, has_additional_estimate: bool) -> Self {
        Self {
            has_additional_estimate,
            ..self
        }
    }

    pub fn with_pre_checkin_at(self, at: DateTime<Utc>) -> Self {
        Self {
            pre_checkin_at: Some(at),
            ..self
        }
    }

    /// The recognized lifecycle status, if any.
    ///
    /// Unrecognized strings are logged and read as no status.
    pub fn status(&self) -> Option<JobStatus> {
        let raw = self.status.as_deref()?;
        let parsed = JobStatus::parse(raw);
        if parsed.is_none() {
            tracing::debug!(
                job_id = self.id.as_ref().map(JobId::as_str),
                status = raw,
                "unrecognized job status"
            );
        }
        parsed
    }

    pub fn category_kind(&self, rules: &CategoryRules) -> CategoryKind {
        rules.kind_of(&self.service_category)
    }

    /// Whether the external pre-checkin marker is present
    pub fn has_pre_checkin(&self) -> bool {
        self.pre_checkin_at.is_some()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
