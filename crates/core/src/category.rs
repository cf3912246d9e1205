// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service category classification
//!
//! Label overrides and skip rules both key off whether a job is an
//! inspection. [`CategoryRules`] is the single place that decides it.

use serde::{Deserialize, Serialize};

/// Service categories treated as inspections out of the box
pub const DEFAULT_INSPECTION_CATEGORIES: [&str; 4] = [
    "車検",
    "vehicle inspection",
    "12ヵ月点検",
    "12-month inspection",
];

/// How the phase machine treats a service category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Statutory or periodic inspection
    Inspection,
    /// Any other service: repair, oil change, tyres, ...
    General,
}

/// Rules mapping free-form service category names to a [`CategoryKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    inspection: Vec<String>,
}

impl CategoryRules {
    /// Rules with no inspection categories at all
    pub fn empty() -> Self {
        Self {
            inspection: Vec::new(),
        }
    }

    /// Register an additional inspection category name
    pub fn with_inspection(mut self, name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        if !name.is_empty() && !self.is_inspection(&name) {
            self.inspection.push(name);
        }
        self
    }

    pub fn inspection_categories(&self) -> &[String] {
        &self.inspection
    }

    /// Classify a service category. Unknown names are `General`.
    pub fn kind_of(&self, category: &str) -> CategoryKind {
        if self.is_inspection(category) {
            CategoryKind::Inspection
        } else {
            CategoryKind::General
        }
    }

    fn is_inspection(&self, category: &str) -> bool {
        let category = category.trim();
        self.inspection
            .iter()
            .any(|name| name.eq_ignore_ascii_case(category))
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        DEFAULT_INSPECTION_CATEGORIES
            .into_iter()
            .fold(Self::empty(), Self::with_inspection)
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
