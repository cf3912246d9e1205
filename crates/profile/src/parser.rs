// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shop profile TOML parsing

use crate::template::{prepare_route, TemplateError};
use crate::widget::WidgetDef;
use pitstop_core::{CategoryRules, Phase, RouteTable, WorkflowConfig};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default profile location relative to the shop root
pub const PROFILE_PATH: &str = ".pitstop/profile.toml";

/// Errors that can occur while loading a profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid phase in {key}: {value}")]
    InvalidPhase { key: String, value: String },
    #[error("routes.{phase}: {source}")]
    Template {
        phase: Phase,
        #[source]
        source: TemplateError,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A parsed shop profile
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub config: WorkflowConfig,
    pub widgets: HashMap<String, WidgetDef>,
}

impl Profile {
    /// Get a widget definition by name
    pub fn get_widget(&self, name: &str) -> Option<&WidgetDef> {
        self.widgets.get(name)
    }
}

/// Parse a profile from TOML content
pub fn parse_profile(content: &str) -> Result<Profile, ProfileError> {
    let raw: toml::Value = toml::from_str(content)?;
    let table = raw
        .as_table()
        .ok_or_else(|| ProfileError::InvalidFormat("root must be a table".to_string()))?;

    let mut profile = Profile::default();

    // Parse categories
    if let Some(categories) = table.get("categories") {
        profile.config.categories = parse_categories(categories)?;
    }

    // Parse routes
    if let Some(routes) = table.get("routes") {
        profile.config.routes = parse_routes(routes)?;
    }

    // Parse widgets
    if let Some(widgets) = table.get("widget").and_then(|v| v.as_table()) {
        for (name, value) in widgets {
            let widget = parse_widget(name, value)?;
            profile.widgets.insert(name.clone(), widget);
        }
    }

    tracing::debug!(
        inspection = profile.config.categories.inspection_categories().len(),
        widgets = profile.widgets.len(),
        "parsed profile"
    );
    Ok(profile)
}

/// Load the profile at `path`
pub fn load_profile(path: &Path) -> Result<Profile, ProfileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_profile(&content)
}

/// Load `.pitstop/profile.toml` under `root`, or defaults if there is none
pub fn load_profile_or_default(root: &Path) -> Result<Profile, ProfileError> {
    let path = root.join(PROFILE_PATH);
    if path.exists() {
        load_profile(&path)
    } else {
        tracing::debug!(path = %path.display(), "no profile, using defaults");
        Ok(Profile::default())
    }
}

fn parse_categories(value: &toml::Value) -> Result<CategoryRules, ProfileError> {
    let table = value
        .as_table()
        .ok_or_else(|| ProfileError::InvalidFormat("categories must be a table".to_string()))?;

    let mut rules = CategoryRules::default();
    if let Some(inspection) = table.get("inspection") {
        let names = inspection.as_array().ok_or_else(|| {
            ProfileError::InvalidFormat("categories.inspection must be an array".to_string())
        })?;
        for name in names {
            let name = name.as_str().ok_or_else(|| {
                ProfileError::InvalidFormat(
                    "categories.inspection entries must be strings".to_string(),
                )
            })?;
            rules = rules.with_inspection(name);
        }
    }
    Ok(rules)
}

fn parse_routes(value: &toml::Value) -> Result<RouteTable, ProfileError> {
    let table = value
        .as_table()
        .ok_or_else(|| ProfileError::InvalidFormat("routes must be a table".to_string()))?;

    let mut routes = RouteTable::standard();
    for (key, template) in table {
        let phase: Phase = key.parse().map_err(|_| ProfileError::InvalidPhase {
            key: "routes".to_string(),
            value: key.clone(),
        })?;
        let template = template.as_str().ok_or_else(|| {
            ProfileError::InvalidFormat(format!("routes.{} must be a string", key))
        })?;
        let template =
            prepare_route(template).map_err(|source| ProfileError::Template { phase, source })?;
        routes = routes.with_template(phase, template);
    }
    Ok(routes)
}

fn parse_widget(name: &str, value: &toml::Value) -> Result<WidgetDef, ProfileError> {
    let table = value
        .as_table()
        .ok_or_else(|| ProfileError::InvalidFormat(format!("widget.{} must be a table", name)))?;

    let exclude = match table.get("exclude") {
        Some(v) => v
            .as_array()
            .ok_or_else(|| {
                ProfileError::InvalidFormat(format!("widget.{}.exclude must be an array", name))
            })?
            .iter()
            .map(|id| parse_phase_id(&format!("widget.{}.exclude", name), id))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(WidgetDef {
        name: name.to_string(),
        exclude,
    })
}

fn parse_phase_id(key: &str, value: &toml::Value) -> Result<Phase, ProfileError> {
    value
        .as_integer()
        .and_then(|id| u8::try_from(id).ok())
        .and_then(Phase::from_id)
        .ok_or_else(|| ProfileError::InvalidPhase {
            key: key.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
