// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Route template checks and environment expansion

use pitstop_core::JOB_ID_PLACEHOLDER;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Regex pattern for {variable_name} - this is a constant valid pattern
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("constant regex pattern is valid")
});

// Regex pattern for ${VAR:-default} environment variable expansion
#[allow(clippy::expect_used)]
static ENV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+):-([^}]*)\}").expect("constant regex pattern is valid"));

/// Problems with a route template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("route must start with '/': {0}")]
    NotAbsolute(String),
    #[error("route has no {{job_id}} placeholder: {0}")]
    MissingJobId(String),
    #[error("unknown placeholder {{{name}}} in route: {template}")]
    UnknownPlaceholder { name: String, template: String },
}

/// Expand `${VAR:-default}` patterns from the environment
pub fn expand_env(template: &str) -> String {
    ENV_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            let var_name = &caps[1];
            let default_value = &caps[2];
            std::env::var(var_name).unwrap_or_else(|_| default_value.to_string())
        })
        .to_string()
}

/// Names of all `{name}` placeholders in a template, in order
pub fn placeholders(template: &str) -> Vec<&str> {
    VAR_PATTERN
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Expand the environment and check the result is a usable route template
pub fn prepare_route(template: &str) -> Result<String, TemplateError> {
    let route = expand_env(template.trim());

    if !route.starts_with('/') {
        return Err(TemplateError::NotAbsolute(route));
    }
    let names = placeholders(&route);
    if let Some(unknown) = names.iter().find(|n| format!("{{{}}}", n) != JOB_ID_PLACEHOLDER) {
        return Err(TemplateError::UnknownPlaceholder {
            name: unknown.to_string(),
            template: route.clone(),
        });
    }
    if names.is_empty() {
        return Err(TemplateError::MissingJobId(route));
    }
    Ok(route)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
