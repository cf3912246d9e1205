// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Render one value
    pub fn render<T: Serialize + Display>(self, value: &T) -> String {
        match self {
            OutputFormat::Text => value.to_string(),
            OutputFormat::Json => to_json(value),
        }
    }

    /// Render a list: one line per item, or a JSON array
    pub fn render_list<T: Serialize + Display>(self, items: &[T]) -> String {
        match self {
            OutputFormat::Text => items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => to_json(items),
        }
    }

    /// Render a value that may be absent: `none` as text, `null` as JSON
    pub fn render_optional<T: Serialize + Display>(self, value: Option<&T>) -> String {
        match (value, self) {
            (Some(value), _) => self.render(value),
            (None, OutputFormat::Text) => "none".to_string(),
            (None, OutputFormat::Json) => "null".to_string(),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to encode output");
        "null".to_string()
    })
}

pub fn print<T: Serialize + Display>(value: &T, format: OutputFormat) {
    println!("{}", format.render(value));
}

pub fn print_list<T: Serialize + Display>(items: &[T], format: OutputFormat) {
    let rendered = format.render_list(items);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
}

pub fn print_optional<T: Serialize + Display>(value: Option<&T>, format: OutputFormat) {
    println!("{}", format.render_optional(value));
}
