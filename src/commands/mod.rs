//! Command implementations for the ESPN Fantasy Football CLI
//!
//! Each handler runs one client operation and renders the result as text
//! lines or pretty JSON. Handlers return the rendered output instead of
//! printing it so the binary owns stdout.

pub mod boxscores;
pub mod draft;
pub mod free_agents;
pub mod league;
pub mod schedule;
pub mod teams;


use serde::Serialize;
use std::fmt::Display;

use crate::Result;

/// How a command prints its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render `items` as pretty JSON, or one `line` per item.
pub fn render<T, F>(items: &[T], format: OutputFormat, line: F) -> Result<String>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Text => Ok(items.iter().map(line).collect::<Vec<_>>().join("\n")),
    }
}

/// `-` for a missing value.
pub(crate) fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub(crate) fn points(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |p| format!("{:.2}", p))
}
