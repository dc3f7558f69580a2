//! Rendering of command results for stdout.

use std::fmt::Debug;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::AppResult;

/// How a result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Rust `{:#?}` output of the record.
    Debug,
}

pub fn render<T>(value: &T, format: Format) -> AppResult<String>
where
    T: Serialize + Debug,
{
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(value)?),
        Format::Debug => Ok(format!("{value:#?}")),
    }
}
