//! Output format selection for reports.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report rendering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Indented plain text, four decimals per probability
    #[default]
    Text,
    /// Pretty-printed JSON with schema version
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
