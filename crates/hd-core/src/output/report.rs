//! Posterior report rendering.
//!
//! Two formats:
//! - Text: one block per person, gene counts listed from two copies down to
//!   zero, then trait presence, each probability to four decimals.
//! - JSON: a versioned envelope around the per-person distributions.

use hd_common::{GeneCount, OutputFormat, Result, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

use crate::inference::{PedigreePosterior, PersonPosterior};

// ---------------------------------------------------------------------------
// JSON envelope
// ---------------------------------------------------------------------------

/// Machine-readable report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosteriorReport {
    pub schema_version: String,
    pub people: PedigreePosterior,
}

impl PosteriorReport {
    pub fn new(people: PedigreePosterior) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            people,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render in the requested format.
pub fn render(posterior: &PedigreePosterior, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(posterior)),
        OutputFormat::Json => render_json(posterior),
    }
}

/// Render every person as an indented text block.
pub fn render_text(posterior: &PedigreePosterior) -> String {
    posterior
        .iter()
        .map(render_person)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the report as pretty-printed JSON.
pub fn render_json(posterior: &PedigreePosterior) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PosteriorReport::new(
        posterior.clone(),
    ))?)
}

fn render_person(person: &PersonPosterior) -> String {
    let mut lines = Vec::with_capacity(8);
    lines.push(format!("{}:", person.id));
    lines.push("  Gene:".to_string());
    for count in GeneCount::ALL.iter().rev() {
        lines.push(format!("    {}: {:.4}", count, person.gene.get(*count)));
    }
    lines.push("  Trait:".to_string());
    for has_trait in [true, false] {
        let label = if has_trait { "True" } else { "False" };
        lines.push(format!("    {}: {:.4}", label, person.trait_.get(has_trait)));
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
