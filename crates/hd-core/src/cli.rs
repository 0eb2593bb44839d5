//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use hd_common::{OutputFormat, Result};
use hd_config::{resolve_config, ConfigPaths};
use tracing::info;

use crate::inference::{EnumerationStrategy, InferenceConfig, InferenceEngine};
use crate::output::render;
use crate::pedigree::load_csv;

/// Exact gene and trait posteriors for a family pedigree.
#[derive(Debug, Parser)]
#[command(name = "heredity", version, about)]
pub struct Cli {
    /// Pedigree CSV with columns name, mother, father, trait
    pub data: PathBuf,

    /// Model parameter file (JSON); otherwise $HEREDITY_MODEL, the user config
    /// directory, then built-in defaults
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Override the model's mutation rate
    #[arg(long, value_name = "RATE")]
    pub mutation_rate: Option<f64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Assignment enumeration strategy
    #[arg(long, value_enum, default_value_t = EnumerationStrategy::Exhaustive)]
    pub strategy: EnumerationStrategy,

    /// Refuse pedigrees with more people than this
    #[arg(long, value_name = "N")]
    pub max_population: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    fn inference_config(&self) -> InferenceConfig {
        let defaults = InferenceConfig::default();
        InferenceConfig {
            max_population: self.max_population.unwrap_or(defaults.max_population),
            strategy: self.strategy,
        }
    }
}

/// Run one inference and return the rendered report.
pub fn run(cli: &Cli) -> Result<String> {
    let resolved = resolve_config(&ConfigPaths::discover(cli.model.as_deref()))?;
    info!(source = %resolved.source, "model resolved");

    let mut model = resolved.model;
    if let Some(rate) = cli.mutation_rate {
        model = model.with_mutation_rate(rate);
    }
    let engine = InferenceEngine::new(model, cli.inference_config())?;

    let pedigree = load_csv(&cli.data)?;
    let posterior = engine.infer(&pedigree)?;
    render(&posterior, cli.format)
}
