//! Heredity configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for model.json (gene prior, penetrance, mutation rate)
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation of probability tables

pub mod model;
pub mod resolve;
pub mod validate;

pub use model::{GenePrior, ModelParams, Penetrance, PenetranceTable};
pub use resolve::{resolve_config, ConfigPaths, ModelSource, ResolvedModel};
pub use validate::{ValidationError, ValidationResult};
