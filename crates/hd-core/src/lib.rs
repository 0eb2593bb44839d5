//! Heredity core library.
//!
//! Exact Bayesian inference of gene-copy counts and trait presence across a
//! small family pedigree.

pub mod cli;
pub mod exit_codes;
pub mod inference;
pub mod logging;
pub mod output;
pub mod pedigree;

pub use inference::{infer, InferenceConfig, InferenceEngine, PedigreePosterior};
pub use pedigree::{load_csv, Pedigree, PersonRecord, TraitEvidence};
