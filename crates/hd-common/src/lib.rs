//! Heredity common types, IDs, and errors.
//!
//! This crate provides foundational types shared across hd-core modules:
//! - Person identity type
//! - The closed gene-count enumeration
//! - Schema versioning for JSON outputs
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod gene;
pub mod id;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use gene::GeneCount;
pub use id::PersonId;
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
