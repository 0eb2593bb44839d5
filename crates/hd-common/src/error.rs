//! Error types for Heredity.

use thiserror::Error;

/// Result type alias for Heredity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Heredity.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid model parameters: {0}")]
    InvalidModel(String),

    // Input errors (20-29)
    #[error("malformed pedigree: {0}")]
    MalformedPedigree(String),

    #[error("data error: {0}")]
    Data(String),

    // Inference errors (30-39)
    #[error("invalid assignment: {0}")]
    InvalidAssignment(String),

    #[error("degenerate evidence: {variable} distribution for '{person}' has no probability mass")]
    DegenerateEvidence {
        person: String,
        variable: &'static str,
    },

    #[error("population of {size} exceeds the enumeration ceiling of {max}")]
    PopulationTooLarge { size: usize, max: usize },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidModel(_) => 11,
            Error::MalformedPedigree(_) => 20,
            Error::Data(_) => 21,
            Error::InvalidAssignment(_) => 30,
            Error::DegenerateEvidence { .. } => 31,
            Error::PopulationTooLarge { .. } => 32,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::Csv(_) => 62,
        }
    }

    /// Whether the error stems from the caller's input rather than the engine.
    pub fn is_input_error(&self) -> bool {
        matches!(self.code(), 20..=29 | 62)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_group_by_category() {
        assert_eq!(Error::Config("x".into()).code(), 10);
        assert_eq!(Error::MalformedPedigree("x".into()).code(), 20);
        assert_eq!(
            Error::DegenerateEvidence {
                person: "Harry".into(),
                variable: "gene",
            }
            .code(),
            31
        );
        assert_eq!(Error::PopulationTooLarge { size: 40, max: 16 }.code(), 32);
    }

    #[test]
    fn degenerate_evidence_message_names_person() {
        let err = Error::DegenerateEvidence {
            person: "Lily".into(),
            variable: "trait",
        };
        let msg = err.to_string();
        assert!(msg.contains("Lily"), "{msg}");
        assert!(msg.contains("trait"), "{msg}");
    }

    #[test]
    fn input_errors_are_flagged() {
        assert!(Error::MalformedPedigree("cycle".into()).is_input_error());
        assert!(Error::Data("bad trait".into()).is_input_error());
        assert!(!Error::InvalidAssignment("short".into()).is_input_error());
        assert!(!Error::InvalidModel("sum".into()).is_input_error());
    }
}
