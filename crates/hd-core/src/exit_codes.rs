//! Exit codes for the heredity CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.

use hd_common::Error;

/// Exit codes for heredity runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Posteriors computed and printed
    Success = 0,

    /// Model configuration missing, unreadable or invalid
    ConfigError = 10,

    /// Pedigree data malformed or unreadable as CSV
    InputError = 11,

    /// Inference could not produce a posterior
    InferenceError = 12,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        if err.is_input_error() {
            return ExitCode::InputError;
        }
        match err.code() {
            10..=19 => ExitCode::ConfigError,
            30..=39 => ExitCode::InferenceError,
            60 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}
