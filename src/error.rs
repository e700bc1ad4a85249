// src/error.rs
use crate::integrity::ValidationReport;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file too small: expected {expected} bytes, found {found}")]
    ShortRead { expected: usize, found: usize },

    #[error("Save validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Could not write output {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Converted save failed verification: {0}")]
    Verification(String),
}

impl SaveError {
    /// Diagnostics carried by a validation failure, empty for every other error
    pub fn diagnostics(&self) -> &[crate::integrity::Diagnostic] {
        match self {
            SaveError::Validation(report) => report.diagnostics(),
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, SaveError>;
