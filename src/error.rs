//! Error handling for LAS read operations.
//!
//! Only conditions that make the rest of the file unreadable are errors.
//! Problems that leave the parsed data usable are reported as
//! [`Diagnostic`](crate::validation::Diagnostic) values instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LasError {
    #[error("Wrong file extension for {path}: expected .las")]
    WrongExtension { path: PathBuf },

    #[error("File could not be opened: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line_number} appears before any section header")]
    UndefinedSection { line_number: usize },

    #[error("Could not determine wrap mode: WRAP value should be YES or NO, found '{value}'")]
    InvalidWrapMode { value: String },

    #[error("Reading in wrapped mode is not implemented")]
    WrappedUnsupported,
}

pub type Result<T> = std::result::Result<T, LasError>;
