//! LAS Reader Library
//!
//! A Rust library for reading Log ASCII Standard (LAS) well-log files:
//! labeled `~` sections of `MNEM.UNIT VALUE : DESCRIPTION` records
//! followed by a whitespace-delimited numeric data table indexed by depth
//! or time.
//!
//! This library provides tools for:
//! - Recognizing sections line by line in a single pass
//! - Tokenizing parameter lines into mnemonic, unit, value and description
//! - Ingesting the ~ASCII data table leniently, row by row
//! - Validating required fields and STRT/STOP/STEP against the index
//! - Read-only accessors over the parsed well, curve and parameter records
//!
//! Wrapped files (one index spanning several physical lines) are rejected
//! with [`LasError::WrappedUnsupported`].

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod header;
pub mod models;
pub mod reader;
pub mod section;
pub mod validation;

// CLI modules
pub mod cli;

// Re-export commonly used types
pub use config::ReaderConfig;
pub use error::{LasError, Result};
pub use models::{Parameter, ReadStats, Section};
pub use reader::{LasFile, LasSummary};
pub use validation::Diagnostic;
