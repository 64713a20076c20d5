//! Post-read consistency checks.
//!
//! Runs once over the populated Version and Well tables and the data
//! table. Nothing here stops a read: every finding becomes a
//! [`Diagnostic`] the caller can inspect alongside the parsed data.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::constants::well::{STEP, STOP, STRT};
use crate::data::DataTable;
use crate::models::{ParameterTable, Section};

/// A recoverable problem found while reading or validating a file
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("Required field {mnemonic} could not be read from file")]
    MissingRequired { mnemonic: String },

    #[error("First index value {first_index} is not equal to STRT value {declared}")]
    StartMismatch { first_index: f64, declared: String },

    #[error("Last index value {last_index} is not equal to STOP value {declared}")]
    StopMismatch { last_index: f64, declared: String },

    #[error("Actual index step {actual} is not equal to STEP value {declared}")]
    StepMismatch { actual: f64, declared: String },

    #[error("STEP must be 0 for inconsistent index increment, found {declared}")]
    NonZeroStepForInconsistentIndex { declared: String },

    #[error("{mnemonic} value '{value}' is not a number")]
    InvalidNumber { mnemonic: String, value: String },

    #[error("Malformed parameter line {line_number} in {section}: {reason}")]
    MalformedParameterLine {
        line_number: usize,
        section: Section,
        reason: String,
    },

    #[error("Data line {line_number} skipped: {reason}")]
    UnparseableDataRow { line_number: usize, reason: String },

    #[error("Index value {index} repeated at line {line_number}, earlier row replaced")]
    DuplicateIndex { index: f64, line_number: usize },
}

/// Spacing of the index column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexSpacing {
    /// Fewer than two rows, spacing is undefined
    TooShort,
    /// Every adjacent difference matches the first one within tolerance
    Uniform(f64),
    Irregular,
}

/// Classify the spacing of `index` using the first difference as reference
pub fn index_spacing(index: &[f64], precision: f64) -> IndexSpacing {
    if index.len() < 2 {
        return IndexSpacing::TooShort;
    }

    let step = index[1] - index[0];
    let uniform = index
        .windows(2)
        .all(|pair| ((pair[1] - pair[0]) - step).abs() <= precision);

    if uniform {
        IndexSpacing::Uniform(step)
    } else {
        IndexSpacing::Irregular
    }
}

/// Run every post-read check
pub fn validate(
    version: &ParameterTable,
    well: &ParameterTable,
    data: &DataTable,
    precision: f64,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for table in [version, well] {
        for mnemonic in table.missing_required() {
            diagnostics.push(Diagnostic::MissingRequired {
                mnemonic: mnemonic.to_string(),
            });
        }
    }

    let (Some(first), Some(last)) = (data.first_index(), data.last_index()) else {
        debug!("No data rows, skipping index checks");
        return diagnostics;
    };

    if let Some(start) = declared_number(well, STRT, &mut diagnostics) {
        if (start - first).abs() > precision {
            diagnostics.push(Diagnostic::StartMismatch {
                first_index: first,
                declared: raw_value(well, STRT),
            });
        }
    }

    if let Some(stop) = declared_number(well, STOP, &mut diagnostics) {
        if (stop - last).abs() > precision {
            diagnostics.push(Diagnostic::StopMismatch {
                last_index: last,
                declared: raw_value(well, STOP),
            });
        }
    }

    let spacing = index_spacing(data.index(), precision);
    if spacing == IndexSpacing::TooShort {
        debug!("Fewer than two data rows, skipping step checks");
        return diagnostics;
    }

    if let Some(step) = declared_number(well, STEP, &mut diagnostics) {
        match spacing {
            IndexSpacing::Irregular if step != 0.0 => {
                diagnostics.push(Diagnostic::NonZeroStepForInconsistentIndex {
                    declared: raw_value(well, STEP),
                });
            }
            IndexSpacing::Uniform(actual) if (step - actual).abs() > precision => {
                diagnostics.push(Diagnostic::StepMismatch {
                    actual,
                    declared: raw_value(well, STEP),
                });
            }
            _ => {}
        }
    }

    diagnostics
}

/// Numeric value of a populated field; a non-numeric value is reported
fn declared_number(
    table: &ParameterTable,
    mnemonic: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<f64> {
    let param = table.get_set(mnemonic)?;
    let number = param.value_as_f64();
    if number.is_none() {
        diagnostics.push(Diagnostic::InvalidNumber {
            mnemonic: mnemonic.to_string(),
            value: param.value.clone(),
        });
    }
    number
}

fn raw_value(table: &ParameterTable, mnemonic: &str) -> String {
    table.value(mnemonic).unwrap_or_default().to_string()
}
