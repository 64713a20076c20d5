//! Reader configuration.
//!
//! Controls the tolerance used by index checks and which post-read
//! checks run.

use crate::constants::DEFAULT_INDEX_PRECISION;
use serde::{Deserialize, Serialize};

/// Configuration for a [`LasFile`](crate::reader::LasFile) read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Absolute tolerance for STRT/STOP/STEP comparisons
    pub index_precision: f64,

    /// Run the validator once the line pass completes
    pub validate: bool,

    /// Report index values that appear more than once
    pub detect_duplicates: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            index_precision: DEFAULT_INDEX_PRECISION,
            validate: true,
            detect_duplicates: true,
        }
    }
}

impl ReaderConfig {
    /// Use a custom tolerance for index comparisons
    pub fn with_index_precision(mut self, precision: f64) -> Self {
        self.index_precision = precision.abs();
        self
    }

    /// Skip the post-read validator
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Accept repeated index values silently
    pub fn without_duplicate_detection(mut self) -> Self {
        self.detect_duplicates = false;
        self
    }
}
