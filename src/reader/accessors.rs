//! Read-only views over a parsed LAS file.
//!
//! Every accessor returns an owned copy and falls back to an empty value
//! when the file has not been read, or when the requested mnemonic never
//! appeared in the file.

use serde::Serialize;

use super::LasFile;
use crate::constants::{version, well};
use crate::models::{Parameter, ParameterTable, ReadStats};
use crate::validation::{Diagnostic, IndexSpacing, index_spacing};

/// Overview of a parsed file for reporting
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LasSummary {
    pub version: String,
    pub wrap: String,
    pub well: String,
    pub company: String,
    pub null_value: String,
    /// Curve mnemonics in file order, index curve first
    pub curves: Vec<String>,
    pub parameters: usize,
    pub rows: usize,
    pub first_index: Option<f64>,
    pub last_index: Option<f64>,
    /// Index step when the spacing is uniform
    pub step: Option<f64>,
    pub diagnostics: usize,
}

impl LasFile {
    /// Whether the last read completed
    pub fn is_read(&self) -> bool {
        self.have_read
    }

    /// Value of VERS
    pub fn version(&self) -> String {
        self.version_field(version::VERS).value
    }

    /// CREA, the file creation record
    pub fn created(&self) -> Parameter {
        self.version_field(version::CREA)
    }

    /// Value of WRAP
    pub fn wrap(&self) -> String {
        self.version_field(version::WRAP).value
    }

    pub fn start(&self) -> Parameter {
        self.well_field(well::STRT)
    }

    pub fn stop(&self) -> Parameter {
        self.well_field(well::STOP)
    }

    pub fn step(&self) -> Parameter {
        self.well_field(well::STEP)
    }

    pub fn null(&self) -> Parameter {
        self.well_field(well::NULL)
    }

    pub fn company(&self) -> Parameter {
        self.well_field(well::COMP)
    }

    pub fn well(&self) -> Parameter {
        self.well_field(well::WELL)
    }

    pub fn field(&self) -> Parameter {
        self.well_field(well::FLD)
    }

    pub fn location(&self) -> Parameter {
        self.well_field(well::LOC)
    }

    pub fn province(&self) -> Parameter {
        self.well_field(well::PROV)
    }

    pub fn county(&self) -> Parameter {
        self.well_field(well::CNTY)
    }

    pub fn state(&self) -> Parameter {
        self.well_field(well::STAT)
    }

    pub fn country(&self) -> Parameter {
        self.well_field(well::CTRY)
    }

    pub fn service(&self) -> Parameter {
        self.well_field(well::SRVC)
    }

    pub fn date(&self) -> Parameter {
        self.well_field(well::DATE)
    }

    /// Unique well identifier
    pub fn uwi(&self) -> Parameter {
        self.well_field(well::UWI)
    }

    pub fn api(&self) -> Parameter {
        self.well_field(well::API)
    }

    pub fn licence(&self) -> Parameter {
        self.well_field(well::LIC)
    }

    /// Concatenated ~Other lines
    pub fn other(&self) -> String {
        if self.have_read {
            self.other.clone()
        } else {
            String::new()
        }
    }

    /// ~Parameter records in order of first appearance
    pub fn parameters(&self) -> Vec<Parameter> {
        if self.have_read {
            self.parameter.ordered()
        } else {
            Vec::new()
        }
    }

    /// ~Curve records in order of first appearance, index curve first
    pub fn curves(&self) -> Vec<Parameter> {
        if self.have_read {
            self.curve.ordered()
        } else {
            Vec::new()
        }
    }

    /// Index values in reading order
    pub fn index(&self) -> Vec<f64> {
        if self.have_read {
            self.data.index().to_vec()
        } else {
            Vec::new()
        }
    }

    /// Log values, one row per index value
    pub fn data(&self) -> Vec<Vec<f64>> {
        if self.have_read {
            self.data.rows().to_vec()
        } else {
            Vec::new()
        }
    }

    /// Values of one curve aligned with [`index`](Self::index)
    ///
    /// The index curve maps to the index values themselves. Rows too short
    /// to hold the curve yield `None`; an unknown mnemonic yields `None`.
    pub fn curve_values(&self, mnemonic: &str) -> Option<Vec<Option<f64>>> {
        if !self.have_read {
            return None;
        }

        let position = self
            .curve
            .ordered()
            .iter()
            .position(|curve| curve.mnemonic == mnemonic)?;

        if position == 0 {
            Some(self.data.index().iter().copied().map(Some).collect())
        } else {
            Some(self.data.column(position - 1))
        }
    }

    /// Diagnostics collected by the last completed read
    pub fn diagnostics(&self) -> &[Diagnostic] {
        if self.have_read {
            &self.diagnostics
        } else {
            &[]
        }
    }

    pub fn stats(&self) -> ReadStats {
        if self.have_read {
            self.stats.clone()
        } else {
            ReadStats::default()
        }
    }

    /// Collect the headline facts of the file
    pub fn summary(&self) -> LasSummary {
        if !self.have_read {
            return LasSummary::default();
        }

        let step = match index_spacing(self.data.index(), self.config.index_precision) {
            IndexSpacing::Uniform(step) => Some(step),
            IndexSpacing::TooShort | IndexSpacing::Irregular => None,
        };

        LasSummary {
            version: self.version(),
            wrap: self.wrap(),
            well: self.well().value,
            company: self.company().value,
            null_value: self.null().value,
            curves: self.curves().into_iter().map(|c| c.mnemonic).collect(),
            parameters: self.parameter.len(),
            rows: self.data.len(),
            first_index: self.data.first_index(),
            last_index: self.data.last_index(),
            step,
            diagnostics: self.diagnostics.len(),
        }
    }

    fn version_field(&self, mnemonic: &str) -> Parameter {
        self.populated(&self.version, mnemonic)
    }

    fn well_field(&self, mnemonic: &str) -> Parameter {
        self.populated(&self.well, mnemonic)
    }

    fn populated(&self, table: &ParameterTable, mnemonic: &str) -> Parameter {
        if !self.have_read {
            return Parameter::default();
        }
        table.get_set(mnemonic).cloned().unwrap_or_default()
    }
}
