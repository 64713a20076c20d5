//! Core data structures for parsed LAS content.
//!
//! Defines parameter records, the per-section parameter tables, section
//! tags and the counters collected during a read.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::header::ParameterLine;

/// One `MNEM.UNIT VALUE : DESCRIPTION` record
///
/// The value is kept as raw text; numeric interpretation is left to the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
    pub(crate) is_set: bool,
    pub(crate) is_required: bool,
    pub(crate) order: usize,
}

impl Parameter {
    /// Create an unset record for a pre-declared required mnemonic
    pub fn required(mnemonic: &str) -> Self {
        Self {
            mnemonic: mnemonic.to_string(),
            is_required: true,
            ..Default::default()
        }
    }

    /// Whether the record was populated from an input line
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// Position of first appearance within its section
    pub fn order(&self) -> usize {
        self.order
    }

    /// Numeric interpretation of the value, if it is a number
    pub fn value_as_f64(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }
}

/// Mnemonic-keyed table of parameters for one section
///
/// Lookup is case-sensitive. Insertion order is tracked through each
/// record's `order` field rather than by the map itself.
#[derive(Debug, Clone, Default)]
pub struct ParameterTable {
    entries: HashMap<String, Parameter>,
    required: Vec<String>,
}

impl ParameterTable {
    /// Create a table with no pre-declared entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-seeded with unset required entries
    pub fn with_required(mnemonics: &[&str]) -> Self {
        let mut table = Self::new();
        for mnemonic in mnemonics {
            table
                .entries
                .insert(mnemonic.to_string(), Parameter::required(mnemonic));
            table.required.push(mnemonic.to_string());
        }
        table
    }

    /// Write a tokenized line into the table
    ///
    /// The first write of a mnemonic stamps it with `next_order` and
    /// advances the counter; later writes update unit, value and
    /// description only.
    pub fn insert(&mut self, line: ParameterLine, next_order: &mut usize) -> &Parameter {
        let entry = self.entries.entry(line.mnemonic.clone()).or_default();

        if !entry.is_required {
            entry.mnemonic = line.mnemonic;
        }
        if !entry.is_set {
            entry.order = *next_order;
            *next_order += 1;
        }

        entry.unit = line.unit;
        entry.value = line.value;
        entry.description = line.description;
        entry.is_set = true;

        entry
    }

    /// Look up a record, set or not
    pub fn get(&self, mnemonic: &str) -> Option<&Parameter> {
        self.entries.get(mnemonic)
    }

    /// Look up a record that was populated from the file
    pub fn get_set(&self, mnemonic: &str) -> Option<&Parameter> {
        self.entries.get(mnemonic).filter(|p| p.is_set)
    }

    /// Raw value of a populated record
    pub fn value(&self, mnemonic: &str) -> Option<&str> {
        self.get_set(mnemonic).map(|p| p.value.as_str())
    }

    /// Required mnemonics with no populated record, in declaration order
    pub fn missing_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|m| self.get_set(m.as_str()).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Populated records sorted by first appearance
    pub fn ordered(&self) -> Vec<Parameter> {
        let mut params: Vec<Parameter> =
            self.entries.values().filter(|p| p.is_set).cloned().collect();
        params.sort_by_key(|p| p.order);
        params
    }

    /// Number of populated records
    pub fn len(&self) -> usize {
        self.entries.values().filter(|p| p.is_set).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LAS file sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Version,
    Well,
    Curve,
    Parameters,
    Other,
    Ascii,
}

impl Section {
    /// Whether lines of this section follow the parameter-line grammar
    pub fn holds_parameters(&self) -> bool {
        matches!(
            self,
            Section::Version | Section::Well | Section::Curve | Section::Parameters
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Version => "~Version",
            Section::Well => "~Well",
            Section::Curve => "~Curve",
            Section::Parameters => "~Parameter",
            Section::Other => "~Other",
            Section::Ascii => "~ASCII",
        };
        f.write_str(name)
    }
}

/// Counters collected over one read pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStats {
    /// Physical lines read from the input
    pub lines_read: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    /// Lines written into a parameter table
    pub parameter_lines: usize,
    pub other_lines: usize,
    /// Rows stored in the data table
    pub data_rows: usize,
    /// Parameter or data lines that could not be parsed
    pub lines_skipped: usize,
}
