//! ~ASCII section ingestion.
//!
//! Rows are whitespace-separated numbers: the index value followed by one
//! value per non-index curve. Short rows are kept with whatever values
//! were read; rows are stored in the order they appear.

use std::collections::HashMap;
use thiserror::Error;

/// One parsed data line
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    pub index: f64,
    pub values: Vec<f64>,
}

/// Reasons a data line cannot be stored
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("row has no fields")]
    Empty,

    #[error("index value '{0}' is not a finite number")]
    InvalidIndex(String),
}

/// Parse a data line, reading at most `value_count` values after the index
///
/// Reading stops at the first field that is not a number; the row keeps
/// the values read before it.
pub fn parse_data_row(line: &str, value_count: usize) -> Result<DataRow, RowError> {
    let mut fields = line.split_whitespace();
    let first = fields.next().ok_or(RowError::Empty)?;

    let index = first
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RowError::InvalidIndex(first.to_string()))?;

    let values = fields
        .take(value_count)
        .map_while(|field| field.parse::<f64>().ok())
        .collect();

    Ok(DataRow { index, values })
}

/// Index-keyed log values, in reading order
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    index: Vec<f64>,
    rows: Vec<Vec<f64>>,
    positions: HashMap<u64, usize>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a row, replacing the earlier row if the index repeats
    ///
    /// Returns `true` when an existing row was replaced.
    pub fn insert(&mut self, row: DataRow) -> bool {
        let key = index_key(row.index);
        if let Some(&position) = self.positions.get(&key) {
            self.rows[position] = row.values;
            return true;
        }

        self.positions.insert(key, self.index.len());
        self.index.push(row.index);
        self.rows.push(row.values);
        false
    }

    /// Index values in reading order
    pub fn index(&self) -> &[f64] {
        &self.index
    }

    /// Curve values, aligned with [`index`](Self::index)
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Values of the curve at `position` (0 = first curve after the index)
    ///
    /// Rows too short to hold the curve yield `None`.
    pub fn column(&self, position: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.get(position).copied())
            .collect()
    }

    pub fn first_index(&self) -> Option<f64> {
        self.index.first().copied()
    }

    pub fn last_index(&self) -> Option<f64> {
        self.index.last().copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// -0.0 and 0.0 are the same depth
fn index_key(index: f64) -> u64 {
    if index == 0.0 { 0.0f64.to_bits() } else { index.to_bits() }
}
