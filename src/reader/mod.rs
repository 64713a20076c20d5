//! LAS file reader.
//!
//! Drives a single pass over the input lines: each line is classified,
//! then handed to the parameter tokenizer, the data ingestor or the
//! ~Other accumulator depending on the open section. The validator runs
//! once after the pass.
//!
//! ## Usage
//!
//! ```no_run
//! use las_reader::LasFile;
//!
//! # fn example() -> las_reader::Result<()> {
//! let las = LasFile::open("survey.las")?;
//!
//! for diagnostic in las.diagnostics() {
//!     eprintln!("warning: {diagnostic}");
//! }
//! println!("{} rows from {}", las.index().len(), las.well().value);
//! # Ok(())
//! # }
//! ```

pub mod accessors;

#[cfg(test)]
pub mod tests;

pub use accessors::LasSummary;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::ReaderConfig;
use crate::constants::{BYTE_ORDER_MARK, LAS_EXTENSION, version, well, wrap_mode};
use crate::data::{DataTable, parse_data_row};
use crate::error::{LasError, Result};
use crate::header::parse_parameter_line;
use crate::models::{ParameterTable, ReadStats, Section};
use crate::section::{LineKind, classify_line};
use crate::validation::{Diagnostic, validate};

/// A parsed LAS file
///
/// Accessors return empty values until a read has completed. A failed
/// read leaves the object in that same unread state.
#[derive(Debug, Clone)]
pub struct LasFile {
    config: ReaderConfig,
    have_read: bool,
    version: ParameterTable,
    well: ParameterTable,
    curve: ParameterTable,
    parameter: ParameterTable,
    other: String,
    data: DataTable,
    diagnostics: Vec<Diagnostic>,
    stats: ReadStats,
}

/// Mutable state of one read pass
#[derive(Debug, Default)]
struct ParseState {
    section: Option<Section>,
    line_number: usize,
    order_counters: HashMap<Section, usize>,
}

impl ParseState {
    fn next_order(&mut self, section: Section) -> &mut usize {
        self.order_counters.entry(section).or_default()
    }
}

impl Default for LasFile {
    fn default() -> Self {
        Self::new()
    }
}

impl LasFile {
    /// Create an unread file object with default configuration
    pub fn new() -> Self {
        Self::with_config(ReaderConfig::default())
    }

    /// Create an unread file object
    pub fn with_config(config: ReaderConfig) -> Self {
        Self {
            config,
            have_read: false,
            version: ParameterTable::with_required(version::REQUIRED),
            well: ParameterTable::with_required(well::REQUIRED),
            curve: ParameterTable::new(),
            parameter: ParameterTable::new(),
            other: String::new(),
            data: DataTable::new(),
            diagnostics: Vec::new(),
            stats: ReadStats::default(),
        }
    }

    /// Create a file object and read `path` into it
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut las = Self::new();
        las.read(path)?;
        Ok(las)
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read a `.las` file, replacing anything read before
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.reset();

        if !has_las_extension(path) {
            return Err(LasError::WrongExtension {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| LasError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Reading LAS file: {}", path.display());
        self.read_lines(BufReader::new(file))
    }

    /// Read LAS content from any buffered source, replacing anything read before
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.reset();
        self.read_lines(reader)
    }

    fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
    }

    fn read_lines<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let mut state = ParseState::default();

        for line in reader.lines() {
            let line = line?;
            state.line_number += 1;
            self.stats.lines_read += 1;

            let text = if state.line_number == 1 {
                line.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                line.as_str()
            };
            self.process_line(text.trim(), &mut state)?;
        }

        if self.config.validate {
            let findings = validate(
                &self.version,
                &self.well,
                &self.data,
                self.config.index_precision,
            );
            for diagnostic in findings {
                self.record(diagnostic);
            }
        }

        self.have_read = true;
        info!(
            "Read {} lines: {} curves, {} data rows, {} diagnostics",
            self.stats.lines_read,
            self.curve.len(),
            self.data.len(),
            self.diagnostics.len()
        );
        Ok(())
    }

    fn process_line(&mut self, line: &str, state: &mut ParseState) -> Result<()> {
        match classify_line(line, state.section) {
            LineKind::Blank => self.stats.blank_lines += 1,
            LineKind::Comment => self.stats.comment_lines += 1,
            LineKind::Header(section) => self.enter_section(section, state)?,
            LineKind::Content => match state.section {
                None => {
                    return Err(LasError::UndefinedSection {
                        line_number: state.line_number,
                    });
                }
                Some(Section::Other) => self.parse_other(line),
                Some(Section::Ascii) => self.parse_data(line, state.line_number),
                Some(section) => self.parse_parameter(line, section, state)?,
            },
        }
        Ok(())
    }

    fn enter_section(&mut self, section: Section, state: &mut ParseState) -> Result<()> {
        debug!("Entering {} section at line {}", section, state.line_number);

        // Data rows are only readable once the file is known to be unwrapped
        if section == Section::Ascii {
            self.check_wrap_mode()?;
        }

        state.section = Some(section);
        Ok(())
    }

    fn parse_parameter(
        &mut self,
        line: &str,
        section: Section,
        state: &mut ParseState,
    ) -> Result<()> {
        let parsed = match parse_parameter_line(line) {
            Ok(parsed) => parsed,
            Err(reason) => {
                self.stats.lines_skipped += 1;
                self.record(Diagnostic::MalformedParameterLine {
                    line_number: state.line_number,
                    section,
                    reason: reason.to_string(),
                });
                return Ok(());
            }
        };

        let is_wrap = section == Section::Version && parsed.mnemonic == version::WRAP;

        let Some(table) = self.table_mut(section) else {
            return Ok(());
        };
        table.insert(parsed, state.next_order(section));
        self.stats.parameter_lines += 1;

        if is_wrap {
            self.check_wrap_mode()?;
        }
        Ok(())
    }

    fn parse_other(&mut self, line: &str) {
        self.other.push_str(line);
        self.stats.other_lines += 1;
    }

    fn parse_data(&mut self, line: &str, line_number: usize) {
        let expected = self.curve.len().saturating_sub(1);

        let row = match parse_data_row(line, expected) {
            Ok(row) => row,
            Err(reason) => {
                self.stats.lines_skipped += 1;
                self.record(Diagnostic::UnparseableDataRow {
                    line_number,
                    reason: reason.to_string(),
                });
                return;
            }
        };

        if row.values.len() < expected {
            debug!(
                "Line {}: {} of {} values read",
                line_number,
                row.values.len(),
                expected
            );
        }

        let index = row.index;
        if self.data.insert(row) {
            if self.config.detect_duplicates {
                self.record(Diagnostic::DuplicateIndex { index, line_number });
            }
        } else {
            self.stats.data_rows += 1;
        }
    }

    fn check_wrap_mode(&self) -> Result<()> {
        match self.version.value(version::WRAP).unwrap_or_default() {
            wrap_mode::NO => Ok(()),
            wrap_mode::YES => Err(LasError::WrappedUnsupported),
            other => Err(LasError::InvalidWrapMode {
                value: other.to_string(),
            }),
        }
    }

    fn table_mut(&mut self, section: Section) -> Option<&mut ParameterTable> {
        match section {
            Section::Version => Some(&mut self.version),
            Section::Well => Some(&mut self.well),
            Section::Curve => Some(&mut self.curve),
            Section::Parameters => Some(&mut self.parameter),
            Section::Other | Section::Ascii => None,
        }
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Whether `path` ends in `.las`, ignoring case
pub fn has_las_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LAS_EXTENSION))
}
