//! Section recognition for the line pass.
//!
//! Every trimmed line is either skipped (blank or comment), opens a new
//! section, or belongs to the section that is currently open.

use crate::constants::{COMMENT_PREFIX, markers};
use crate::models::Section;

/// What a single line means to the read loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    /// Header line opening the given section
    Header(Section),
    /// Content of the current section
    Content,
}

/// Classify a trimmed line given the section currently open
///
/// Header markers are matched case-sensitively. Once `~A` is open it is
/// never left: any further non-comment line is data.
pub fn classify_line(line: &str, current: Option<Section>) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return LineKind::Comment;
    }
    if current == Some(Section::Ascii) {
        return LineKind::Content;
    }

    match header_section(line) {
        Some(section) => LineKind::Header(section),
        None => LineKind::Content,
    }
}

fn header_section(line: &str) -> Option<Section> {
    let section = if line.starts_with(markers::VERSION) {
        Section::Version
    } else if line.starts_with(markers::WELL) {
        Section::Well
    } else if line.starts_with(markers::CURVE) {
        Section::Curve
    } else if line.starts_with(markers::PARAMETERS) {
        Section::Parameters
    } else if line.starts_with(markers::OTHER) {
        Section::Other
    } else if line.starts_with(markers::ASCII) {
        Section::Ascii
    } else {
        return None;
    };
    Some(section)
}
