//! Parameter-line parsing for the LAS header sections.
//!
//! Lines in ~V, ~W, ~C and ~P follow the grammar
//! `MNEMONIC '.' UNIT WHITESPACE VALUE ':' DESCRIPTION`. The unit ends at
//! the first whitespace after the first `.`, and the description starts
//! after the *last* `:` on the line, so a value may only contain colons
//! when a trailing description delimiter follows it.

use thiserror::Error;

/// Fields of one tokenized parameter line, already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterLine {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
}

/// Reasons a header line cannot be tokenized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedLine {
    #[error("no '.' separating mnemonic and unit")]
    MissingDot,

    #[error("no ':' before the description")]
    MissingColon,

    #[error("last ':' comes before the first '.'")]
    ColonBeforeDot,

    #[error("empty mnemonic")]
    EmptyMnemonic,
}

/// Remove a single leading `:` and surrounding whitespace
pub fn prepare(text: &str) -> &str {
    text.strip_prefix(':').unwrap_or(text).trim()
}

/// Split a header line into mnemonic, unit, value and description
pub fn parse_parameter_line(line: &str) -> Result<ParameterLine, MalformedLine> {
    let dot = line.find('.').ok_or(MalformedLine::MissingDot)?;
    let colon = line.rfind(':').ok_or(MalformedLine::MissingColon)?;
    if colon < dot {
        return Err(MalformedLine::ColonBeforeDot);
    }

    // Unit runs up to the first whitespace after the dot, never past the colon
    let unit_end = line[dot + 1..colon]
        .find(char::is_whitespace)
        .map(|offset| dot + 1 + offset)
        .unwrap_or(colon);

    let mnemonic = prepare(&line[..dot]);
    if mnemonic.is_empty() {
        return Err(MalformedLine::EmptyMnemonic);
    }

    Ok(ParameterLine {
        mnemonic: mnemonic.to_string(),
        unit: prepare(&line[dot + 1..unit_end]).to_string(),
        value: prepare(&line[unit_end..colon]).to_string(),
        description: prepare(&line[colon + 1..]).to_string(),
    })
}
