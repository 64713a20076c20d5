//! Format constants for LAS files
//!
//! Section markers, pre-declared mnemonics and default tolerances used
//! throughout the reader.

// =============================================================================
// File Format
// =============================================================================

/// Expected file extension, compared case-insensitively
pub const LAS_EXTENSION: &str = "las";

/// Prefix of comment lines, valid in every section
pub const COMMENT_PREFIX: char = '#';

/// Byte-order mark some editors write at the start of UTF-8 files
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Section header markers (first two characters of the header line)
pub mod markers {
    pub const VERSION: &str = "~V";
    pub const WELL: &str = "~W";
    pub const CURVE: &str = "~C";
    pub const PARAMETERS: &str = "~P";
    pub const OTHER: &str = "~O";
    pub const ASCII: &str = "~A";
}

// =============================================================================
// Mnemonics
// =============================================================================

/// Version section mnemonics
pub mod version {
    pub const VERS: &str = "VERS";
    pub const WRAP: &str = "WRAP";
    pub const CREA: &str = "CREA";

    /// Mnemonics every file must declare in ~V
    pub const REQUIRED: &[&str] = &[VERS, WRAP];
}

/// Well section mnemonics
pub mod well {
    pub const STRT: &str = "STRT";
    pub const STOP: &str = "STOP";
    pub const STEP: &str = "STEP";
    pub const NULL: &str = "NULL";
    pub const COMP: &str = "COMP";
    pub const WELL: &str = "WELL";
    pub const FLD: &str = "FLD";
    pub const LOC: &str = "LOC";
    pub const PROV: &str = "PROV";
    pub const CNTY: &str = "CNTY";
    pub const STAT: &str = "STAT";
    pub const CTRY: &str = "CTRY";
    pub const SRVC: &str = "SRVC";
    pub const DATE: &str = "DATE";
    pub const UWI: &str = "UWI";
    pub const API: &str = "API";
    pub const LIC: &str = "LIC";

    /// Mnemonics every file must declare in ~W
    pub const REQUIRED: &[&str] = &[STRT, STOP, STEP, NULL];
}

/// Accepted values of the WRAP parameter
pub mod wrap_mode {
    pub const NO: &str = "NO";
    pub const YES: &str = "YES";
}

// =============================================================================
// Validation
// =============================================================================

/// Absolute tolerance used when comparing index values
pub const DEFAULT_INDEX_PRECISION: f64 = 0.001;
