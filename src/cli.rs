//! Command-line interface components.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ReaderConfig;
use crate::constants::DEFAULT_INDEX_PRECISION;

#[derive(Parser, Debug)]
#[command(name = "las-reader")]
#[command(about = "Read a LAS well-log file and print its index values or a summary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the .las file
    #[arg(value_name = "LAS_FILE")]
    pub path: PathBuf,

    /// What to print
    #[arg(short, long, value_enum, default_value = "index")]
    pub show: Show,

    /// Output format for the summary view
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Tolerance for STRT/STOP/STEP checks
    #[arg(
        long,
        value_name = "EPS",
        default_value_t = DEFAULT_INDEX_PRECISION,
        value_parser = parse_precision
    )]
    pub precision: f64,

    /// Skip the post-read consistency checks
    #[arg(long)]
    pub no_validate: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Views the front end can print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Show {
    /// Index values, one per line
    Index,
    /// Index and log values, one row per line
    Data,
    /// Curve definitions
    Curves,
    /// Well information, curves and diagnostics
    Summary,
}

/// Output format for the summary view
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Args {
    /// Log level implied by -v / -q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Reader configuration from the command-line flags
    pub fn reader_config(&self) -> ReaderConfig {
        let config = ReaderConfig::default().with_index_precision(self.precision);
        if self.no_validate {
            config.without_validation()
        } else {
            config
        }
    }
}

/// Parse a comparison tolerance: a finite, non-negative number
fn parse_precision(value: &str) -> Result<f64, String> {
    let precision: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;

    if !precision.is_finite() {
        return Err(format!("precision must be finite, got {}", value));
    }
    if precision < 0.0 {
        return Err(format!("precision must not be negative, got {}", value));
    }
    Ok(precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["las-reader", "survey.las"]);

        assert_eq!(args.path, PathBuf::from("survey.las"));
        assert_eq!(args.show, Show::Index);
        assert_eq!(args.format, OutputFormat::Human);
        assert_eq!(args.get_log_level(), "warn");
        assert_eq!(args.reader_config(), ReaderConfig::default());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "las-reader",
            "well.LAS",
            "--show",
            "summary",
            "--format",
            "json",
            "--precision",
            "0.01",
            "--no-validate",
            "-vv",
        ]);

        assert_eq!(args.show, Show::Summary);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.get_log_level(), "debug");

        let config = args.reader_config();
        assert_eq!(config.index_precision, 0.01);
        assert!(!config.validate);
    }

    #[test]
    fn test_precision_must_be_finite_and_non_negative() {
        for bad in ["nan", "inf", "-0.01", "abc"] {
            let result = Args::try_parse_from(["las-reader", "a.las", "--precision", bad]);
            assert!(result.is_err(), "{bad}");
        }

        let args = Args::parse_from(["las-reader", "a.las", "--precision", "0"]);
        assert_eq!(args.precision, 0.0);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["las-reader", "a.las", "-q", "-v"]).is_err());

        let args = Args::parse_from(["las-reader", "a.las", "-q"]);
        assert_eq!(args.get_log_level(), "error");
    }
}
