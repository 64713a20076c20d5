//! Post-read validation through the full reader

use super::*;
use crate::config::ReaderConfig;
use crate::validation::Diagnostic;

fn missing_fields(las: &LasFile) -> Vec<String> {
    las.diagnostics()
        .iter()
        .filter_map(|d| match d {
            Diagnostic::MissingRequired { mnemonic } => Some(mnemonic.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_consistent_file_has_no_diagnostics() {
    let (las, result) = read_str(&ascending_las("1.0"));

    assert!(result.is_ok());
    assert!(las.diagnostics().is_empty(), "{:?}", las.diagnostics());
}

#[test]
fn test_step_mismatch_keeps_data() {
    let (las, result) = read_str(&ascending_las("2.0"));

    assert!(result.is_ok());
    assert_eq!(
        las.diagnostics(),
        &[Diagnostic::StepMismatch {
            actual: 1.0,
            declared: "2.0".to_string(),
        }]
    );
    assert_eq!(las.index(), vec![100.0, 101.0, 102.0]);
}

#[test]
fn test_irregular_index_with_zero_step() {
    let content = minimal_las(
        "NO",
        &well_block("100.0", "103.0", "0"),
        "100.0 10\n101.0 20\n103.0 30\n",
    );

    let (las, _) = read_str(&content);

    assert!(las.diagnostics().is_empty(), "{:?}", las.diagnostics());
}

#[test]
fn test_irregular_index_with_nonzero_step() {
    let content = minimal_las(
        "NO",
        &well_block("100.0", "103.0", "1.0"),
        "100.0 10\n101.0 20\n103.0 30\n",
    );

    let (las, _) = read_str(&content);

    assert_eq!(
        las.diagnostics(),
        &[Diagnostic::NonZeroStepForInconsistentIndex {
            declared: "1.0".to_string(),
        }]
    );
}

#[test]
fn test_each_missing_well_field_reported_once() {
    for absent in ["STRT", "STOP", "STEP", "NULL"] {
        let block: String = well_block("100.0", "102.0", "1.0")
            .lines()
            .filter(|line| !line.starts_with(absent))
            .map(|line| format!("{line}\n"))
            .collect();
        let content = minimal_las("NO", &block, "100.0 10\n101.0 20\n102.0 30\n");

        let (las, result) = read_str(&content);

        assert!(result.is_ok(), "{absent}");
        assert!(las.is_read());
        assert_eq!(missing_fields(&las), vec![absent.to_string()]);
        assert_eq!(las.diagnostics().len(), 1, "{:?}", las.diagnostics());
    }
}

#[test]
fn test_missing_vers_and_whole_well_block() {
    let content = "~V\nWRAP. NO : WRAP\n~C\nDEPT.M : DEPTH\n~A\n1.0\n2.0\n";

    let (las, result) = read_str(content);

    assert!(result.is_ok());
    assert_eq!(missing_fields(&las), vec!["VERS", "STRT", "STOP", "STEP", "NULL"]);
    assert_eq!(las.index(), vec![1.0, 2.0]);
}

#[test]
fn test_start_stop_mismatch() {
    let content = minimal_las(
        "NO",
        &well_block("90.0", "110.0", "1.0"),
        "100.0 10\n101.0 20\n102.0 30\n",
    );

    let (las, _) = read_str(&content);

    assert_eq!(
        las.diagnostics(),
        &[
            Diagnostic::StartMismatch {
                first_index: 100.0,
                declared: "90.0".to_string(),
            },
            Diagnostic::StopMismatch {
                last_index: 102.0,
                declared: "110.0".to_string(),
            },
        ]
    );
}

#[test]
fn test_descending_index() {
    let content = minimal_las(
        "NO",
        &well_block("102.0", "100.0", "-1.0"),
        "102.0 30\n101.0 20\n100.0 10\n",
    );

    let (las, _) = read_str(&content);

    assert!(las.diagnostics().is_empty(), "{:?}", las.diagnostics());
    assert_eq!(las.index(), vec![102.0, 101.0, 100.0]);
}

#[test]
fn test_single_row_skips_step_checks() {
    let content = minimal_las("NO", &well_block("100.0", "100.0", "7.5"), "100.0 10\n");

    let (las, result) = read_str(&content);

    assert!(result.is_ok());
    assert!(las.diagnostics().is_empty(), "{:?}", las.diagnostics());
}

#[test]
fn test_no_data_rows() {
    let content = minimal_las("NO", &well_block("100.0", "102.0", "1.0"), "");

    let (las, result) = read_str(&content);

    assert!(result.is_ok());
    assert!(las.diagnostics().is_empty());
    assert!(las.index().is_empty());
}

#[test]
fn test_custom_precision() {
    let content = minimal_las(
        "NO",
        &well_block("100.0", "102.0", "1.0"),
        "100.05 10\n101.05 20\n102.05 30\n",
    );

    let (strict, _) = read_str(&content);
    assert_eq!(strict.diagnostics().len(), 2);

    let mut lenient = LasFile::with_config(ReaderConfig::default().with_index_precision(0.1));
    lenient.read_from(std::io::Cursor::new(content)).unwrap();
    assert!(lenient.diagnostics().is_empty(), "{:?}", lenient.diagnostics());
}

#[test]
fn test_validation_can_be_disabled() {
    let mut las = LasFile::with_config(ReaderConfig::default().without_validation());
    las.read_from(std::io::Cursor::new(ascending_las("2.0")))
        .unwrap();

    assert!(las.diagnostics().is_empty());
    assert_eq!(las.index().len(), 3);
}
