//! Tests for the reader module
//!
//! Covers the full read pass over in-memory and on-disk LAS content.

use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

use super::LasFile;
use crate::error::Result;

pub mod validation_tests;

/// A complete unwrapped LAS 2.0 file with every section
pub const SURVEY_LAS: &str = r#"~VERSION INFORMATION
 VERS.                 2.0 :   CWLS LOG ASCII STANDARD -VERSION 2.0
 WRAP.                  NO :   ONE LINE PER DEPTH STEP
 CREA.          2020-02-27 :   CREATION DATE
~WELL INFORMATION BLOCK
#MNEM.UNIT       DATA TYPE    INFORMATION
#---------    -------------   ------------------------------
 STRT.M        1670.0000 :    START DEPTH
 STOP.M        1669.7500 :    STOP DEPTH
 STEP.M         -0.1250 :    STEP
 NULL.          -999.25 :    NULL VALUE
 COMP.  ANY OIL COMPANY INC. :    COMPANY
 WELL.  AAAAA_2            :    WELL
 FLD .  WILDCAT            :    FIELD
 LOC .  12-34-12-34W5M     :    LOCATION
 PROV.  ALBERTA            :    PROVINCE
 SRVC.  ANY LOGGING COMPANY INC. :    SERVICE COMPANY
 DATE.  13-DEC-86          :    LOG DATE
 UWI .  100123401234W500   :    UNIQUE WELL ID
~CURVE INFORMATION
#MNEM.UNIT      API CODE     CURVE DESCRIPTION
 DEPT.M                      :  1  DEPTH
 DT  .US/M      60 520 32 00 :  2  SONIC TRANSIT TIME
 RHOB.K/M3      45 350 01 00 :  3  BULK DENSITY
 NPHI.V/V       42 890 00 00 :  4  NEUTRON POROSITY
~PARAMETER INFORMATION
 MUD .         GEL CHEM    :   MUD TYPE
 BHT .DEGC     35.5000     :   BOTTOM HOLE TEMPERATURE
 BS  .MM       200.0000    :   BIT SIZE
 FD  .K/M3     1000.0000   :   FLUID DENSITY
~OTHER
     Note: The logging tools became stuck at 625 metres causing the data
     between 625 metres and 615 metres to be invalid.
~A  DEPTH     DT    RHOB     NPHI
1670.000   123.450 2550.000    0.450
1669.875   123.450 2550.000    0.450
1669.750   123.450 2550.000    0.450
"#;

/// Minimal file with one data curve; `well` and `rows` fill the blanks
pub fn minimal_las(wrap: &str, well: &str, rows: &str) -> String {
    format!(
        "~V\n\
         VERS. 2.0 : VERSION\n\
         WRAP. {wrap} : WRAP MODE\n\
         ~W\n\
         {well}\
         ~C\n\
         DEPT.M : DEPTH\n\
         GR  .GAPI : GAMMA RAY\n\
         ~A\n\
         {rows}"
    )
}

/// Well block declaring STRT/STOP/STEP with NULL = -999.25
pub fn well_block(strt: &str, stop: &str, step: &str) -> String {
    format!(
        "STRT.M {strt} : START\n\
         STOP.M {stop} : STOP\n\
         STEP.M {step} : STEP\n\
         NULL. -999.25 : NULL\n"
    )
}

/// Ascending file: rows 100, 101, 102 with GR 10, 20, 30
pub fn ascending_las(step: &str) -> String {
    minimal_las(
        "NO",
        &well_block("100.0", "102.0", step),
        "100.0 10\n101.0 20\n102.0 30\n",
    )
}

/// Read LAS content from memory into a fresh file object
pub fn read_str(content: &str) -> (LasFile, Result<()>) {
    let mut las = LasFile::new();
    let result = las.read_from(Cursor::new(content));
    (las, result)
}

/// Write content to a temporary file ending in `.las`
pub fn create_las_file(content: &str) -> NamedTempFile {
    create_temp_file(content, ".las")
}

/// Write content to a temporary file with the given suffix
pub fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
