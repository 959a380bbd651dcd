//! CSV input layer
//!
//! Reads the two chart-of-accounts input tables. Columns are looked up by
//! header name, so column order is irrelevant and extra columns are ignored.
//! Any missing column or unparseable row aborts the run before any output
//! is produced.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use serde::Deserialize;

use crate::error::{UcoaError, UcoaResult};
use crate::models::{ParentCategory, SubAccount};

/// Role label used in error messages for the parent category table
pub const PARENTS_FILE: &str = "parents";
/// Role label used in error messages for the sub-account table
pub const SUBS_FILE: &str = "subs";

/// Raw parent row as it appears in the CSV
///
/// `Prefix` is read as text and parsed separately so a bad value surfaces
/// as a dedicated error instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
struct ParentRow {
    #[serde(rename = "Prefix")]
    prefix: String,
    #[serde(rename = "Category")]
    category: String,
}

/// Raw sub-account row as it appears in the CSV
#[derive(Debug, Deserialize)]
struct SubRow {
    #[serde(rename = "Prefix")]
    prefix: String,
    #[serde(rename = "Suffix")]
    suffix: String,
    #[serde(rename = "Name")]
    name: String,
}

/// Read the parent category table from a file
pub fn read_parents(path: &Path) -> UcoaResult<Vec<ParentCategory>> {
    let file = File::open(path)
        .map_err(|e| UcoaError::Io(format!("{}: {}", path.display(), e)))?;
    read_parents_from_reader(file)
}

/// Read the parent category table from any reader
pub fn read_parents_from_reader<R: Read>(reader: R) -> UcoaResult<Vec<ParentCategory>> {
    let mut rdr = Reader::from_reader(reader);
    check_columns(&mut rdr, PARENTS_FILE, &["Prefix", "Category"])?;

    let headers = rdr.headers()?.clone();
    let mut parents = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row_number = idx + 1;
        let record = result?;
        let row: ParentRow = record.deserialize(Some(&headers)).map_err(|e| {
            UcoaError::BadRow {
                file: PARENTS_FILE,
                row: row_number,
                message: e.to_string(),
            }
        })?;
        let prefix = parse_prefix(&row.prefix, PARENTS_FILE, row_number)?;
        parents.push(ParentCategory::new(prefix, row.category));
    }
    Ok(parents)
}

/// Read the sub-account table from a file
pub fn read_subs(path: &Path) -> UcoaResult<Vec<SubAccount>> {
    let file = File::open(path)
        .map_err(|e| UcoaError::Io(format!("{}: {}", path.display(), e)))?;
    read_subs_from_reader(file)
}

/// Read the sub-account table from any reader
///
/// `Suffix` stays a string end to end: "05" must come through as "05".
pub fn read_subs_from_reader<R: Read>(reader: R) -> UcoaResult<Vec<SubAccount>> {
    let mut rdr = Reader::from_reader(reader);
    check_columns(&mut rdr, SUBS_FILE, &["Prefix", "Suffix", "Name"])?;

    let headers = rdr.headers()?.clone();
    let mut subs = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row_number = idx + 1;
        let record = result?;
        let row: SubRow = record.deserialize(Some(&headers)).map_err(|e| {
            UcoaError::BadRow {
                file: SUBS_FILE,
                row: row_number,
                message: e.to_string(),
            }
        })?;
        let prefix = parse_prefix(&row.prefix, SUBS_FILE, row_number)?;
        subs.push(SubAccount::new(prefix, row.suffix, row.name));
    }
    Ok(subs)
}

/// Verify that every required column is present in the header row
fn check_columns<R: Read>(
    rdr: &mut Reader<R>,
    file: &'static str,
    required: &[&'static str],
) -> UcoaResult<()> {
    let headers = rdr.headers()?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(UcoaError::MissingColumn { file, column });
        }
    }
    Ok(())
}

/// Parse a prefix cell as an integer, refusing silent coercion
fn parse_prefix(value: &str, file: &'static str, row: usize) -> UcoaResult<i64> {
    value.trim().parse::<i64>().map_err(|_| UcoaError::InvalidPrefix {
        file,
        row,
        value: value.to_string(),
    })
}
