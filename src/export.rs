//! CSV export functionality
//!
//! Writes the built ledger as a GnuCash account import CSV: twelve fixed
//! columns, header row included, boolean flags rendered as the single
//! characters `T`/`F`.

use std::io::Write;

use crate::error::{UcoaError, UcoaResult};
use crate::models::AccountRecord;

/// The exact output header expected by the import tooling
pub const OUTPUT_HEADER: &str = "Type,Full Account Name,Name,Code,Description,\
Account Color,Notes,Symbol,Namespace,Hidden,Tax Info,Placeholder";

/// Write the ledger to any writer in import-CSV form
pub fn write_ledger_csv<W: Write>(records: &[AccountRecord], writer: &mut W) -> UcoaResult<()> {
    writeln!(writer, "{}", OUTPUT_HEADER)
        .map_err(|e| UcoaError::Export(e.to_string()))?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            record.account_type.tag(),
            escape_csv(&record.full_name),
            escape_csv(&record.name),
            escape_csv(&record.code),
            escape_csv(&record.description),
            escape_csv(&record.account_color),
            escape_csv(&record.notes),
            escape_csv(&record.symbol),
            escape_csv(&record.namespace),
            flag(record.hidden),
            flag(record.tax_info),
            flag(record.placeholder)
        )
        .map_err(|e| UcoaError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Render a boolean the way accounting import tools expect it
fn flag(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountRecord, AccountType};

    #[test]
    fn test_header_row() {
        let mut output = Vec::new();
        write_ledger_csv(&[], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        assert_eq!(
            csv,
            "Type,Full Account Name,Name,Code,Description,Account Color,\
             Notes,Symbol,Namespace,Hidden,Tax Info,Placeholder\n"
        );
    }

    #[test]
    fn test_root_row_serialization() {
        let mut output = Vec::new();
        write_ledger_csv(&[AccountRecord::root(AccountType::Asset)], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "ASSET,Assets,Assets,,,,,USD,CURRENCY,F,F,T");
    }

    #[test]
    fn test_flags_rendered_as_single_characters() {
        let mut record = AccountRecord::root(AccountType::Income);
        record.placeholder = false;
        record.hidden = true;

        let mut output = Vec::new();
        write_ledger_csv(&[record], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with("T,F,F"));
    }

    #[test]
    fn test_escaping() {
        let mut record = AccountRecord::parent(10, "Cash, Near-Cash");
        record.notes = "say \"hi\"".to_string();

        let mut output = Vec::new();
        write_ledger_csv(&[record], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Assets:Cash, Near-Cash\""));
        assert!(row.contains("\"Cash, Near-Cash\""));
        assert!(row.contains("\"say \"\"hi\"\"\""));
    }
}
