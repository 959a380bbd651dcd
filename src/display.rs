//! Ledger display formatting
//!
//! Formats built ledger records for terminal output, for previewing an
//! export without writing a file.

use crate::models::AccountRecord;

/// Format ledger records as a table
pub fn format_ledger_preview(records: &[AccountRecord]) -> String {
    if records.is_empty() {
        return "No accounts generated.".to_string();
    }

    // Calculate column widths
    let name_width = records
        .iter()
        .map(|r| r.full_name.len())
        .max()
        .unwrap_or(17)
        .max(17);

    let type_width = records
        .iter()
        .map(|r| r.account_type.tag().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let code_width = records
        .iter()
        .map(|r| r.code.len())
        .max()
        .unwrap_or(4)
        .max(4);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {:>code_width$}  {}\n",
        "Full Account Name",
        "Type",
        "Code",
        "Placeholder",
        name_width = name_width,
        type_width = type_width,
        code_width = code_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:-<type_width$}  {:->code_width$}  {:-<11}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
        code_width = code_width,
    ));

    // Account rows
    for record in records {
        output.push_str(&format!(
            "{:<name_width$}  {:<type_width$}  {:>code_width$}  {}\n",
            record.full_name,
            record.account_type.tag(),
            record.code,
            if record.placeholder { "T" } else { "F" },
            name_width = name_width,
            type_width = type_width,
            code_width = code_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountRecord, AccountType};

    #[test]
    fn test_empty_preview() {
        assert_eq!(format_ledger_preview(&[]), "No accounts generated.");
    }

    #[test]
    fn test_preview_contains_rows_and_header() {
        let records = vec![
            AccountRecord::root(AccountType::Asset),
            AccountRecord::parent(72, "Travel"),
        ];
        let preview = format_ledger_preview(&records);
        assert!(preview.contains("Full Account Name"));
        assert!(preview.contains("Assets"));
        assert!(preview.contains("Expenses:Travel"));
        assert!(preview.contains("7200"));
    }
}
