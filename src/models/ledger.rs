//! Output ledger model
//!
//! [`AccountRecord`] is one row of the GnuCash account import table. Records
//! come in three tiers: root type placeholders, parent category placeholders,
//! and leaf sub-accounts. All three share a block of constant fields held in
//! [`RecordDefaults`] so the defaults live in exactly one place.

use super::account_type::AccountType;
use super::chart::JoinedSubAccount;

/// Constant fields shared by every generated record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDefaults {
    pub description: &'static str,
    pub account_color: &'static str,
    pub notes: &'static str,
    pub symbol: &'static str,
    pub namespace: &'static str,
    pub hidden: bool,
    pub tax_info: bool,
}

/// The one set of defaults used for all records
pub const DEFAULTS: RecordDefaults = RecordDefaults {
    description: "",
    account_color: "",
    notes: "",
    symbol: "USD",
    namespace: "CURRENCY",
    hidden: false,
    tax_info: false,
};

/// One row of the output account table
///
/// `full_name` is the colon-delimited hierarchy path
/// (`Type[:Category][:Name]`); it is globally unique in well-formed input
/// and is the sort key for the final table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub account_type: AccountType,
    pub full_name: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub account_color: String,
    pub notes: String,
    pub symbol: String,
    pub namespace: String,
    pub hidden: bool,
    pub tax_info: bool,
    pub placeholder: bool,
}

impl AccountRecord {
    /// Shared constructor: fills the constant fields from [`DEFAULTS`]
    fn with_defaults(
        account_type: AccountType,
        full_name: String,
        name: String,
        code: String,
        placeholder: bool,
    ) -> Self {
        Self {
            account_type,
            full_name,
            name,
            code,
            description: DEFAULTS.description.to_string(),
            account_color: DEFAULTS.account_color.to_string(),
            notes: DEFAULTS.notes.to_string(),
            symbol: DEFAULTS.symbol.to_string(),
            namespace: DEFAULTS.namespace.to_string(),
            hidden: DEFAULTS.hidden,
            tax_info: DEFAULTS.tax_info,
            placeholder,
        }
    }

    /// Root type placeholder (e.g. "Assets"). Never postable, no code.
    pub fn root(account_type: AccountType) -> Self {
        let label = account_type.label().to_string();
        Self::with_defaults(account_type, label.clone(), label, String::new(), true)
    }

    /// Parent category placeholder under a root type.
    ///
    /// The code is the prefix rendered as text with a literal "00" suffix.
    pub fn parent(prefix: i64, category: &str) -> Self {
        let account_type = AccountType::from_prefix(prefix);
        Self::with_defaults(
            account_type,
            format!("{}:{}", account_type.label(), category),
            category.to_string(),
            format!("{}00", prefix),
            true,
        )
    }

    /// Leaf sub-account from a joined row.
    ///
    /// Uncategorized leaves attach directly under the root type. The code is
    /// the textual concatenation of prefix and suffix; leading zeros in the
    /// suffix survive. A leaf is a placeholder only when it is categorized
    /// AND its type is neither Expense nor Income.
    pub fn leaf(joined: &JoinedSubAccount) -> Self {
        let account_type = AccountType::from_prefix(joined.prefix);
        let uncategorized = joined.is_uncategorized();

        let full_name = if uncategorized {
            format!("{}:{}", account_type.label(), joined.name)
        } else {
            // is_uncategorized() returned false, so category is Some
            let category = joined.category.as_deref().unwrap_or_default();
            format!("{}:{}:{}", account_type.label(), category, joined.name)
        };

        let postable_type = matches!(account_type, AccountType::Expense | AccountType::Income);
        let placeholder = !postable_type && !uncategorized;

        Self::with_defaults(
            account_type,
            full_name,
            joined.name.clone(),
            format!("{}{}", joined.prefix, joined.suffix),
            placeholder,
        )
    }
}
