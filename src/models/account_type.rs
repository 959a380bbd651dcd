//! Account type model
//!
//! The five top-level GnuCash account types, derived from an account's
//! numeric prefix by a fixed threshold rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level account type
///
/// Declaration order is load-bearing: [`AccountType::ALL`] iterates in this
/// order so repeated runs produce byte-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Assets (prefix below 20, including zero and negatives)
    Asset,
    /// Liabilities (prefix 20..=29)
    Liability,
    /// Equity (prefix 30..=39)
    Equity,
    /// Income (prefix 40..=69)
    Income,
    /// Expenses (prefix 70 and above)
    Expense,
}

impl AccountType {
    /// All five types, in declaration order
    pub const ALL: [AccountType; 5] = [
        Self::Asset,
        Self::Liability,
        Self::Equity,
        Self::Income,
        Self::Expense,
    ];

    /// Classify a numeric prefix into an account type
    ///
    /// Ordered cascade, first match wins. Total: every integer maps to
    /// exactly one type.
    pub fn from_prefix(prefix: i64) -> Self {
        if prefix >= 70 {
            return Self::Expense;
        }
        if prefix >= 40 {
            return Self::Income;
        }
        if prefix >= 30 {
            return Self::Equity;
        }
        if prefix >= 20 {
            return Self::Liability;
        }
        Self::Asset
    }

    /// Canonical display label, used as the root segment of every
    /// full account name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Asset => "Assets",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Income => "Income",
            Self::Expense => "Expenses",
        }
    }

    /// Uppercase tag for the `Type` column of the import CSV
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Asset => "ASSET",
            Self::Liability => "LIABILITY",
            Self::Equity => "EQUITY",
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        let cases = [
            (19, AccountType::Asset),
            (20, AccountType::Liability),
            (29, AccountType::Liability),
            (30, AccountType::Equity),
            (39, AccountType::Equity),
            (40, AccountType::Income),
            (69, AccountType::Income),
            (70, AccountType::Expense),
        ];
        for (prefix, expected) in cases {
            assert_eq!(AccountType::from_prefix(prefix), expected, "prefix {}", prefix);
        }
    }

    #[test]
    fn test_classifier_is_total() {
        // Zero and negative prefixes fall through to Asset
        assert_eq!(AccountType::from_prefix(0), AccountType::Asset);
        assert_eq!(AccountType::from_prefix(-5), AccountType::Asset);
        assert_eq!(AccountType::from_prefix(i64::MIN), AccountType::Asset);
        assert_eq!(AccountType::from_prefix(i64::MAX), AccountType::Expense);
        assert_eq!(AccountType::from_prefix(999), AccountType::Expense);
    }

    #[test]
    fn test_classifier_monotonic() {
        let rank = |t: AccountType| AccountType::ALL.iter().position(|x| *x == t).unwrap();
        let mut prev = rank(AccountType::from_prefix(-100));
        for prefix in -99..200 {
            let cur = rank(AccountType::from_prefix(prefix));
            assert!(cur >= prev, "rank dropped at prefix {}", prefix);
            prev = cur;
        }
    }

    #[test]
    fn test_labels_and_tags() {
        assert_eq!(AccountType::Asset.label(), "Assets");
        assert_eq!(AccountType::Expense.label(), "Expenses");
        assert_eq!(AccountType::Liability.label(), "Liability");
        assert_eq!(AccountType::Income.tag(), "INCOME");
        assert_eq!(AccountType::Equity.tag(), "EQUITY");
        assert_eq!(format!("{}", AccountType::Asset), "Assets");
    }

    #[test]
    fn test_all_order_is_stable() {
        let labels: Vec<_> = AccountType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["Assets", "Liability", "Equity", "Income", "Expenses"]
        );
    }
}
