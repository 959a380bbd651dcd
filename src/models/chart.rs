//! Chart-of-accounts input model
//!
//! The two input tables (parent categories and sub-accounts) and the
//! left join that associates each sub-account with its parent category.

use serde::{Deserialize, Serialize};

/// Sentinel category meaning "no intermediate grouping level": sub-accounts
/// under such a prefix attach directly to the root type account.
pub const UNCATEGORIZED: &str = "UNCATEGORIZED";

/// A named grouping of accounts under a numeric prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentCategory {
    /// Top-level numeric range key (e.g. 10, 20, 70)
    pub prefix: i64,
    /// Category name; may hold the [`UNCATEGORIZED`] sentinel
    pub category: String,
}

impl ParentCategory {
    /// Create a new parent category
    pub fn new(prefix: i64, category: impl Into<String>) -> Self {
        Self {
            prefix,
            category: category.into(),
        }
    }

    /// True if this row carries the [`UNCATEGORIZED`] sentinel
    pub fn is_uncategorized(&self) -> bool {
        self.category == UNCATEGORIZED
    }
}

/// A leaf account definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubAccount {
    /// Shared join key with the parent table
    pub prefix: i64,
    /// Trailing code segment. Kept as text: leading zeros are significant
    /// in the generated account code.
    pub suffix: String,
    /// Account name
    pub name: String,
}

impl SubAccount {
    /// Create a new sub-account
    pub fn new(prefix: i64, suffix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix,
            suffix: suffix.into(),
            name: name.into(),
        }
    }
}

/// A sub-account paired with its parent category after the left join
///
/// `category` is `None` when no parent row shares the prefix. An absent
/// category behaves like the [`UNCATEGORIZED`] sentinel downstream, but the
/// two stay distinguishable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedSubAccount {
    pub prefix: i64,
    pub suffix: String,
    pub name: String,
    pub category: Option<String>,
}

impl JoinedSubAccount {
    /// True if this leaf attaches directly to the root type account
    /// (sentinel category or unmatched join)
    pub fn is_uncategorized(&self) -> bool {
        match &self.category {
            Some(c) => c == UNCATEGORIZED,
            None => true,
        }
    }
}

/// Left join of sub-accounts against parent categories on `prefix`.
///
/// Standard left-join semantics: every sub-account row survives in input
/// order, unmatched rows get `category: None`, and duplicate parent
/// prefixes fan each matching sub-account out into multiple rows.
pub fn left_join(subs: &[SubAccount], parents: &[ParentCategory]) -> Vec<JoinedSubAccount> {
    let mut joined = Vec::with_capacity(subs.len());
    for sub in subs {
        let mut matched = false;
        for parent in parents {
            if parent.prefix == sub.prefix {
                matched = true;
                joined.push(JoinedSubAccount {
                    prefix: sub.prefix,
                    suffix: sub.suffix.clone(),
                    name: sub.name.clone(),
                    category: Some(parent.category.clone()),
                });
            }
        }
        if !matched {
            joined.push(JoinedSubAccount {
                prefix: sub.prefix,
                suffix: sub.suffix.clone(),
                name: sub.name.clone(),
                category: None,
            });
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_matches_on_prefix() {
        let parents = vec![
            ParentCategory::new(10, "Cash"),
            ParentCategory::new(20, "Loans"),
        ];
        let subs = vec![
            SubAccount::new(10, "01", "Checking"),
            SubAccount::new(20, "05", "Mortgage"),
        ];

        let joined = left_join(&subs, &parents);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].category.as_deref(), Some("Cash"));
        assert_eq!(joined[1].category.as_deref(), Some("Loans"));
        assert_eq!(joined[1].suffix, "05");
    }

    #[test]
    fn test_join_preserves_unmatched_rows() {
        let parents = vec![ParentCategory::new(10, "Cash")];
        let subs = vec![
            SubAccount::new(10, "01", "Checking"),
            SubAccount::new(55, "02", "Royalties"),
        ];

        let joined = left_join(&subs, &parents);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[1].category, None);
        assert!(joined[1].is_uncategorized());
    }

    #[test]
    fn test_join_fans_out_duplicate_parents() {
        let parents = vec![
            ParentCategory::new(10, "Cash"),
            ParentCategory::new(10, "Cash Equivalents"),
        ];
        let subs = vec![SubAccount::new(10, "01", "Checking")];

        let joined = left_join(&subs, &parents);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].category.as_deref(), Some("Cash"));
        assert_eq!(joined[1].category.as_deref(), Some("Cash Equivalents"));
    }

    #[test]
    fn test_join_keeps_input_order() {
        let parents = vec![ParentCategory::new(10, "Cash")];
        let subs = vec![
            SubAccount::new(10, "03", "Petty Cash"),
            SubAccount::new(10, "01", "Checking"),
            SubAccount::new(10, "02", "Savings"),
        ];

        let joined = left_join(&subs, &parents);
        let names: Vec<_> = joined.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["Petty Cash", "Checking", "Savings"]);
    }

    #[test]
    fn test_uncategorized_sentinel() {
        let parent = ParentCategory::new(10, UNCATEGORIZED);
        assert!(parent.is_uncategorized());
        assert!(!ParentCategory::new(10, "Cash").is_uncategorized());

        let joined = JoinedSubAccount {
            prefix: 10,
            suffix: "01".into(),
            name: "Checking".into(),
            category: Some(UNCATEGORIZED.into()),
        };
        assert!(joined.is_uncategorized());
    }
}
