//! Ledger construction
//!
//! Turns the two input tables into the flat output ledger: three record
//! tiers generated independently, concatenated, then stably sorted by full
//! account name. Pure and deterministic; all the I/O lives elsewhere.

use crate::models::{
    left_join, AccountRecord, AccountType, ParentCategory, SubAccount,
};

/// Root type placeholders: one per account type, in declaration order
pub fn root_records() -> Vec<AccountRecord> {
    AccountType::ALL.iter().map(|t| AccountRecord::root(*t)).collect()
}

/// Parent category placeholders: one per non-sentinel parent row
///
/// Sentinel rows contribute nothing here; their sub-accounts attach
/// directly under the root type.
pub fn parent_records(parents: &[ParentCategory]) -> Vec<AccountRecord> {
    parents
        .iter()
        .filter(|p| !p.is_uncategorized())
        .map(|p| AccountRecord::parent(p.prefix, &p.category))
        .collect()
}

/// Leaf records: one per joined sub-account row, in join order
pub fn leaf_records(subs: &[SubAccount], parents: &[ParentCategory]) -> Vec<AccountRecord> {
    left_join(subs, parents)
        .iter()
        .map(AccountRecord::leaf)
        .collect()
}

/// Build the complete ledger: generate all three tiers and sort.
///
/// The sort is stable and uses plain byte-wise string comparison on the
/// full account name, with no secondary key and no deduplication.
/// Duplicate full names from duplicate input end up adjacent.
pub fn build_ledger(parents: &[ParentCategory], subs: &[SubAccount]) -> Vec<AccountRecord> {
    let mut records = root_records();
    records.extend(parent_records(parents));
    records.extend(leaf_records(subs, parents));
    records.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    records
}
