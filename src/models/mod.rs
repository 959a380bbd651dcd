//! Core data models for ucoa-export
//!
//! This module contains the data structures that represent the
//! chart-of-accounts domain: account types, input tables, and output
//! ledger records.

pub mod account_type;
pub mod chart;
pub mod ledger;

pub use account_type::AccountType;
pub use chart::{left_join, JoinedSubAccount, ParentCategory, SubAccount, UNCATEGORIZED};
pub use ledger::{AccountRecord, RecordDefaults, DEFAULTS};
