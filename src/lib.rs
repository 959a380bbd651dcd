//! ucoa-export - chart-of-accounts to GnuCash import CSV converter
//!
//! This library converts a two-level UCOA-style chart-of-accounts
//! definition (parent categories plus sub-accounts, keyed by numeric
//! prefix/suffix codes) into a flat, denormalized account table in the
//! GnuCash account-import CSV format.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (account types, input tables, ledger rows)
//! - `import`: CSV input layer for the two source tables
//! - `builder`: The pure transformation (generators, join, sort)
//! - `export`: CSV output layer
//! - `display`: Terminal preview formatting
//!
//! # Example
//!
//! ```rust
//! use ucoa_export::builder::build_ledger;
//! use ucoa_export::models::{ParentCategory, SubAccount};
//!
//! let parents = vec![ParentCategory::new(10, "Cash")];
//! let subs = vec![SubAccount::new(10, "01", "Checking")];
//! let ledger = build_ledger(&parents, &subs);
//! assert_eq!(ledger.len(), 7); // 5 root types + 1 parent + 1 leaf
//! ```

pub mod builder;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;

pub use error::UcoaError;
