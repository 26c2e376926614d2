//! # payday
//!
//! Works out which coins and notes are needed to pay out an amount in cash,
//! and how many of each are needed to pay a whole collection of amounts
//! (a payroll, a batch of refunds).
//!
//! Amounts are [`rust_decimal::Decimal`] in major units; denominations are
//! handled internally as integer minor units (cents). The breakdown is greedy:
//! largest denomination first, no backtracking.
//!
//! ## Quick Start
//!
//! ```rust
//! use payday::*;
//! use rust_decimal_macros::dec;
//! use std::collections::BTreeMap;
//!
//! let eur = Currency::from_code("EUR").unwrap();
//! let cash = Cash::new(&eur);
//!
//! let payroll = vec![
//!     BTreeMap::from([("amount".to_string(), dec!(1250.00))]),
//!     BTreeMap::from([("amount".to_string(), dec!(75.50))]),
//! ];
//! let report = CollectionAggregator::new(&cash).report(&payroll);
//!
//! assert_eq!(report.lines[0].denomination, dec!(500));
//! assert_eq!(report.lines[0].count, 2);
//! assert_eq!(report.summary.total, dec!(1325.50));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Currency model, validation, built-in denomination table |
//! | `cash` (default) | Breakdown engine and collection aggregation |
//! | `json` | `serde_json` records and JSON currency configuration |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "cash")]
pub mod cash;

// Re-export at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "cash")]
pub use crate::cash::*;
