//! Greedy denomination breakdown and collection aggregation.
//!
//! [`Cash`] splits one amount into coins and notes; [`CollectionAggregator`]
//! does so for every record of a collection (a payroll, say) and merges the
//! counts per denomination.

mod breakdown;
mod collection;
mod record;
mod summary;

pub use breakdown::{BreakdownLine, Cash};
pub use collection::{AggregatedLine, CollectionAggregator, CollectionReport, DEFAULT_AMOUNT_FIELD};
#[cfg(feature = "json")]
pub use record::json_amount;
pub use record::{AmountRecord, parse_numeric};
pub use summary::CashSummary;
