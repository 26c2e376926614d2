use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::collection::AggregatedLine;
use crate::core::DenominationKind;

/// Totals per denomination kind across an aggregated breakdown.
///
/// Counts and amounts saturate at `u64::MAX` and `Decimal::MAX` instead of
/// overflowing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CashSummary {
    pub coin_count: u64,
    pub note_count: u64,
    pub coin_total: Decimal,
    pub note_total: Decimal,
    /// Value of lines that could not be classified; zero for a valid currency.
    pub unknown_total: Decimal,
    pub total: Decimal,
}

impl CashSummary {
    pub fn from_lines(lines: &[AggregatedLine]) -> Self {
        let mut summary = Self::default();
        for line in lines {
            match line.kind {
                DenominationKind::Coin => {
                    summary.coin_count = summary.coin_count.saturating_add(line.count);
                    summary.coin_total = summary.coin_total.saturating_add(line.amount);
                }
                DenominationKind::Note => {
                    summary.note_count = summary.note_count.saturating_add(line.count);
                    summary.note_total = summary.note_total.saturating_add(line.amount);
                }
                DenominationKind::Unknown(_) => {
                    summary.unknown_total = summary.unknown_total.saturating_add(line.amount);
                }
            }
            summary.total = summary.total.saturating_add(line.amount);
        }
        summary
    }

    /// Number of coins and notes handed out.
    pub fn pieces(&self) -> u64 {
        self.coin_count.saturating_add(self.note_count)
    }
}

impl fmt::Display for CashSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} notes ({:.2}) + {} coins ({:.2}) = {:.2}",
            self.note_count, self.note_total, self.coin_count, self.coin_total, self.total
        )
    }
}
