use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;
use tracing::debug;

use crate::core::Currency;
use crate::core::minor::round_to_minor;

/// One denomination of a single breakdown, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BreakdownLine {
    /// Face value in minor units (cents).
    pub denomination: i64,
    /// How many of this denomination are paid out; may be zero.
    pub count: u64,
}

/// Greedy breakdown engine for one currency.
///
/// Takes as many of the largest denomination as fit, then moves on to the
/// next smaller one, without backtracking. For currencies like the euro this
/// yields the fewest coins and notes; for irregular denomination sets it may
/// not, and that is accepted.
///
/// Each call owns its working state, so one `Cash` can be shared freely.
///
/// ```
/// use payday::*;
/// use rust_decimal_macros::dec;
///
/// let eur = Currency::from_code("EUR").unwrap();
/// let cash = Cash::new(&eur);
/// let lines = cash.breakdown(dec!(75.50));
///
/// let paid: Vec<(i64, u64)> = lines
///     .iter()
///     .filter(|line| line.count > 0)
///     .map(|line| (line.denomination, line.count))
///     .collect();
/// assert_eq!(paid, vec![(5000, 1), (2000, 1), (500, 1), (50, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct Cash<'a> {
    currency: &'a Currency,
    denominations: Vec<i64>,
}

impl<'a> Cash<'a> {
    pub fn new(currency: &'a Currency) -> Self {
        let mut denominations = currency.denominations();
        denominations.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            currency,
            denominations,
        }
    }

    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Minor-unit denominations in the order they are tried.
    pub fn denominations(&self) -> &[i64] {
        &self.denominations
    }

    /// Break `amount` (major units) into denominations.
    ///
    /// Returns one line per denomination, largest first, including lines with
    /// a zero count. Negative amounts are treated as zero. Fractions of a cent
    /// are rounded away, and whatever the denominations cannot tile (e.g. 0.03
    /// in a currency whose smallest coin is 0.05) is dropped.
    pub fn breakdown(&self, amount: Decimal) -> Vec<BreakdownLine> {
        self.tile(pending_minor(amount)).0
    }

    /// [`breakdown`](Self::breakdown) for float input. NaN and infinities
    /// are treated as zero.
    pub fn breakdown_f64(&self, amount: f64) -> Vec<BreakdownLine> {
        self.breakdown(decimal_from_f64(amount))
    }

    /// Minor units of `amount` left over after the greedy pass.
    ///
    /// Always zero when the currency has a one-cent coin.
    pub fn residue(&self, amount: Decimal) -> i64 {
        self.tile(pending_minor(amount)).1
    }

    fn tile(&self, mut pending: i64) -> (Vec<BreakdownLine>, i64) {
        let mut lines = Vec::with_capacity(self.denominations.len());
        for &denomination in &self.denominations {
            let count = pending / denomination;
            pending -= count * denomination;
            lines.push(BreakdownLine {
                denomination,
                count: u64::try_from(count).unwrap_or_default(),
            });
        }
        if pending != 0 {
            debug!(
                currency = %self.currency.code(),
                residue = pending,
                "amount not fully tiled by denominations, dropping residue"
            );
        }
        (lines, pending)
    }
}

pub(crate) fn decimal_from_f64(amount: f64) -> Decimal {
    if !amount.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(amount).unwrap_or_default()
}

fn pending_minor(amount: Decimal) -> i64 {
    if amount.is_sign_negative() {
        debug!(%amount, "negative amount, breaking down zero instead");
        return 0;
    }
    match round_to_minor(amount) {
        Some(minor) => minor,
        None => {
            debug!(%amount, "amount out of range, breaking down zero instead");
            0
        }
    }
}
