use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::breakdown::Cash;
use super::record::AmountRecord;
use super::summary::CashSummary;
use crate::core::DenominationKind;
use crate::core::minor::to_major;

/// Field read from each record unless overridden.
pub const DEFAULT_AMOUNT_FIELD: &str = "amount";

/// Total of one denomination across a whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedLine {
    /// Face value in major units.
    pub denomination: Decimal,
    #[serde(rename = "type")]
    pub kind: DenominationKind,
    /// Always positive.
    pub count: u64,
    /// `count × denomination`.
    pub amount: Decimal,
}

/// Aggregated lines plus per-kind totals and record bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionReport {
    pub lines: Vec<AggregatedLine>,
    pub summary: CashSummary,
    /// Records processed.
    pub records: usize,
    /// Records whose amount was missing or not numeric and counted as zero.
    pub defaulted: usize,
}

/// Runs the breakdown over every record of a collection and merges the
/// results per denomination.
///
/// ```
/// use payday::*;
/// use rust_decimal_macros::dec;
/// use std::collections::HashMap;
///
/// let eur = Currency::from_code("EUR").unwrap();
/// let cash = Cash::new(&eur);
/// let payroll: Vec<HashMap<String, rust_decimal::Decimal>> = vec![
///     HashMap::from([("net".to_string(), dec!(20.00))]),
///     HashMap::from([("net".to_string(), dec!(25.00))]),
/// ];
///
/// let lines = CollectionAggregator::new(&cash).amount_field("net").run(&payroll);
/// assert_eq!(lines.len(), 2);
/// assert_eq!((lines[0].denomination, lines[0].count), (dec!(20), 2));
/// assert_eq!((lines[1].denomination, lines[1].count), (dec!(5), 1));
/// ```
#[derive(Debug, Clone)]
pub struct CollectionAggregator<'c, 'a> {
    cash: &'c Cash<'a>,
    amount_field: String,
}

impl<'c, 'a> CollectionAggregator<'c, 'a> {
    pub fn new(cash: &'c Cash<'a>) -> Self {
        Self {
            cash,
            amount_field: DEFAULT_AMOUNT_FIELD.to_string(),
        }
    }

    /// Read amounts from `field` instead of `"amount"`.
    pub fn amount_field(mut self, field: impl Into<String>) -> Self {
        self.amount_field = field.into();
        self
    }

    pub fn field(&self) -> &str {
        &self.amount_field
    }

    /// Merged breakdown of all records; see [`report`](Self::report).
    pub fn run<I>(&self, records: I) -> Vec<AggregatedLine>
    where
        I: IntoIterator,
        I::Item: AmountRecord,
    {
        self.report(records).lines
    }

    /// Break down every record and merge the counts per denomination.
    ///
    /// Lines come out in the order their denomination was first seen, which
    /// for a greedy breakdown is largest first. Denominations never used are
    /// omitted. Records without a numeric amount count as zero.
    pub fn report<I>(&self, records: I) -> CollectionReport
    where
        I: IntoIterator,
        I::Item: AmountRecord,
    {
        let mut tally = Tally::default();
        let mut processed = 0;
        let mut defaulted = 0;

        for (index, record) in records.into_iter().enumerate() {
            processed += 1;
            let amount = record.amount(&self.amount_field).unwrap_or_else(|| {
                debug!(
                    index,
                    field = %self.amount_field,
                    "record has no numeric amount, counting it as zero"
                );
                defaulted += 1;
                Decimal::ZERO
            });

            for line in self.cash.breakdown(amount) {
                tally.add(line.denomination, line.count);
            }
        }

        let currency = self.cash.currency();
        let lines: Vec<AggregatedLine> = tally
            .into_counts()
            .filter(|&(_, count)| count > 0)
            .map(|(minor, count)| {
                let denomination = to_major(minor);
                AggregatedLine {
                    denomination,
                    kind: currency.classify(minor),
                    count,
                    amount: Decimal::from(count).saturating_mul(denomination),
                }
            })
            .collect();

        debug!(
            currency = %currency.code(),
            records = processed,
            defaulted,
            denominations = lines.len(),
            "collection breakdown complete"
        );

        CollectionReport {
            summary: CashSummary::from_lines(&lines),
            lines,
            records: processed,
            defaulted,
        }
    }
}

impl Cash<'_> {
    /// Merged breakdown of `records`, reading the `"amount"` field.
    pub fn breakdown_collection<I>(&self, records: I) -> Vec<AggregatedLine>
    where
        I: IntoIterator,
        I::Item: AmountRecord,
    {
        CollectionAggregator::new(self).run(records)
    }
}

/// Running count per minor-unit denomination, remembering first-seen order.
#[derive(Default)]
struct Tally {
    order: Vec<i64>,
    counts: HashMap<i64, u64>,
}

impl Tally {
    fn add(&mut self, denomination: i64, count: u64) {
        let order = &mut self.order;
        let total = self.counts.entry(denomination).or_insert_with(|| {
            order.push(denomination);
            0
        });
        *total = total.checked_add(count).unwrap_or_else(|| {
            debug!(denomination, "denomination count overflowed, capping at u64::MAX");
            u64::MAX
        });
    }

    fn into_counts(self) -> impl Iterator<Item = (i64, u64)> {
        let Self { order, counts } = self;
        order.into_iter().map(move |denomination| {
            (denomination, counts.get(&denomination).copied().unwrap_or(0))
        })
    }
}
