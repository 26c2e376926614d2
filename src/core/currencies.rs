//! Built-in denomination table.
//!
//! Face values of coins and notes in general circulation, keyed by ISO 4217
//! code. A value issued both as coin and note (e.g. the US dollar) is listed
//! once, under the form most commonly handed out in a pay packet.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub(crate) struct CurrencyEntry {
    pub code: &'static str,
    pub coins: &'static [Decimal],
    pub notes: &'static [Decimal],
}

/// Check whether `code` has a built-in denomination table.
pub fn is_supported_currency(code: &str) -> bool {
    lookup(code).is_some()
}

/// Currency codes with a built-in denomination table, sorted.
pub fn supported_currencies() -> impl Iterator<Item = &'static str> {
    CURRENCIES.iter().map(|entry| entry.code)
}

pub(crate) fn lookup(code: &str) -> Option<&'static CurrencyEntry> {
    CURRENCIES
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|idx| &CURRENCIES[idx])
}

/// Sorted by code for binary search.
static CURRENCIES: &[CurrencyEntry] = &[
    // Swiss Franc: no 1 or 2 Rappen coins in circulation
    CurrencyEntry {
        code: "CHF",
        coins: &[dec!(0.05), dec!(0.10), dec!(0.20), dec!(0.50), dec!(1), dec!(2), dec!(5)],
        notes: &[dec!(10), dec!(20), dec!(50), dec!(100), dec!(200), dec!(1000)],
    },
    // Euro
    CurrencyEntry {
        code: "EUR",
        coins: &[
            dec!(0.01),
            dec!(0.02),
            dec!(0.05),
            dec!(0.10),
            dec!(0.20),
            dec!(0.50),
            dec!(1),
            dec!(2),
        ],
        notes: &[dec!(5), dec!(10), dec!(20), dec!(50), dec!(100), dec!(200), dec!(500)],
    },
    // Pound Sterling
    CurrencyEntry {
        code: "GBP",
        coins: &[
            dec!(0.01),
            dec!(0.02),
            dec!(0.05),
            dec!(0.10),
            dec!(0.20),
            dec!(0.50),
            dec!(1),
            dec!(2),
        ],
        notes: &[dec!(5), dec!(10), dec!(20), dec!(50)],
    },
    // Japanese Yen
    CurrencyEntry {
        code: "JPY",
        coins: &[dec!(1), dec!(5), dec!(10), dec!(50), dec!(100), dec!(500)],
        notes: &[dec!(1000), dec!(2000), dec!(5000), dec!(10000)],
    },
    // US Dollar
    CurrencyEntry {
        code: "USD",
        coins: &[dec!(0.01), dec!(0.05), dec!(0.10), dec!(0.25), dec!(0.50)],
        notes: &[dec!(1), dec!(2), dec!(5), dec!(10), dec!(20), dec!(50), dec!(100)],
    },
];
