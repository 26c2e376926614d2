use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::str::FromStr;

use rust_decimal::Decimal;

/// A collection entry carrying a named amount, e.g. one payroll row.
///
/// `amount` returns `None` when the field is missing or not numeric; the
/// aggregator then counts the record as zero.
pub trait AmountRecord {
    fn amount(&self, field: &str) -> Option<Decimal>;
}

impl<T: AmountRecord + ?Sized> AmountRecord for &T {
    fn amount(&self, field: &str) -> Option<Decimal> {
        (**self).amount(field)
    }
}

impl<S: BuildHasher> AmountRecord for HashMap<String, Decimal, S> {
    fn amount(&self, field: &str) -> Option<Decimal> {
        self.get(field).copied()
    }
}

impl AmountRecord for BTreeMap<String, Decimal> {
    fn amount(&self, field: &str) -> Option<Decimal> {
        self.get(field).copied()
    }
}

impl<S: BuildHasher> AmountRecord for HashMap<String, String, S> {
    fn amount(&self, field: &str) -> Option<Decimal> {
        self.get(field).and_then(|raw| parse_numeric(raw))
    }
}

impl AmountRecord for BTreeMap<String, String> {
    fn amount(&self, field: &str) -> Option<Decimal> {
        self.get(field).and_then(|raw| parse_numeric(raw))
    }
}

#[cfg(feature = "json")]
impl AmountRecord for serde_json::Map<String, serde_json::Value> {
    fn amount(&self, field: &str) -> Option<Decimal> {
        self.get(field).and_then(json_amount)
    }
}

#[cfg(feature = "json")]
impl AmountRecord for serde_json::Value {
    fn amount(&self, field: &str) -> Option<Decimal> {
        self.as_object().and_then(|object| object.amount(field))
    }
}

/// Parse a numeric string: plain decimals ("1250.00", " 75.5 ") and
/// scientific notation ("1.5e3"). Anything else is `None`.
pub fn parse_numeric(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if !is_numeric_literal(trimmed) {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Optional sign, digits with at most one `.`, optional `e`/`E` exponent.
fn is_numeric_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        pos += 1;
    }
    if digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        if pos == start {
            return false;
        }
    }

    pos == bytes.len()
}

/// Numeric JSON value as a decimal amount. Numeric strings are accepted,
/// everything else (null, booleans, arrays, objects) is `None`.
#[cfg(feature = "json")]
pub fn json_amount(value: &serde_json::Value) -> Option<Decimal> {
    use serde_json::Value;

    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Some(Decimal::from(int))
            } else if let Some(uint) = number.as_u64() {
                Some(Decimal::from(uint))
            } else {
                number.as_f64().map(super::breakdown::decimal_from_f64)
            }
        }
        Value::String(raw) => parse_numeric(raw),
        _ => None,
    }
}
