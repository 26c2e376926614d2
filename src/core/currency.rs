use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use super::error::CurrencyError;
use super::minor::{to_major, to_minor};

/// Construction input for a [`Currency`]: face values in major units.
///
/// ```
/// use payday::core::*;
/// use rust_decimal_macros::dec;
///
/// let config = CurrencyConfig {
///     code: "EUR".into(),
///     coins: vec![dec!(0.01), dec!(0.02), dec!(0.05), dec!(0.10), dec!(0.20), dec!(0.50), dec!(1), dec!(2)],
///     notes: vec![dec!(5), dec!(10), dec!(20), dec!(50), dec!(100), dec!(200), dec!(500)],
/// };
/// let eur = Currency::from_config(config).unwrap();
/// assert_eq!(eur.denominations().len(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Short identifier, e.g. "EUR".
    pub code: String,
    /// Coin face values in major units.
    pub coins: Vec<Decimal>,
    /// Note face values in major units.
    pub notes: Vec<Decimal>,
}

#[cfg(feature = "json")]
impl CurrencyConfig {
    /// Parse a configuration record from JSON.
    ///
    /// Face values may be JSON numbers or numeric strings.
    pub fn from_json(json: &str) -> Result<Self, CurrencyError> {
        serde_json::from_str(json).map_err(|e| CurrencyError::Parse(e.to_string()))
    }
}

/// Whether a face value is issued as a coin or a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenominationKind {
    Coin,
    Note,
    /// Not part of the currency; carries the offending minor-unit value.
    Unknown(i64),
}

impl DenominationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Note => "note",
            Self::Unknown(_) => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for DenominationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(value) => write!(f, "unknown {value}"),
            other => f.pad(other.as_str()),
        }
    }
}

impl Serialize for DenominationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Immutable description of a currency's coins and notes.
///
/// Validated once at construction: both sets are non-empty, every value is
/// a positive whole number of cents, and no value appears twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    code: String,
    coins: Vec<Decimal>,
    notes: Vec<Decimal>,
}

impl Currency {
    pub fn new(
        code: impl Into<String>,
        coins: Vec<Decimal>,
        notes: Vec<Decimal>,
    ) -> Result<Self, CurrencyError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CurrencyError::EmptyCode);
        }
        if coins.is_empty() {
            return Err(CurrencyError::NoCoins { code });
        }
        if notes.is_empty() {
            return Err(CurrencyError::NoNotes { code });
        }

        let mut seen = HashSet::with_capacity(coins.len() + notes.len());
        for &value in coins.iter().chain(notes.iter()) {
            if value <= Decimal::ZERO {
                return Err(CurrencyError::NonPositive { code, value });
            }
            let minor = match to_minor(value) {
                Some(minor) => minor,
                None if has_sub_cent_fraction(value) => {
                    return Err(CurrencyError::SubCent { code, value });
                }
                None => return Err(CurrencyError::OutOfRange { code, value }),
            };
            if !seen.insert(minor) {
                return Err(CurrencyError::Duplicate { code, value });
            }
        }

        Ok(Self { code, coins, notes })
    }

    pub fn from_config(config: CurrencyConfig) -> Result<Self, CurrencyError> {
        Self::new(config.code, config.coins, config.notes)
    }

    /// Look up a currency in the built-in table (see [`supported_currencies`](super::supported_currencies)).
    pub fn from_code(code: &str) -> Result<Self, CurrencyError> {
        let entry = super::currencies::lookup(code)
            .ok_or_else(|| CurrencyError::UnknownCode(code.to_string()))?;
        Self::new(entry.code, entry.coins.to_vec(), entry.notes.to_vec())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Coin face values in configuration order.
    pub fn coins(&self) -> &[Decimal] {
        &self.coins
    }

    /// Note face values in configuration order.
    pub fn notes(&self) -> &[Decimal] {
        &self.notes
    }

    /// All face values in minor units, largest first.
    pub fn denominations(&self) -> Vec<i64> {
        let mut units: Vec<i64> = self
            .coins
            .iter()
            .chain(self.notes.iter())
            .filter_map(|&value| to_minor(value))
            .collect();
        units.sort_unstable_by(|a, b| b.cmp(a));
        units
    }

    /// Classify a minor-unit face value as coin or note.
    pub fn classify(&self, minor: i64) -> DenominationKind {
        let major = to_major(minor);
        if self.notes.contains(&major) {
            DenominationKind::Note
        } else if self.coins.contains(&major) {
            DenominationKind::Coin
        } else {
            DenominationKind::Unknown(minor)
        }
    }

    pub fn to_config(&self) -> CurrencyConfig {
        CurrencyConfig {
            code: self.code.clone(),
            coins: self.coins.clone(),
            notes: self.notes.clone(),
        }
    }
}

fn has_sub_cent_fraction(value: Decimal) -> bool {
    value.normalize().scale() > 2
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
