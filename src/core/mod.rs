//! Currency model: coin and note face values, classification and the
//! built-in denomination table.

mod currencies;
mod currency;
mod error;
pub mod minor;

pub use currencies::{is_supported_currency, supported_currencies};
pub use currency::*;
pub use error::*;
