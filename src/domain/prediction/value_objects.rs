use std::fmt;

use derive_more::Constructor;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Value Object - one of the supported cryptocurrencies.
///
/// The serialized form is the identifier the prediction service expects in
/// its `coin` query parameter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
    StrumDisplay, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    #[default]
    Bitcoin,
    Ethereum,
    Solana,
    Cardano,
    Ripple,
}

impl Asset {
    /// Identifier used as option value and query parameter.
    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    /// Human-readable label for the picker.
    pub fn label(&self) -> &'static str {
        match self {
            Asset::Bitcoin => "Bitcoin",
            Asset::Ethereum => "Ethereum",
            Asset::Solana => "Solana",
            Asset::Cardano => "Cardano",
            Asset::Ripple => "Ripple",
        }
    }
}

/// Assets in picker order.
pub fn all_assets() -> Vec<Asset> {
    Asset::iter().collect()
}

/// Value Object - a predicted USD price, displayed with two decimals.
///
/// Cents are rounded half away from zero on the exact binary value, so
/// `105.125` shows as `$105.13` while `2.675` (stored just below) shows
/// as `$2.67`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Constructor)]
pub struct PredictedPrice(f64);

impl fmt::Display for PredictedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Decimal::from_f64_retain(self.0) {
            Some(exact) => {
                let cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                write!(f, "${:.2}", cents)
            }
            // outside Decimal's range every f64 is an integer, nothing to round
            None => write!(f, "${:.2}", self.0),
        }
    }
}
