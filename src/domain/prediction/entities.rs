use serde::Serialize;

use super::value_objects::{Asset, PredictedPrice};
use crate::domain::errors::ValidationError;

/// A validated price forecast for one asset.
///
/// `dates` and `predicted` are index-aligned and never empty; the only way
/// to build one is [`Prediction::try_new`], which enforces that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    asset: Asset,
    dates: Vec<String>,
    predicted: Vec<f64>,
}

impl Prediction {
    pub fn try_new(asset: Asset, dates: Vec<String>, predicted: Vec<f64>) -> Result<Self, ValidationError> {
        if dates.len() != predicted.len() {
            return Err(ValidationError::LengthMismatch {
                dates: dates.len(),
                predicted: predicted.len(),
            });
        }
        if dates.is_empty() {
            return Err(ValidationError::Empty);
        }
        if let Some(index) = predicted.iter().position(|v| !v.is_finite()) {
            return Err(ValidationError::NonFinite { index });
        }
        Ok(Self { asset, dates, predicted })
    }

    /// Asset the forecast was requested for.
    pub fn asset(&self) -> Asset {
        self.asset
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn predicted(&self) -> &[f64] {
        &self.predicted
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Date/price pairs in series order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, PredictedPrice)> + '_ {
        self.dates
            .iter()
            .zip(&self.predicted)
            .map(|(date, value)| (date.as_str(), PredictedPrice::new(*value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(n: usize) -> Vec<String> {
        (1..=n).map(|d| format!("2024-01-{:02}", d)).collect()
    }

    #[test]
    fn accepts_aligned_series() {
        let p = Prediction::try_new(Asset::Solana, dates(2), vec![100.0, 105.5]).unwrap();
        assert_eq!(p.asset(), Asset::Solana);
        assert_eq!(p.len(), 2);
        let entries: Vec<_> = p.entries().map(|(d, v)| format!("{}: {}", d, v)).collect();
        assert_eq!(entries, vec!["2024-01-01: $100.00", "2024-01-02: $105.50"]);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Prediction::try_new(Asset::Bitcoin, dates(3), vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, ValidationError::LengthMismatch { dates: 3, predicted: 2 });
    }

    #[test]
    fn rejects_empty_series() {
        let err = Prediction::try_new(Asset::Bitcoin, Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, ValidationError::Empty);
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Prediction::try_new(Asset::Bitcoin, dates(3), vec![1.0, f64::NAN, 3.0]).unwrap_err();
        assert_eq!(err, ValidationError::NonFinite { index: 1 });
        let err = Prediction::try_new(Asset::Bitcoin, dates(1), vec![f64::INFINITY]).unwrap_err();
        assert_eq!(err, ValidationError::NonFinite { index: 0 });
    }
}
