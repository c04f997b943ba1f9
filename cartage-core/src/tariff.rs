//! Billing rates applied to screened items.

use thiserror::Error;

/// Billed rates per unit weight and per unit distance.
///
/// # Examples
/// ```
/// use cartage_core::Tariff;
///
/// # fn main() -> Result<(), cartage_core::TariffError> {
/// let tariff = Tariff::new(500.0, 200.0)?;
/// assert_eq!(tariff.bill(10, 800), 10.0 * 500.0 + 800.0 * 200.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tariff {
    weight_rate: f64,
    distance_rate: f64,
}

/// Errors returned by [`Tariff::new`].
#[derive(Debug, Error, PartialEq)]
pub enum TariffError {
    /// A rate was NaN or infinite.
    #[error("tariff rates must be finite")]
    NonFinite,
    /// A rate was below zero.
    #[error("tariff rates must be non-negative")]
    Negative,
}

impl Tariff {
    /// Validates and constructs a [`Tariff`].
    ///
    /// Rates must be finite and non-negative so that every computed bill is
    /// a well-ordered monetary value.
    pub fn new(weight_rate: f64, distance_rate: f64) -> Result<Self, TariffError> {
        if !weight_rate.is_finite() || !distance_rate.is_finite() {
            return Err(TariffError::NonFinite);
        }
        if weight_rate < 0.0 || distance_rate < 0.0 {
            return Err(TariffError::Negative);
        }
        Ok(Self {
            weight_rate,
            distance_rate,
        })
    }

    /// Rate billed per unit weight.
    pub fn weight_rate(&self) -> f64 {
        self.weight_rate
    }

    /// Rate billed per unit distance.
    pub fn distance_rate(&self) -> f64 {
        self.distance_rate
    }

    /// Price for transporting one item of `weight` over `distance`.
    ///
    /// Deterministic in `(weight, distance)` and the two rates.
    pub fn bill(&self, weight: u32, distance: u32) -> f64 {
        f64::from(weight) * self.weight_rate + f64::from(distance) * self.distance_rate
    }
}
