//! Rate configuration for the cost aggregators.
//!
//! Rates are plain values passed into each aggregation call. Defaults
//! reproduce the standard fee schedule; callers override them per call.

use crate::error::RateError;
use fundsynth_data::AssetClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Basis points per unit (1 bps = 0.0001).
pub const BPS_PER_UNIT: f64 = 10_000.0;

const fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate >= 0.0
}

/// Servicing rate per asset class, as a fraction of market value.
///
/// Asset classes absent from the table have an effective rate of zero.
/// Serializes as a map from asset class label to rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServicingRates {
    rates: HashMap<AssetClass, f64>,
}

impl Default for ServicingRates {
    fn default() -> Self {
        let rates = [
            (AssetClass::Equity, 0.0005),
            (AssetClass::Bond, 0.0004),
            (AssetClass::RealEstate, 0.001),
            (AssetClass::PrivateEquity, 0.0015),
            (AssetClass::Commodities, 0.0008),
            (AssetClass::Cash, 0.0002),
            (AssetClass::Crypto, 0.001),
        ]
        .into_iter()
        .collect();

        Self { rates }
    }
}

impl ServicingRates {
    /// Create a rate table from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidServicingRate`] if any rate is negative,
    /// NaN or infinite.
    pub fn new(rates: HashMap<AssetClass, f64>) -> Result<Self, RateError> {
        let table = Self { rates };
        table.validate()?;
        Ok(table)
    }

    /// A table with no entries; every asset class costs zero.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Add or replace the rate for one asset class.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidServicingRate`] if `rate` is negative,
    /// NaN or infinite.
    pub fn with_rate(mut self, asset_type: AssetClass, rate: f64) -> Result<Self, RateError> {
        if !is_valid_rate(rate) {
            return Err(RateError::InvalidServicingRate {
                asset_type: asset_type.to_string(),
                rate,
            });
        }
        self.rates.insert(asset_type, rate);
        Ok(self)
    }

    /// Check every entry.
    ///
    /// # Errors
    ///
    /// Returns the first invalid entry found.
    pub fn validate(&self) -> Result<(), RateError> {
        match self.rates.iter().find(|(_, rate)| !is_valid_rate(**rate)) {
            Some((asset_type, rate)) => Err(RateError::InvalidServicingRate {
                asset_type: asset_type.to_string(),
                rate: *rate,
            }),
            None => Ok(()),
        }
    }

    /// Configured rate, if the asset class is in the table.
    pub fn get(&self, asset_type: &AssetClass) -> Option<f64> {
        self.rates.get(asset_type).copied()
    }

    /// Effective rate: the configured rate, or zero when absent.
    pub fn rate(&self, asset_type: &AssetClass) -> f64 {
        self.get(asset_type).unwrap_or(0.0)
    }

    /// Whether the asset class has a configured rate.
    pub fn contains(&self, asset_type: &AssetClass) -> bool {
        self.rates.contains_key(asset_type)
    }

    /// Entries sorted by asset class label.
    pub fn entries(&self) -> Vec<(&AssetClass, f64)> {
        let mut entries: Vec<_> = self.rates.iter().map(|(a, r)| (a, *r)).collect();
        entries.sort_by(|a, b| a.0.label().cmp(b.0.label()));
        entries
    }

    /// Number of configured asset classes.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Admin fee rates in basis points of total fund market value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminRates {
    /// Fund accounting fee (default: 1.0 bps)
    pub accounting_bps: f64,

    /// Custody fee (default: 0.5 bps)
    pub custody_bps: f64,

    /// Transfer-agency fee (default: 0.3 bps)
    pub ta_bps: f64,
}

impl Default for AdminRates {
    fn default() -> Self {
        Self {
            accounting_bps: 1.0,
            custody_bps: 0.5,
            ta_bps: 0.3,
        }
    }
}

impl AdminRates {
    /// Create admin rates.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidBasisPoints`] if any rate is negative,
    /// NaN or infinite.
    pub fn new(accounting_bps: f64, custody_bps: f64, ta_bps: f64) -> Result<Self, RateError> {
        let rates = Self {
            accounting_bps,
            custody_bps,
            ta_bps,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Check all three rates.
    ///
    /// # Errors
    ///
    /// Returns the first invalid rate.
    pub fn validate(&self) -> Result<(), RateError> {
        for (name, bps) in [
            ("accounting", self.accounting_bps),
            ("custody", self.custody_bps),
            ("transfer agency", self.ta_bps),
        ] {
            if !is_valid_rate(bps) {
                return Err(RateError::InvalidBasisPoints { name, bps });
            }
        }
        Ok(())
    }

    /// Sum of the three rates in basis points.
    pub const fn total_bps(&self) -> f64 {
        self.accounting_bps + self.custody_bps + self.ta_bps
    }

    /// Fee on `market_value` at `bps` basis points.
    pub const fn fee(market_value: f64, bps: f64) -> f64 {
        market_value * bps / BPS_PER_UNIT
    }
}
