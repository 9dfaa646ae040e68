//! Rate configuration errors.

use thiserror::Error;

/// Errors raised when building a rate configuration.
///
/// Aggregation itself never fails; only rates are validated.
#[derive(Debug, Error, PartialEq)]
pub enum RateError {
    /// A servicing rate is negative or not finite
    #[error("Invalid servicing rate for {asset_type}: {rate} (must be finite and non-negative)")]
    InvalidServicingRate {
        /// Asset class label
        asset_type: String,
        /// Offending rate
        rate: f64,
    },

    /// A basis-point rate is negative or not finite
    #[error("Invalid {name} rate: {bps} bps (must be finite and non-negative)")]
    InvalidBasisPoints {
        /// Which admin rate
        name: &'static str,
        /// Offending value in basis points
        bps: f64,
    },
}
