#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fundsynth/fundsynth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod admin;
pub mod error;
pub mod rates;
pub mod servicing;

pub use admin::{AdminCostAggregator, AdminCostRecord, calculate_admin_costs};
pub use error::RateError;
pub use rates::{AdminRates, BPS_PER_UNIT, ServicingRates};
pub use servicing::{
    FundAssetBucket, ServicingCostAggregator, ServicingCostRecord, calculate_servicing_cost,
    servicing_buckets,
};

use fundsynth_data::PortfolioHolding;

/// A cost rollup over a portfolio snapshot.
///
/// Implementations own their rate configuration and hold no other state,
/// so `aggregate` is a pure function of its input.
pub trait CostAggregator {
    /// One output row per fund.
    type Output;

    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Aggregate the holdings into one row per fund present in the input.
    fn aggregate(&self, holdings: &[PortfolioHolding]) -> Vec<Self::Output>;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
