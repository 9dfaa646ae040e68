//! Servicing cost aggregation.
//!
//! Servicing fees depend on asset class, so holdings are first bucketed by
//! `(fund_id, asset_type)`. Each bucket's summed market value is charged the
//! bucket's servicing rate, and bucket costs are then summed per fund:
//!
//! ```text
//! servicing_cost(fund) = Σ_asset  Σ market_value(fund, asset) × rate(asset)
//! ```
//!
//! An asset class missing from the rate table is charged at zero. Its bucket
//! still exists and its fund still appears in the output.

use crate::CostAggregator;
use crate::rates::ServicingRates;
use fundsynth_data::{AssetClass, PortfolioHolding};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Servicing cost for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicingCostRecord {
    /// Fund identifier.
    pub fund_id: String,

    /// Sum of bucket costs across the fund's asset classes.
    pub servicing_cost: f64,
}

/// Total market value of one fund in one asset class, with its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundAssetBucket {
    /// Fund identifier.
    pub fund_id: String,

    /// Asset class.
    pub asset_type: AssetClass,

    /// Sum of market value over holdings with this key.
    pub market_value: f64,

    /// Effective servicing rate (zero when not in the table).
    pub rate: f64,

    /// `market_value * rate`.
    pub service_cost: f64,
}

/// Bucket holdings by `(fund_id, asset_type)` and price each bucket.
///
/// Buckets are sorted by fund then asset class label. Asset classes missing
/// from `rates` are logged once per call at `warn` level.
pub fn servicing_buckets(
    holdings: &[PortfolioHolding],
    rates: &ServicingRates,
) -> Vec<FundAssetBucket> {
    let mut totals: HashMap<(&str, &AssetClass), f64> = HashMap::new();
    for holding in holdings {
        *totals
            .entry((holding.fund_id(), holding.asset_type()))
            .or_insert(0.0) += holding.market_value();
    }

    let mut unpriced: HashSet<&AssetClass> = HashSet::new();
    let mut buckets: Vec<FundAssetBucket> = totals
        .into_iter()
        .map(|((fund_id, asset_type), market_value)| {
            if !rates.contains(asset_type) {
                unpriced.insert(asset_type);
            }
            let rate = rates.rate(asset_type);
            FundAssetBucket {
                fund_id: fund_id.to_string(),
                asset_type: asset_type.clone(),
                market_value,
                rate,
                service_cost: market_value * rate,
            }
        })
        .collect();

    for asset_type in unpriced {
        tracing::warn!(
            asset_type = %asset_type,
            "no servicing rate for asset class, charging zero"
        );
    }

    buckets.sort_by(|a, b| {
        a.fund_id
            .cmp(&b.fund_id)
            .then_with(|| a.asset_type.label().cmp(b.asset_type.label()))
    });
    buckets
}

/// Servicing cost per fund.
///
/// Returns one record per distinct `fund_id` in `holdings`, sorted by
/// fund id. Never fails: negative market values and empty fund ids pass
/// through the arithmetic unchanged.
///
/// # Examples
///
/// ```
/// use fundsynth_costs::{ServicingRates, calculate_servicing_cost};
/// use fundsynth_data::{AssetClass, PortfolioHolding};
///
/// let holdings = vec![
///     PortfolioHolding::new("F2", AssetClass::Bond, "Gilt", 500, 100.0),
///     PortfolioHolding::new("F2", AssetClass::Crypto, "BTC", 200, 100.0),
/// ];
/// let costs = calculate_servicing_cost(&holdings, &ServicingRates::default());
///
/// assert_eq!(costs.len(), 1);
/// assert!((costs[0].servicing_cost - 40.0).abs() < 1e-9);
/// ```
pub fn calculate_servicing_cost(
    holdings: &[PortfolioHolding],
    rates: &ServicingRates,
) -> Vec<ServicingCostRecord> {
    let buckets = servicing_buckets(holdings, rates);

    let mut per_fund: HashMap<String, f64> = HashMap::new();
    for bucket in buckets {
        *per_fund.entry(bucket.fund_id).or_insert(0.0) += bucket.service_cost;
    }

    let mut records: Vec<ServicingCostRecord> = per_fund
        .into_iter()
        .map(|(fund_id, servicing_cost)| ServicingCostRecord {
            fund_id,
            servicing_cost,
        })
        .collect();
    records.sort_by(|a, b| a.fund_id.cmp(&b.fund_id));

    tracing::debug!(
        holdings = holdings.len(),
        funds = records.len(),
        "computed servicing costs"
    );
    records
}

/// [`CostAggregator`] for servicing costs.
#[derive(Debug, Clone, Default)]
pub struct ServicingCostAggregator {
    rates: ServicingRates,
}

impl ServicingCostAggregator {
    /// Create an aggregator with the given rate table.
    pub const fn new(rates: ServicingRates) -> Self {
        Self { rates }
    }

    /// The rate table in use.
    pub const fn rates(&self) -> &ServicingRates {
        &self.rates
    }
}

impl CostAggregator for ServicingCostAggregator {
    type Output = ServicingCostRecord;

    fn name(&self) -> &str {
        "servicing"
    }

    fn aggregate(&self, holdings: &[PortfolioHolding]) -> Vec<ServicingCostRecord> {
        calculate_servicing_cost(holdings, &self.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn holding(fund: &str, asset: AssetClass, quantity: u32, price: f64) -> PortfolioHolding {
        PortfolioHolding::new(fund, asset, "test", quantity, price)
    }

    #[test]
    fn test_buckets_merge_same_key() {
        let holdings = vec![
            holding("F1", AssetClass::Equity, 100, 10.0),
            holding("F1", AssetClass::Equity, 200, 10.0),
            holding("F1", AssetClass::Cash, 50, 10.0),
        ];
        let buckets = servicing_buckets(&holdings, &ServicingRates::default());

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].asset_type, AssetClass::Cash);
        assert_eq!(buckets[0].market_value, 500.0);
        assert_eq!(buckets[1].asset_type, AssetClass::Equity);
        assert_eq!(buckets[1].market_value, 3_000.0);
        assert_relative_eq!(buckets[1].service_cost, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_bucket_kept_with_zero_rate() {
        let holdings = vec![holding("F3", AssetClass::Other("Unknown".into()), 100, 100.0)];
        let buckets = servicing_buckets(&holdings, &ServicingRates::default());

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].rate, 0.0);
        assert_eq!(buckets[0].service_cost, 0.0);
        assert_eq!(buckets[0].market_value, 10_000.0);
    }

    #[test]
    fn test_one_record_per_fund_sorted() {
        let holdings = vec![
            holding("F2", AssetClass::Bond, 1, 1.0),
            holding("F1", AssetClass::Bond, 1, 1.0),
            holding("F2", AssetClass::Cash, 1, 1.0),
        ];
        let records = calculate_servicing_cost(&holdings, &ServicingRates::default());
        let funds: Vec<&str> = records.iter().map(|r| r.fund_id.as_str()).collect();
        assert_eq!(funds, vec!["F1", "F2"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(calculate_servicing_cost(&[], &ServicingRates::default()).is_empty());
        assert!(servicing_buckets(&[], &ServicingRates::default()).is_empty());
    }

    #[test]
    fn test_empty_rate_table_charges_nothing() {
        let holdings = vec![holding("F1", AssetClass::Equity, 1000, 100.0)];
        let records = calculate_servicing_cost(&holdings, &ServicingRates::empty());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].servicing_cost, 0.0);
    }

    #[test]
    fn test_custom_rate_overrides_default() {
        let rates = ServicingRates::default()
            .with_rate(AssetClass::Equity, 0.01)
            .unwrap();
        let holdings = vec![holding("F1", AssetClass::Equity, 1000, 100.0)];
        let records = calculate_servicing_cost(&holdings, &rates);
        assert_relative_eq!(records[0].servicing_cost, 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_fund_id_passes_through() {
        let holdings = vec![holding("", AssetClass::Cash, 10, 10.0)];
        let records = calculate_servicing_cost(&holdings, &ServicingRates::default());
        assert_eq!(records[0].fund_id, "");
        assert_relative_eq!(records[0].servicing_cost, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_aggregator_trait() {
        let aggregator = ServicingCostAggregator::default();
        let holdings = vec![holding("F1", AssetClass::Equity, 1000, 100.0)];
        assert_eq!(aggregator.name(), "servicing");
        assert_eq!(
            aggregator.aggregate(&holdings),
            calculate_servicing_cost(&holdings, aggregator.rates())
        );
    }
}
