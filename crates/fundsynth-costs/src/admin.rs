//! Admin cost aggregation.
//!
//! Admin fees are charged in basis points on each fund's total market value,
//! regardless of asset mix:
//!
//! ```text
//! accounting = mv × accounting_bps / 10 000
//! custody    = mv × custody_bps    / 10 000
//! ta         = mv × ta_bps         / 10 000
//! total      = accounting + custody + ta
//! ```

use crate::CostAggregator;
use crate::rates::AdminRates;
use fundsynth_data::PortfolioHolding;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Admin fee breakdown for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCostRecord {
    /// Fund identifier.
    pub fund_id: String,

    /// Total market value across all holdings of the fund.
    pub market_value: f64,

    /// Fund accounting fee.
    pub accounting: f64,

    /// Custody fee.
    pub custody: f64,

    /// Transfer-agency fee.
    pub ta: f64,

    /// `accounting + custody + ta`.
    pub total_admin_cost: f64,
}

impl AdminCostRecord {
    /// Price a fund's total market value with the given rates.
    pub fn from_market_value(
        fund_id: impl Into<String>,
        market_value: f64,
        rates: &AdminRates,
    ) -> Self {
        let accounting = AdminRates::fee(market_value, rates.accounting_bps);
        let custody = AdminRates::fee(market_value, rates.custody_bps);
        let ta = AdminRates::fee(market_value, rates.ta_bps);

        Self {
            fund_id: fund_id.into(),
            market_value,
            accounting,
            custody,
            ta,
            total_admin_cost: accounting + custody + ta,
        }
    }
}

/// Admin cost breakdown per fund.
///
/// Returns one record per distinct `fund_id` in `holdings`, sorted by fund id.
/// A fund whose market value sums to zero gets an all-zero record.
///
/// # Examples
///
/// ```
/// use fundsynth_costs::{AdminRates, calculate_admin_costs};
/// use fundsynth_data::{AssetClass, PortfolioHolding};
///
/// let holdings = vec![PortfolioHolding::new("F1", AssetClass::Cash, "MMF", 1000, 100.0)];
/// let costs = calculate_admin_costs(&holdings, &AdminRates::default());
///
/// assert!((costs[0].accounting - 10.0).abs() < 1e-9);
/// assert!((costs[0].total_admin_cost - 18.0).abs() < 1e-9);
/// ```
pub fn calculate_admin_costs(
    holdings: &[PortfolioHolding],
    rates: &AdminRates,
) -> Vec<AdminCostRecord> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for holding in holdings {
        *totals.entry(holding.fund_id()).or_insert(0.0) += holding.market_value();
    }

    let mut records: Vec<AdminCostRecord> = totals
        .into_iter()
        .map(|(fund_id, market_value)| {
            AdminCostRecord::from_market_value(fund_id, market_value, rates)
        })
        .collect();
    records.sort_by(|a, b| a.fund_id.cmp(&b.fund_id));

    tracing::debug!(
        holdings = holdings.len(),
        funds = records.len(),
        total_bps = rates.total_bps(),
        "computed admin costs"
    );
    records
}

/// [`CostAggregator`] for admin costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminCostAggregator {
    rates: AdminRates,
}

impl AdminCostAggregator {
    /// Create an aggregator with the given rates.
    pub const fn new(rates: AdminRates) -> Self {
        Self { rates }
    }

    /// The rates in use.
    pub const fn rates(&self) -> &AdminRates {
        &self.rates
    }
}

impl CostAggregator for AdminCostAggregator {
    type Output = AdminCostRecord;

    fn name(&self) -> &str {
        "admin"
    }

    fn aggregate(&self, holdings: &[PortfolioHolding]) -> Vec<AdminCostRecord> {
        calculate_admin_costs(holdings, &self.rates)
    }
}
