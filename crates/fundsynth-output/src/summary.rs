//! Cross-fund summaries: asset allocation and total cost per fund.

use fundsynth_costs::{AdminCostRecord, ServicingCostRecord};
use fundsynth_data::{AssetClass, PortfolioHolding};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Share of total market value held in one asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Asset class.
    pub asset_type: AssetClass,

    /// Market value across all funds.
    pub market_value: f64,

    /// Percentage of the grand total (0 to 100).
    pub weight_pct: f64,
}

impl fmt::Display for AllocationSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} ({:.2}%)",
            self.asset_type, self.market_value, self.weight_pct
        )
    }
}

/// Market value per asset class across all funds.
///
/// Slices are sorted by market value, largest first, with ties broken by
/// label. When the total is zero every weight is zero.
pub fn asset_allocation(holdings: &[PortfolioHolding]) -> Vec<AllocationSlice> {
    let mut totals: HashMap<&AssetClass, f64> = HashMap::new();
    for holding in holdings {
        *totals.entry(holding.asset_type()).or_insert(0.0) += holding.market_value();
    }
    let grand_total: f64 = totals.values().sum();

    let mut slices: Vec<AllocationSlice> = totals
        .into_iter()
        .map(|(asset_type, market_value)| AllocationSlice {
            asset_type: asset_type.clone(),
            market_value,
            weight_pct: if grand_total == 0.0 {
                0.0
            } else {
                market_value / grand_total * 100.0
            },
        })
        .collect();

    slices.sort_by(|a, b| {
        b.market_value
            .total_cmp(&a.market_value)
            .then_with(|| a.asset_type.label().cmp(b.asset_type.label()))
    });
    slices
}

/// Render allocation slices as a fixed-width table.
pub fn allocation_table(slices: &[AllocationSlice]) -> String {
    let mut output = String::new();

    output.push_str("\nAsset Allocation\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>20} {:>12}\n",
        "Asset Type", "Market Value", "Weight"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for slice in slices {
        output.push_str(&format!(
            "{:<20} {:>20.2} {:>11.2}%\n",
            slice.asset_type, slice.market_value, slice.weight_pct
        ));
    }

    output.push_str(&"-".repeat(60));
    output.push('\n');
    let total: f64 = slices.iter().map(|s| s.market_value).sum();
    output.push_str(&format!("{:<20} {:>20.2}\n", "Total", total));

    output
}

/// Servicing and admin cost for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundCostSummary {
    /// Fund identifier.
    pub fund_id: String,

    /// Servicing cost.
    pub servicing_cost: f64,

    /// Total admin cost.
    pub total_admin_cost: f64,

    /// `servicing_cost + total_admin_cost`.
    pub total_cost: f64,
}

/// Join servicing and admin records by fund.
///
/// A fund present on only one side gets `0.0` for the other. Output is
/// sorted by fund id.
pub fn summarize_costs(
    servicing: &[ServicingCostRecord],
    admin: &[AdminCostRecord],
) -> Vec<FundCostSummary> {
    let mut joined: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for record in servicing {
        joined.entry(record.fund_id.as_str()).or_default().0 += record.servicing_cost;
    }
    for record in admin {
        joined.entry(record.fund_id.as_str()).or_default().1 += record.total_admin_cost;
    }

    joined
        .into_iter()
        .map(|(fund_id, (servicing_cost, total_admin_cost))| FundCostSummary {
            fund_id: fund_id.to_string(),
            servicing_cost,
            total_admin_cost,
            total_cost: servicing_cost + total_admin_cost,
        })
        .collect()
}
