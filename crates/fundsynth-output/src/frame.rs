//! polars views of cost tables and summaries.

use crate::summary::{AllocationSlice, FundCostSummary};
use fundsynth_costs::{AdminCostRecord, ServicingCostRecord};
use fundsynth_data::Result;
use polars::prelude::*;

fn floats<T>(rows: &[T], f: impl Fn(&T) -> f64) -> Vec<f64> {
    rows.iter().map(f).collect()
}

fn fund_ids<T>(rows: &[T], f: impl Fn(&T) -> &str) -> Vec<String> {
    rows.iter().map(|r| f(r).to_string()).collect()
}

/// Servicing cost per fund as a DataFrame.
///
/// # Errors
///
/// Returns an error if polars rejects the columns.
pub fn servicing_frame(records: &[ServicingCostRecord]) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Column::new("fund_id".into(), fund_ids(records, |r| &r.fund_id)),
        Column::new(
            "servicing_cost".into(),
            floats(records, |r| r.servicing_cost),
        ),
    ])?)
}

/// Admin cost breakdown per fund as a DataFrame.
///
/// # Errors
///
/// Returns an error if polars rejects the columns.
pub fn admin_frame(records: &[AdminCostRecord]) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Column::new("fund_id".into(), fund_ids(records, |r| &r.fund_id)),
        Column::new("market_value".into(), floats(records, |r| r.market_value)),
        Column::new("accounting".into(), floats(records, |r| r.accounting)),
        Column::new("custody".into(), floats(records, |r| r.custody)),
        Column::new("ta".into(), floats(records, |r| r.ta)),
        Column::new(
            "total_admin_cost".into(),
            floats(records, |r| r.total_admin_cost),
        ),
    ])?)
}

/// Joined cost summary as a DataFrame.
///
/// # Errors
///
/// Returns an error if polars rejects the columns.
pub fn summary_frame(rows: &[FundCostSummary]) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Column::new("fund_id".into(), fund_ids(rows, |r| &r.fund_id)),
        Column::new("servicing_cost".into(), floats(rows, |r| r.servicing_cost)),
        Column::new(
            "total_admin_cost".into(),
            floats(rows, |r| r.total_admin_cost),
        ),
        Column::new("total_cost".into(), floats(rows, |r| r.total_cost)),
    ])?)
}

/// Asset allocation as a DataFrame.
///
/// # Errors
///
/// Returns an error if polars rejects the columns.
pub fn allocation_frame(slices: &[AllocationSlice]) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Column::new(
            "asset_type".into(),
            slices
                .iter()
                .map(|s| s.asset_type.to_string())
                .collect::<Vec<String>>(),
        ),
        Column::new("market_value".into(), floats(slices, |s| s.market_value)),
        Column::new("weight_pct".into(), floats(slices, |s| s.weight_pct)),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::asset_allocation;
    use fundsynth_costs::{AdminRates, calculate_admin_costs};
    use fundsynth_data::{AssetClass, PortfolioHolding};

    fn holdings() -> Vec<PortfolioHolding> {
        vec![
            PortfolioHolding::new("F1", AssetClass::Equity, "A", 10, 10.0),
            PortfolioHolding::new("F2", AssetClass::Cash, "B", 10, 10.0),
            PortfolioHolding::new("F2", AssetClass::Bond, "C", 10, 10.0),
        ]
    }

    #[test]
    fn test_admin_frame_shape() {
        let admin = calculate_admin_costs(&holdings(), &AdminRates::default());
        let df = admin_frame(&admin).unwrap();
        assert_eq!(df.shape(), (2, 6));
        assert_eq!(
            df.get_column_names_str(),
            vec!["fund_id", "market_value", "accounting", "custody", "ta", "total_admin_cost"]
        );
    }

    #[test]
    fn test_allocation_frame() {
        let df = allocation_frame(&asset_allocation(&holdings())).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_empty_frames() {
        assert_eq!(servicing_frame(&[]).unwrap().height(), 0);
        assert_eq!(summary_frame(&[]).unwrap().height(), 0);
    }
}
