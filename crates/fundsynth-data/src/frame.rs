//! Conversion of record slices into polars DataFrames.
//!
//! Column names match the record field names. Date columns are built as
//! ISO strings and cast to `Date`.

use crate::error::Result;
use crate::schema::{
    AmlRecord, BudgetRecord, CorporateAction, InvestorFlow, InvestorRecord, PortfolioHolding,
    Transaction,
};
use crate::synth::GeneratedData;
use polars::prelude::*;

/// Types that can be rendered as a polars DataFrame.
pub trait ToFrame {
    /// Build a DataFrame with one row per record.
    ///
    /// # Errors
    ///
    /// Returns an error if polars rejects the columns.
    fn to_frame(&self) -> Result<DataFrame>;
}

/// Cast ISO-8601 string columns to the polars `Date` type.
///
/// # Errors
///
/// Returns an error if a column is missing or cannot be cast.
pub fn cast_dates(df: DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let casts: Vec<Expr> = columns
        .iter()
        .map(|c| col(*c).cast(DataType::Date))
        .collect();
    Ok(df.lazy().with_columns(casts).collect()?)
}

fn strings<T>(rows: &[T], f: impl Fn(&T) -> String) -> Vec<String> {
    rows.iter().map(f).collect()
}

impl ToFrame for [PortfolioHolding] {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(DataFrame::new(vec![
            Column::new("fund_id".into(), strings(self, |h| h.fund_id().to_string())),
            Column::new("asset_type".into(), strings(self, |h| h.asset_type().to_string())),
            Column::new("asset_name".into(), strings(self, |h| h.asset_name().to_string())),
            Column::new(
                "quantity".into(),
                self.iter().map(PortfolioHolding::quantity).collect::<Vec<u32>>(),
            ),
            Column::new(
                "price".into(),
                self.iter().map(PortfolioHolding::price).collect::<Vec<f64>>(),
            ),
            Column::new(
                "market_value".into(),
                self.iter().map(PortfolioHolding::market_value).collect::<Vec<f64>>(),
            ),
        ])?)
    }
}

impl ToFrame for [Transaction] {
    fn to_frame(&self) -> Result<DataFrame> {
        let df = DataFrame::new(vec![
            Column::new("fund_id".into(), strings(self, |t| t.fund_id.clone())),
            Column::new(
                "transaction_id".into(),
                strings(self, |t| t.transaction_id.to_string()),
            ),
            Column::new("asset_type".into(), strings(self, |t| t.asset_type.to_string())),
            Column::new("trade_date".into(), strings(self, |t| t.trade_date.to_string())),
            Column::new(
                "settlement_date".into(),
                strings(self, |t| t.settlement_date.to_string()),
            ),
            Column::new("action".into(), strings(self, |t| t.action.to_string())),
            Column::new(
                "quantity".into(),
                self.iter().map(|t| t.quantity).collect::<Vec<u32>>(),
            ),
            Column::new(
                "price".into(),
                self.iter().map(|t| t.price).collect::<Vec<f64>>(),
            ),
            Column::new(
                "value".into(),
                self.iter().map(|t| t.value).collect::<Vec<f64>>(),
            ),
        ])?;
        cast_dates(df, &["trade_date", "settlement_date"])
    }
}

impl ToFrame for [BudgetRecord] {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(DataFrame::new(vec![
            Column::new("fund_id".into(), strings(self, |b| b.fund_id.clone())),
            Column::new(
                "year".into(),
                self.iter().map(|b| b.year).collect::<Vec<i32>>(),
            ),
            Column::new(
                "budget".into(),
                self.iter().map(|b| b.budget).collect::<Vec<f64>>(),
            ),
            Column::new(
                "expenses".into(),
                self.iter().map(|b| b.expenses).collect::<Vec<f64>>(),
            ),
            Column::new(
                "income".into(),
                self.iter().map(|b| b.income).collect::<Vec<f64>>(),
            ),
        ])?)
    }
}

impl ToFrame for [CorporateAction] {
    fn to_frame(&self) -> Result<DataFrame> {
        let df = DataFrame::new(vec![
            Column::new("fund_id".into(), strings(self, |a| a.fund_id.clone())),
            Column::new("action_id".into(), strings(self, |a| a.action_id.to_string())),
            Column::new("action_type".into(), strings(self, |a| a.action_type.to_string())),
            Column::new("action_date".into(), strings(self, |a| a.action_date.to_string())),
            Column::new("description".into(), strings(self, |a| a.description.clone())),
        ])?;
        cast_dates(df, &["action_date"])
    }
}

impl ToFrame for [InvestorFlow] {
    fn to_frame(&self) -> Result<DataFrame> {
        let df = DataFrame::new(vec![
            Column::new("fund_id".into(), strings(self, |f| f.fund_id.clone())),
            Column::new("investor_id".into(), strings(self, |f| f.investor_id.to_string())),
            Column::new("flow_type".into(), strings(self, |f| f.flow_type.to_string())),
            Column::new("flow_date".into(), strings(self, |f| f.flow_date.to_string())),
            Column::new(
                "amount".into(),
                self.iter().map(|f| f.amount).collect::<Vec<f64>>(),
            ),
        ])?;
        cast_dates(df, &["flow_date"])
    }
}

impl ToFrame for [AmlRecord] {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(DataFrame::new(vec![
            Column::new("investor_id".into(), strings(self, |r| r.investor_id.to_string())),
            Column::new("name".into(), strings(self, |r| r.name.clone())),
            Column::new("country".into(), strings(self, |r| r.country.clone())),
            Column::new(
                "transaction_amount".into(),
                self.iter().map(|r| r.transaction_amount).collect::<Vec<f64>>(),
            ),
            Column::new(
                "flagged".into(),
                self.iter().map(|r| r.flagged).collect::<Vec<bool>>(),
            ),
            Column::new("flag_reason".into(), strings(self, |r| r.flag_reason.to_string())),
        ])?)
    }
}

impl ToFrame for [InvestorRecord] {
    fn to_frame(&self) -> Result<DataFrame> {
        let df = DataFrame::new(vec![
            Column::new("investor_id".into(), strings(self, |r| r.investor_id.to_string())),
            Column::new("name".into(), strings(self, |r| r.name.clone())),
            Column::new("email".into(), strings(self, |r| r.email.clone())),
            Column::new("address".into(), strings(self, |r| r.address.clone())),
            Column::new("country".into(), strings(self, |r| r.country.clone())),
            Column::new(
                "registered_date".into(),
                strings(self, |r| r.registered_date.to_string()),
            ),
        ])?;
        cast_dates(df, &["registered_date"])
    }
}

impl ToFrame for GeneratedData {
    fn to_frame(&self) -> Result<DataFrame> {
        match self {
            Self::Portfolio(rows) => rows.to_frame(),
            Self::Transactions(rows) => rows.to_frame(),
            Self::Budget(rows) => rows.to_frame(),
            Self::CorporateActions(rows) => rows.to_frame(),
            Self::InvestorFlows(rows) => rows.to_frame(),
            Self::Aml(rows) => rows.to_frame(),
            Self::InvestorRegister(rows) => rows.to_frame(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AssetClass, Dataset};
    use crate::synth::{FundDataGenerator, SynthConfig};

    #[test]
    fn test_holdings_frame_columns() {
        let holdings = vec![
            PortfolioHolding::new("F1", AssetClass::Equity, "Acme", 10, 5.0),
            PortfolioHolding::new("F2", AssetClass::Other("Art".into()), "Vase", 1, 99.0),
        ];
        let df = holdings.to_frame().unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(
            df.get_column_names_str(),
            vec![
                "fund_id",
                "asset_type",
                "asset_name",
                "quantity",
                "price",
                "market_value"
            ]
        );
    }

    #[test]
    fn test_date_columns_are_dates() {
        let generator = FundDataGenerator::new(SynthConfig {
            num_funds: 2,
            ..SynthConfig::default()
        })
        .unwrap();
        let df = generator.generate(Dataset::Transactions).to_frame().unwrap();

        assert_eq!(df.column("trade_date").unwrap().dtype(), &DataType::Date);
        assert_eq!(
            df.column("settlement_date").unwrap().dtype(),
            &DataType::Date
        );
    }

    #[test]
    fn test_every_dataset_converts() {
        let generator = FundDataGenerator::new(SynthConfig {
            num_funds: 2,
            corporate_actions: 5,
            aml_records: 5,
            register_entries: 5,
            ..SynthConfig::default()
        })
        .unwrap();

        for dataset in Dataset::ALL {
            let data = generator.generate(dataset);
            let df = data.to_frame().unwrap();
            assert_eq!(df.height(), data.len(), "{dataset}");
        }
    }
}
