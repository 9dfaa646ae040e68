//! Typed records for every fund-accounting dataset.
//!
//! Field names double as CSV column names and polars column names, so they
//! must stay stable.

pub mod asset;
pub mod dataset;
pub mod holding;
pub mod investor;
pub mod ledger;

pub use asset::AssetClass;
pub use dataset::Dataset;
pub use holding::PortfolioHolding;
pub use investor::{AmlRecord, FlagReason, FlowType, InvestorFlow, InvestorRecord};
pub use ledger::{BudgetRecord, CorporateAction, CorporateActionType, TradeAction, Transaction};

/// Round to 2 decimal places (cents).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
