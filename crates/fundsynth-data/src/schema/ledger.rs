//! Fund-level ledger records: trades, budgets and corporate actions.

use super::AssetClass;
use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TradeAction {
    /// Purchase
    Buy,
    /// Disposal
    Sell,
}

/// A single trade booked by a fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Fund that booked the trade.
    pub fund_id: String,
    /// Unique trade identifier.
    pub transaction_id: Uuid,
    /// Asset class traded.
    pub asset_type: AssetClass,
    /// Trade date.
    pub trade_date: NaiveDate,
    /// Settlement date (T+2 calendar days).
    pub settlement_date: NaiveDate,
    /// Buy or sell.
    pub action: TradeAction,
    /// Units traded.
    pub quantity: u32,
    /// Unit price, 2 decimal places.
    pub price: f64,
    /// `quantity * price`, unrounded.
    pub value: f64,
}

impl Transaction {
    /// Settlement lag in calendar days.
    pub const SETTLEMENT_DAYS: i64 = 2;

    /// Create a trade; settlement date and value are derived.
    pub fn new(
        fund_id: impl Into<String>,
        transaction_id: Uuid,
        asset_type: AssetClass,
        trade_date: NaiveDate,
        action: TradeAction,
        quantity: u32,
        price: f64,
    ) -> Self {
        Self {
            fund_id: fund_id.into(),
            transaction_id,
            asset_type,
            trade_date,
            settlement_date: trade_date + chrono::Duration::days(Self::SETTLEMENT_DAYS),
            action,
            quantity,
            price,
            value: f64::from(quantity) * price,
        }
    }
}

/// Annual budget, expenses and income for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Fund identifier.
    pub fund_id: String,
    /// Calendar year.
    pub year: i32,
    /// Budgeted amount.
    pub budget: f64,
    /// Actual expenses.
    pub expenses: f64,
    /// Actual income.
    pub income: f64,
}

/// Kind of corporate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CorporateActionType {
    /// Cash dividend
    Dividend,
    /// Stock split
    Split,
    /// Merger
    Merger,
    /// Spin-off
    #[display("Spin-off")]
    #[serde(rename = "Spin-off")]
    SpinOff,
    /// Bonus issue
    #[display("Bonus Issue")]
    #[serde(rename = "Bonus Issue")]
    BonusIssue,
}

impl CorporateActionType {
    /// All action types.
    pub const ALL: [Self; 5] = [
        Self::Dividend,
        Self::Split,
        Self::Merger,
        Self::SpinOff,
        Self::BonusIssue,
    ];
}

/// A corporate action affecting a fund's holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateAction {
    /// Affected fund.
    pub fund_id: String,
    /// Unique action identifier.
    pub action_id: Uuid,
    /// Kind of action.
    pub action_type: CorporateActionType,
    /// Effective date.
    pub action_date: NaiveDate,
    /// Free-text description, at most 50 characters.
    pub description: String,
}
