//! Investor-side records: capital flows, AML screening and the register.

use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of an investor capital flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FlowType {
    /// Money in
    Subscription,
    /// Money out
    Redemption,
}

/// A subscription or redemption by an investor in a fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorFlow {
    /// Fund receiving or paying the flow.
    pub fund_id: String,
    /// Investor identifier.
    pub investor_id: Uuid,
    /// Subscription or redemption.
    pub flow_type: FlowType,
    /// Value date.
    pub flow_date: NaiveDate,
    /// Amount, 2 decimal places.
    pub amount: f64,
}

/// Reason an AML screen raised a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FlagReason {
    /// No reason recorded
    None,
    /// Investor resides in a high-risk jurisdiction
    #[display("High-risk country")]
    #[serde(rename = "High-risk country")]
    HighRiskCountry,
    /// Unusually large transaction
    #[display("Large transaction")]
    #[serde(rename = "Large transaction")]
    LargeTransaction,
    /// Politically exposed person
    #[display("PEP")]
    #[serde(rename = "PEP")]
    Pep,
}

impl FlagReason {
    /// All reasons, including [`FlagReason::None`].
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::HighRiskCountry,
        Self::LargeTransaction,
        Self::Pep,
    ];
}

/// Result of screening one investor transaction.
///
/// `flagged` and `flag_reason` come from separate screens and are not
/// required to agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmlRecord {
    /// Investor identifier.
    pub investor_id: Uuid,
    /// Investor full name.
    pub name: String,
    /// Country of residence.
    pub country: String,
    /// Screened amount, 2 decimal places.
    pub transaction_amount: f64,
    /// Whether the transaction was flagged.
    pub flagged: bool,
    /// Reason attached by the rules screen.
    pub flag_reason: FlagReason,
}

/// An entry in the investor register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorRecord {
    /// Investor identifier.
    pub investor_id: Uuid,
    /// Full name.
    pub name: String,
    /// Contact e-mail.
    pub email: String,
    /// Postal address (may span lines).
    pub address: String,
    /// Country of residence.
    pub country: String,
    /// Date the investor was registered.
    pub registered_date: NaiveDate,
}
