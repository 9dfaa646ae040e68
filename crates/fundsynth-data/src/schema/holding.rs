//! Portfolio holdings.

use super::{AssetClass, round2};
use serde::{Deserialize, Serialize};

/// A quantity of one asset held by a fund.
///
/// `market_value` is always `round2(quantity * price)`. Fields are private
/// and deserialization goes through [`HoldingRow`], so every holding is
/// built by [`PortfolioHolding::new`]. A `market_value` in serialized input
/// is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HoldingRow")]
pub struct PortfolioHolding {
    fund_id: String,
    asset_type: AssetClass,
    asset_name: String,
    quantity: u32,
    price: f64,
    market_value: f64,
}

/// Serialized form of a holding as read from CSV or JSON.
///
/// Only the inputs to [`PortfolioHolding::new`]; any other column is
/// dropped.
#[derive(Debug, Deserialize)]
pub(crate) struct HoldingRow {
    fund_id: String,
    asset_type: String,
    #[serde(default)]
    asset_name: String,
    quantity: u32,
    price: f64,
}

impl From<HoldingRow> for PortfolioHolding {
    fn from(row: HoldingRow) -> Self {
        Self::new(
            row.fund_id,
            AssetClass::from(row.asset_type),
            row.asset_name,
            row.quantity,
            row.price,
        )
    }
}

impl PortfolioHolding {
    /// Create a new holding, computing its market value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fundsynth_data::{AssetClass, PortfolioHolding};
    ///
    /// let holding = PortfolioHolding::new("FUND0001", AssetClass::Equity, "Acme Corp", 150, 12.5);
    /// assert_eq!(holding.market_value(), 1875.0);
    /// ```
    pub fn new(
        fund_id: impl Into<String>,
        asset_type: AssetClass,
        asset_name: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> Self {
        let price = round2(price);
        Self {
            fund_id: fund_id.into(),
            asset_type,
            asset_name: asset_name.into(),
            quantity,
            price,
            market_value: round2(f64::from(quantity) * price),
        }
    }

    /// Returns a copy of this holding with the price multiplied by `factor`.
    ///
    /// Market value is recomputed from the new price.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.fund_id.clone(),
            self.asset_type.clone(),
            self.asset_name.clone(),
            self.quantity,
            self.price * factor,
        )
    }

    /// Owning fund identifier (many holdings per fund).
    pub fn fund_id(&self) -> &str {
        &self.fund_id
    }

    /// Asset class of the holding.
    pub const fn asset_type(&self) -> &AssetClass {
        &self.asset_type
    }

    /// Issuer or instrument name.
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    /// Number of units held.
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price, rounded to 2 decimal places.
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// `quantity * price`, rounded to 2 decimal places.
    pub const fn market_value(&self) -> f64 {
        self.market_value
    }
}
