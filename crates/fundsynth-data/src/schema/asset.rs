//! Asset class labels.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Asset class of a holding or transaction.
///
/// The seven known classes are matched exactly against their labels. Any
/// other label is kept verbatim in [`AssetClass::Other`] so that data from
/// outside sources never fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetClass {
    /// Listed equity
    Equity,
    /// Fixed income
    Bond,
    /// Direct real estate
    RealEstate,
    /// Private equity
    PrivateEquity,
    /// Commodities
    Commodities,
    /// Cash and equivalents
    Cash,
    /// Crypto assets
    Crypto,
    /// Any label outside the known set
    Other(String),
}

impl AssetClass {
    /// The known asset classes, in the order the generator draws from.
    pub const KNOWN: [Self; 7] = [
        Self::Equity,
        Self::Bond,
        Self::RealEstate,
        Self::PrivateEquity,
        Self::Commodities,
        Self::Cash,
        Self::Crypto,
    ];

    /// Returns the display label (e.g. `"Real Estate"`).
    pub fn label(&self) -> &str {
        match self {
            Self::Equity => "Equity",
            Self::Bond => "Bond",
            Self::RealEstate => "Real Estate",
            Self::PrivateEquity => "Private Equity",
            Self::Commodities => "Commodities",
            Self::Cash => "Cash",
            Self::Crypto => "Crypto",
            Self::Other(label) => label,
        }
    }

    /// Parse a label. Unrecognized labels become [`AssetClass::Other`].
    pub fn parse(label: &str) -> Self {
        match label {
            "Equity" => Self::Equity,
            "Bond" => Self::Bond,
            "Real Estate" => Self::RealEstate,
            "Private Equity" => Self::PrivateEquity,
            "Commodities" => Self::Commodities,
            "Cash" => Self::Cash,
            "Crypto" => Self::Crypto,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this is one of the seven known classes.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for AssetClass {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for AssetClass {
    fn from(label: String) -> Self {
        match Self::parse(&label) {
            Self::Other(_) => Self::Other(label),
            known => known,
        }
    }
}

impl From<AssetClass> for String {
    fn from(asset: AssetClass) -> Self {
        match asset {
            AssetClass::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}
