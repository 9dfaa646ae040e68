//! Dataset catalogue.

use crate::error::DataError;
use derive_more::Display;
use std::str::FromStr;

/// The datasets fundsynth can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Dataset {
    /// Portfolio holdings
    #[display("portfolio")]
    Portfolio,
    /// Trades
    #[display("transactions")]
    Transactions,
    /// Budgets, expenses and income
    #[display("budget")]
    Budget,
    /// Corporate actions
    #[display("corporate-actions")]
    CorporateActions,
    /// Investor subscriptions and redemptions
    #[display("investor-flows")]
    InvestorFlows,
    /// AML screening results
    #[display("aml")]
    Aml,
    /// Investor register
    #[display("investor-register")]
    InvestorRegister,
}

impl Dataset {
    /// All datasets in display order.
    pub const ALL: [Self; 7] = [
        Self::Portfolio,
        Self::Transactions,
        Self::Budget,
        Self::CorporateActions,
        Self::InvestorFlows,
        Self::Aml,
        Self::InvestorRegister,
    ];

    /// Machine name, also used as the export file stem.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Transactions => "transactions",
            Self::Budget => "budget",
            Self::CorporateActions => "corporate-actions",
            Self::InvestorFlows => "investor-flows",
            Self::Aml => "aml",
            Self::InvestorRegister => "investor-register",
        }
    }

    /// Human-readable title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Portfolio => "Portfolio Data",
            Self::Transactions => "Transactions",
            Self::Budget => "Budgets, Expenses, Income",
            Self::CorporateActions => "Corporate Actions",
            Self::InvestorFlows => "Investor Flows",
            Self::Aml => "AML Data",
            Self::InvestorRegister => "Investor Register",
        }
    }

    /// Machine names of all datasets.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::name).collect()
    }
}

impl FromStr for Dataset {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|d| d.name() == normalized)
            .ok_or_else(|| DataError::UnknownDataset(s.to_string()))
    }
}
