//! Seeded synthetic data source.
//!
//! [`FundDataGenerator`] fabricates every dataset in [`Dataset`] for a
//! fixed universe of funds (`FUND0001`, `FUND0002`, ...). Each dataset is
//! drawn from its own RNG stream derived from the configured seed, so a
//! dataset comes out identical whether it is generated alone or together
//! with the others.

mod investor;
mod ledger;
mod portfolio;
mod words;

use crate::error::{DataError, Result};
use crate::schema::{
    AmlRecord, BudgetRecord, CorporateAction, Dataset, InvestorFlow, InvestorRecord,
    PortfolioHolding, Transaction,
};
use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use uuid::Uuid;

/// Configuration for the synthetic data generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// RNG seed (default: 42)
    pub seed: u64,

    /// Number of funds in the universe (default: 200)
    pub num_funds: usize,

    /// Reference date for relative date windows (default: today, UTC)
    pub as_of: Option<NaiveDate>,

    /// Holdings per fund, half-open (default: 5..20)
    pub holdings_per_fund: Range<usize>,

    /// Trades per fund, half-open (default: 10..50)
    pub transactions_per_fund: Range<usize>,

    /// Investor flows per fund, half-open (default: 10..50)
    pub flows_per_fund: Range<usize>,

    /// First and last budget year, inclusive (default: 2023..=2025)
    pub budget_years: (i32, i32),

    /// Total corporate actions across all funds (default: 1000)
    pub corporate_actions: usize,

    /// Total AML records (default: 1000)
    pub aml_records: usize,

    /// Total investor register entries (default: 1500)
    pub register_entries: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            num_funds: 200,
            as_of: None,
            holdings_per_fund: 5..20,
            transactions_per_fund: 10..50,
            flows_per_fund: 10..50,
            budget_years: (2023, 2025),
            corporate_actions: 1000,
            aml_records: 1000,
            register_entries: 1500,
        }
    }
}

impl SynthConfig {
    /// Check that the configuration can generate data.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidConfig`] if there are no funds, a
    /// per-fund range is empty, or the budget years are inverted.
    pub fn validate(&self) -> Result<()> {
        if self.num_funds == 0 {
            return Err(DataError::InvalidConfig(
                "num_funds must be at least 1".to_string(),
            ));
        }
        if self.num_funds > 9999 {
            return Err(DataError::InvalidConfig(format!(
                "num_funds must be at most 9999, got {}",
                self.num_funds
            )));
        }

        for (name, range) in [
            ("holdings_per_fund", &self.holdings_per_fund),
            ("transactions_per_fund", &self.transactions_per_fund),
            ("flows_per_fund", &self.flows_per_fund),
        ] {
            if range.is_empty() {
                return Err(DataError::InvalidConfig(format!(
                    "{name} range {}..{} is empty",
                    range.start, range.end
                )));
            }
        }

        if self.budget_years.0 > self.budget_years.1 {
            return Err(DataError::InvalidConfig(format!(
                "budget_years {}..={} is inverted",
                self.budget_years.0, self.budget_years.1
            )));
        }

        Ok(())
    }
}

/// Deterministic generator for all fund-accounting datasets.
///
/// The generator holds no RNG state of its own: every call builds a fresh
/// RNG from the seed, so calls are repeatable and the generator can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct FundDataGenerator {
    config: SynthConfig,
    fund_ids: Vec<String>,
    as_of: NaiveDate,
}

impl FundDataGenerator {
    /// Create a generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`SynthConfig::validate`].
    pub fn new(config: SynthConfig) -> Result<Self> {
        config.validate()?;
        let fund_ids = (1..=config.num_funds).map(fund_id).collect();
        let as_of = config.as_of.unwrap_or_else(|| Utc::now().date_naive());

        Ok(Self {
            config,
            fund_ids,
            as_of,
        })
    }

    /// The configuration in use.
    pub const fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// All fund identifiers, in order.
    pub fn fund_ids(&self) -> &[String] {
        &self.fund_ids
    }

    /// Reference date for relative date windows.
    pub const fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Generate one dataset.
    pub fn generate(&self, dataset: Dataset) -> GeneratedData {
        let data = match dataset {
            Dataset::Portfolio => GeneratedData::Portfolio(self.portfolio()),
            Dataset::Transactions => GeneratedData::Transactions(self.transactions()),
            Dataset::Budget => GeneratedData::Budget(self.budgets()),
            Dataset::CorporateActions => {
                GeneratedData::CorporateActions(self.corporate_actions())
            }
            Dataset::InvestorFlows => GeneratedData::InvestorFlows(self.investor_flows()),
            Dataset::Aml => GeneratedData::Aml(self.aml_records()),
            Dataset::InvestorRegister => GeneratedData::InvestorRegister(self.investor_register()),
        };
        tracing::debug!(dataset = %dataset, rows = data.len(), "generated dataset");
        data
    }

    /// RNG stream for one dataset.
    fn rng(&self, dataset: Dataset) -> StdRng {
        let stream = Dataset::ALL
            .iter()
            .position(|d| *d == dataset)
            .unwrap_or_default() as u64;
        StdRng::seed_from_u64(
            self.config
                .seed
                .wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        )
    }

    /// A date uniformly within the last `days` days up to `as_of`.
    fn recent_date<R: Rng + ?Sized>(&self, rng: &mut R, days: i64) -> NaiveDate {
        self.as_of - Duration::days(rng.gen_range(0..=days))
    }
}

/// Fund identifier for a 1-based index (`FUND0001`).
pub fn fund_id(index: usize) -> String {
    format!("FUND{index:04}")
}

fn uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid()
}

fn uniform_2dp<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    crate::schema::round2(rng.gen_range(low..high))
}

/// One generated dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedData {
    /// Portfolio holdings
    Portfolio(Vec<PortfolioHolding>),
    /// Trades
    Transactions(Vec<Transaction>),
    /// Budgets
    Budget(Vec<BudgetRecord>),
    /// Corporate actions
    CorporateActions(Vec<CorporateAction>),
    /// Investor flows
    InvestorFlows(Vec<InvestorFlow>),
    /// AML records
    Aml(Vec<AmlRecord>),
    /// Investor register
    InvestorRegister(Vec<InvestorRecord>),
}

impl GeneratedData {
    /// Which dataset this is.
    pub const fn dataset(&self) -> Dataset {
        match self {
            Self::Portfolio(_) => Dataset::Portfolio,
            Self::Transactions(_) => Dataset::Transactions,
            Self::Budget(_) => Dataset::Budget,
            Self::CorporateActions(_) => Dataset::CorporateActions,
            Self::InvestorFlows(_) => Dataset::InvestorFlows,
            Self::Aml(_) => Dataset::Aml,
            Self::InvestorRegister(_) => Dataset::InvestorRegister,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Portfolio(rows) => rows.len(),
            Self::Transactions(rows) => rows.len(),
            Self::Budget(rows) => rows.len(),
            Self::CorporateActions(rows) => rows.len(),
            Self::InvestorFlows(rows) => rows.len(),
            Self::Aml(rows) => rows.len(),
            Self::InvestorRegister(rows) => rows.len(),
        }
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
