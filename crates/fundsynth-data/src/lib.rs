#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fundsynth/fundsynth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod frame;
pub mod loader;
pub mod schema;
pub mod synth;

pub use error::{DataError, Result};
pub use frame::ToFrame;
pub use schema::{
    AmlRecord, AssetClass, BudgetRecord, CorporateAction, CorporateActionType, Dataset, FlagReason,
    FlowType, InvestorFlow, InvestorRecord, PortfolioHolding, TradeAction, Transaction,
};
pub use synth::{FundDataGenerator, GeneratedData, SynthConfig};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
