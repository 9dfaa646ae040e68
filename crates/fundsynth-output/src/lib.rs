#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fundsynth/fundsynth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod frame;
pub mod report;
pub mod summary;

pub use export::{ExportError, ExportFormat, Exporter};
pub use frame::{admin_frame, allocation_frame, servicing_frame, summary_frame};
pub use report::{CostReport, ReportBuilder, ReportError};
pub use summary::{
    AllocationSlice, FundCostSummary, allocation_table, asset_allocation, summarize_costs,
};
