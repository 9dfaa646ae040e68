//! Cost report generation.

use crate::summary::{FundCostSummary, summarize_costs};
use chrono::{DateTime, NaiveDate, Utc};
use fundsynth_costs::{AdminCostRecord, ServicingCostRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Servicing, admin and combined costs for a set of funds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReport {
    /// Report title.
    pub title: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Date the holdings were valued at, if known.
    pub as_of: Option<NaiveDate>,

    /// Servicing cost per fund.
    pub servicing: Vec<ServicingCostRecord>,

    /// Admin cost breakdown per fund.
    pub admin: Vec<AdminCostRecord>,

    /// Servicing and admin joined per fund.
    pub summary: Vec<FundCostSummary>,
}

impl CostReport {
    /// Create a new report; the summary is derived from the two inputs.
    pub fn new(
        title: String,
        as_of: Option<NaiveDate>,
        servicing: Vec<ServicingCostRecord>,
        admin: Vec<AdminCostRecord>,
    ) -> Self {
        let summary = summarize_costs(&servicing, &admin);
        Self {
            title,
            timestamp: Utc::now(),
            as_of,
            servicing,
            admin,
            summary,
        }
    }

    /// Sum of servicing cost across funds.
    pub fn total_servicing(&self) -> f64 {
        self.summary.iter().map(|s| s.servicing_cost).sum()
    }

    /// Sum of admin cost across funds.
    pub fn total_admin(&self) -> f64 {
        self.summary.iter().map(|s| s.total_admin_cost).sum()
    }

    /// Sum of all costs across funds.
    pub fn total_cost(&self) -> f64 {
        self.summary.iter().map(|s| s.total_cost).sum()
    }

    /// Total market value covered by the admin breakdown.
    pub fn total_market_value(&self) -> f64 {
        self.admin.iter().map(|a| a.market_value).sum()
    }

    fn header_line(&self) -> String {
        match self.as_of {
            Some(date) => format!("{} (as of {})", self.title, date),
            None => self.title.clone(),
        }
    }

    /// Format the report as fixed-width tables.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", self.header_line()));
        output.push_str(&format!("Number of Funds: {}\n", self.summary.len()));

        output.push_str("\nAdmin Costs\n");
        output.push_str(&"=".repeat(96));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>20} {:>14} {:>14} {:>14} {:>16}\n",
            "Fund", "Market Value", "Accounting", "Custody", "TA", "Total Admin"
        ));
        output.push_str(&"-".repeat(96));
        output.push('\n');
        for record in &self.admin {
            output.push_str(&format!(
                "{:<12} {:>20.2} {:>14.2} {:>14.2} {:>14.2} {:>16.2}\n",
                record.fund_id,
                record.market_value,
                record.accounting,
                record.custody,
                record.ta,
                record.total_admin_cost
            ));
        }
        output.push_str(&"=".repeat(96));
        output.push('\n');

        output.push_str("\nCost Summary\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>16} {:>16} {:>16}\n",
            "Fund", "Servicing", "Admin", "Total"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');
        for row in &self.summary {
            output.push_str(&format!(
                "{:<12} {:>16.2} {:>16.2} {:>16.2}\n",
                row.fund_id, row.servicing_cost, row.total_admin_cost, row.total_cost
            ));
        }
        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>16.2} {:>16.2} {:>16.2}\n",
            "Total",
            self.total_servicing(),
            self.total_admin(),
            self.total_cost()
        ));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        output
    }

    /// Format the report as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.title));
        if let Some(date) = self.as_of {
            output.push_str(&format!("**As of:** {date}\n\n"));
        }
        output.push_str(&format!("**Number of Funds:** {}\n\n", self.summary.len()));

        output.push_str("## Cost Summary\n\n");
        output.push_str("| Fund | Servicing | Admin | Total |\n");
        output.push_str("|------|-----------|-------|-------|\n");
        for row in &self.summary {
            output.push_str(&format!(
                "| {} | {:.2} | {:.2} | {:.2} |\n",
                row.fund_id, row.servicing_cost, row.total_admin_cost, row.total_cost
            ));
        }
        output.push('\n');

        output.push_str("## Totals\n\n");
        output.push_str(&format!(
            "- **Market Value:** {:.2}\n",
            self.total_market_value()
        ));
        output.push_str(&format!("- **Servicing:** {:.2}\n", self.total_servicing()));
        output.push_str(&format!("- **Admin:** {:.2}\n", self.total_admin()));
        output.push_str(&format!("- **Total:** {:.2}\n", self.total_cost()));

        output
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        std::fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), "wrote cost report");
        Ok(())
    }
}

/// Builder for creating cost reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    title: Option<String>,
    as_of: Option<NaiveDate>,
    servicing: Vec<ServicingCostRecord>,
    admin: Vec<AdminCostRecord>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the valuation date.
    pub const fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Set the servicing costs.
    pub fn servicing(mut self, records: Vec<ServicingCostRecord>) -> Self {
        self.servicing = records;
        self
    }

    /// Set the admin costs.
    pub fn admin(mut self, records: Vec<AdminCostRecord>) -> Self {
        self.admin = records;
        self
    }

    /// Build the report.
    pub fn build(self) -> CostReport {
        CostReport::new(
            self.title
                .unwrap_or_else(|| "Fund Servicing & Admin Costs".to_string()),
            self.as_of,
            self.servicing,
            self.admin,
        )
    }
}
