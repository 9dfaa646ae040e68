//! Terminal rendering of datasets and cost output.

use super::data_pipeline::CostRun;
use clap::ValueEnum;
use fundsynth::data::{DataError, GeneratedData, PortfolioHolding, ToFrame};
use fundsynth::output::{
    CostReport, ExportError, ExportFormat, Exporter, ReportError, admin_frame, allocation_table,
    asset_allocation, servicing_frame,
};
use polars::prelude::*;

/// Output format for the `costs` and `allocation` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum TextFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// Pretty JSON
    Json,
    /// CSV (cost summary or allocation slices)
    Csv,
}

/// Error type for rendering.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RenderError {
    /// Frame conversion failed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Export serialization failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// Report serialization failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Render the first `rows` rows of a dataset as a table.
pub(crate) fn dataset_table(data: &GeneratedData, rows: usize) -> Result<String, RenderError> {
    let df = data.to_frame()?;
    let total = df.height();
    let mut output = format!("{} ({} rows)\n", data.dataset().title(), total);
    output.push_str(&df.head(Some(rows)).to_string());
    if rows < total {
        output.push_str(&format!("\n... {} more rows\n", total - rows));
    }
    Ok(output)
}

fn frame_section(title: &str, df: &DataFrame) -> String {
    format!("\n{title}\n{df}\n")
}

/// Render a cost run in the requested format.
pub(crate) fn cost_output(
    run: &CostRun,
    report: &CostReport,
    format: TextFormat,
) -> Result<String, RenderError> {
    match format {
        TextFormat::Text => {
            let mut output = String::new();
            output.push_str(&frame_section(
                "Servicing Costs",
                &servicing_frame(&run.servicing)?,
            ));
            output.push_str(&frame_section("Admin Costs", &admin_frame(&run.admin)?));
            output.push_str(&report.to_ascii_table());
            Ok(output)
        }
        TextFormat::Json => Ok(report.to_json()?),
        TextFormat::Csv => Ok(report.summary.export_to_string(ExportFormat::Csv)?),
    }
}

/// Render the asset allocation of the holdings.
pub(crate) fn allocation_output(
    holdings: &[PortfolioHolding],
    format: TextFormat,
) -> Result<String, RenderError> {
    let slices = asset_allocation(holdings);
    match format {
        TextFormat::Text => Ok(allocation_table(&slices)),
        TextFormat::Json => Ok(slices.export_to_string(ExportFormat::PrettyJson)?),
        TextFormat::Csv => Ok(slices.export_to_string(ExportFormat::Csv)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundsynth::AppConfig;
    use fundsynth::data::{AssetClass, Dataset, FundDataGenerator, SynthConfig};

    fn holdings() -> Vec<PortfolioHolding> {
        vec![
            PortfolioHolding::new("F1", AssetClass::Equity, "Acme", 1000, 100.0),
            PortfolioHolding::new("F2", AssetClass::Bond, "Gilt", 500, 100.0),
        ]
    }

    fn run() -> CostRun {
        CostRun::compute(&holdings(), &AppConfig::default())
    }

    #[test]
    fn test_cost_text_contains_all_sections() {
        let run = run();
        let text = cost_output(&run, &run.report(None), TextFormat::Text).unwrap();
        assert!(text.contains("Servicing Costs"));
        assert!(text.contains("Admin Costs"));
        assert!(text.contains("Cost Summary"));
    }

    #[test]
    fn test_cost_csv_is_summary() {
        let run = run();
        let csv = cost_output(&run, &run.report(None), TextFormat::Csv).unwrap();
        assert!(csv.starts_with("fund_id,servicing_cost,total_admin_cost,total_cost\n"));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_allocation_formats() {
        let holdings = holdings();
        assert!(allocation_output(&holdings, TextFormat::Text).unwrap().contains("Equity"));
        assert!(allocation_output(&holdings, TextFormat::Json).unwrap().contains("weight_pct"));
    }

    #[test]
    fn test_allocation_csv() {
        let csv = allocation_output(&holdings(), TextFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "asset_type,market_value,weight_pct");
        assert!(lines[1].starts_with("Equity,100000.0,"));
        assert!(lines[2].starts_with("Bond,50000.0,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_dataset_table_truncates() {
        let generator = FundDataGenerator::new(SynthConfig {
            num_funds: 2,
            ..SynthConfig::default()
        })
        .unwrap();
        let data = generator.generate(Dataset::Budget);
        let table = dataset_table(&data, 2).unwrap();
        assert!(table.starts_with("Budget"));
        assert!(table.contains("more rows"));
    }
}
