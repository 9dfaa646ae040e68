//! Generate, load and cost pipeline.
//!
//! Holdings come either from the seeded generator or from a CSV file; both
//! aggregators run against the same holdings with the configured rates.

use fundsynth::AppConfig;
use fundsynth::costs::{
    AdminCostAggregator, AdminCostRecord, CostAggregator, ServicingCostAggregator,
    ServicingCostRecord,
};
use fundsynth::data::loader::read_holdings_csv;
use fundsynth::data::{DataError, Dataset, FundDataGenerator, PortfolioHolding};
use fundsynth::output::{CostReport, ExportError, ExportFormat, Exporter, ReportBuilder};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DataPipelineError {
    /// Generation, loading or framing failed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Writing an export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the holdings for a cost run came from.
#[derive(Debug, Clone)]
pub(crate) enum HoldingsSource {
    /// Synthetic portfolio from the configured generator.
    Generated(FundDataGenerator),
    /// Holdings read from a CSV file.
    File(PathBuf),
}

impl HoldingsSource {
    /// Pick the source from an optional `--input` path.
    pub(crate) fn resolve(
        input: Option<PathBuf>,
        config: &AppConfig,
    ) -> Result<Self, DataPipelineError> {
        Ok(match input {
            Some(path) => Self::File(path),
            None => Self::Generated(FundDataGenerator::new(config.synth.clone())?),
        })
    }

    /// Load or generate the holdings.
    pub(crate) fn holdings(&self) -> Result<Vec<PortfolioHolding>, DataPipelineError> {
        match self {
            Self::Generated(generator) => Ok(generator.portfolio()),
            Self::File(path) => Ok(read_holdings_csv(path)?),
        }
    }

    /// Valuation date, known only for generated holdings.
    pub(crate) fn as_of(&self) -> Option<chrono::NaiveDate> {
        match self {
            Self::Generated(generator) => Some(generator.as_of()),
            Self::File(_) => None,
        }
    }
}

/// Both cost tables computed from one set of holdings.
#[derive(Debug, Clone)]
pub(crate) struct CostRun {
    pub(crate) servicing: Vec<ServicingCostRecord>,
    pub(crate) admin: Vec<AdminCostRecord>,
}

impl CostRun {
    /// Run both aggregators over the holdings.
    pub(crate) fn compute(holdings: &[PortfolioHolding], config: &AppConfig) -> Self {
        let started = Instant::now();
        let servicing = timed(
            &ServicingCostAggregator::new(config.servicing.clone()),
            holdings,
        );
        let admin = timed(&AdminCostAggregator::new(config.admin), holdings);
        tracing::debug!(
            holdings = holdings.len(),
            funds = admin.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "cost run finished"
        );

        Self { servicing, admin }
    }

    /// Build a report from this run.
    pub(crate) fn report(&self, as_of: Option<chrono::NaiveDate>) -> CostReport {
        let builder = ReportBuilder::new()
            .servicing(self.servicing.clone())
            .admin(self.admin.clone());
        match as_of {
            Some(date) => builder.as_of(date).build(),
            None => builder.build(),
        }
    }
}

fn timed<A: CostAggregator>(aggregator: &A, holdings: &[PortfolioHolding]) -> Vec<A::Output> {
    let started = Instant::now();
    let rows = aggregator.aggregate(holdings);
    tracing::debug!(
        aggregator = aggregator.name(),
        rows = rows.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "aggregated"
    );
    rows
}

/// Path of a dataset file inside `dir`.
pub(crate) fn dataset_path(dir: &Path, dataset: Dataset, format: ExportFormat) -> PathBuf {
    dir.join(format!("{}.{}", dataset.name(), format.extension()))
}

/// Generate one dataset and write it to `dir`.
pub(crate) fn write_dataset(
    generator: &FundDataGenerator,
    dataset: Dataset,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf, DataPipelineError> {
    std::fs::create_dir_all(dir)?;
    let data = generator.generate(dataset);
    let path = dataset_path(dir, dataset, format);
    data.export_to_file(&path, format)?;
    Ok(path)
}

/// Generate every dataset into `dir`, ticking `progress` once per dataset.
pub(crate) fn write_all_datasets(
    generator: &FundDataGenerator,
    dir: &Path,
    format: ExportFormat,
    progress: Option<&ProgressBar>,
) -> Result<Vec<PathBuf>, DataPipelineError> {
    let mut written = Vec::with_capacity(Dataset::ALL.len());
    for dataset in Dataset::ALL {
        if let Some(pb) = progress {
            pb.set_message(dataset.title());
        }
        written.push(write_dataset(generator, dataset, dir, format)?);
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundsynth::data::SynthConfig;

    fn config() -> AppConfig {
        AppConfig {
            synth: SynthConfig {
                num_funds: 3,
                ..SynthConfig::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_generated_cost_run_covers_all_funds() {
        let config = config();
        let source = HoldingsSource::resolve(None, &config).unwrap();
        assert!(source.as_of().is_some());

        let run = CostRun::compute(&source.holdings().unwrap(), &config);
        assert_eq!(run.servicing.len(), 3);
        assert_eq!(run.admin.len(), 3);
        assert_eq!(run.report(None).summary.len(), 3);
    }

    #[test]
    fn test_dataset_path() {
        let path = dataset_path(Path::new("out"), Dataset::CorporateActions, ExportFormat::PrettyJson);
        assert_eq!(path, Path::new("out/corporate-actions.json"));
    }

    #[test]
    fn test_write_all_datasets() {
        let dir = std::env::temp_dir().join("fundsynth_pipeline_test");
        let generator = FundDataGenerator::new(config().synth).unwrap();

        let written = write_all_datasets(&generator, &dir, ExportFormat::Csv, None).unwrap();
        assert_eq!(written.len(), Dataset::ALL.len());
        assert!(written.iter().all(|p| p.is_file()));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_input_file() {
        let source = HoldingsSource::File(PathBuf::from("/nonexistent/holdings.csv"));
        assert!(source.holdings().is_err());
    }
}
