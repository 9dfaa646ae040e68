//! fundsynth CLI binary.
//!
//! Generates the synthetic fund-accounting datasets and runs the servicing
//! and admin cost aggregation over them.

mod integration;

use clap::{ArgAction, Parser, Subcommand};
use fundsynth::AppConfig;
use fundsynth::costs::AdminRates;
use fundsynth::data::{Dataset, FundDataGenerator};
use fundsynth::output::ExportFormat;
use indicatif::{ProgressBar, ProgressStyle};
use integration::config_loader::load_config;
use integration::data_pipeline::{CostRun, HoldingsSource, write_all_datasets, write_dataset};
use integration::render::{TextFormat, allocation_output, cost_output, dataset_table};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "fundsynth")]
#[command(about = "Synthetic fund-accounting data and cost allocation", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/fundsynth/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the generator seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Override the number of funds
    #[arg(long, global = true)]
    funds: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one generated dataset as a table
    Show {
        /// Dataset name (portfolio, transactions, budget, corporate-actions,
        /// investor-flows, aml, investor-register)
        dataset: Dataset,

        /// Number of rows to print
        #[arg(long, default_value = "10")]
        rows: usize,
    },

    /// Write generated datasets to files
    Generate {
        /// Dataset to write
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        dataset: Option<Dataset>,

        /// Write every dataset
        #[arg(long)]
        all: bool,

        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// File format (csv, json or pretty-json)
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
    },

    /// Compute servicing and admin costs per fund
    Costs {
        /// Holdings CSV (default: generated portfolio)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Fund accounting fee in basis points
        #[arg(long)]
        accounting_bps: Option<f64>,

        /// Custody fee in basis points
        #[arg(long)]
        custody_bps: Option<f64>,

        /// Transfer-agency fee in basis points
        #[arg(long)]
        ta_bps: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,

        /// Write output to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show market value by asset class across all funds
    Allocation {
        /// Holdings CSV (default: generated portfolio)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr so tables on stdout stay clean. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.synth.seed = seed;
    }
    if let Some(funds) = cli.funds {
        config.synth.num_funds = funds;
    }
    config.validate()?;

    match cli.command {
        Commands::Show { dataset, rows } => {
            let generator = FundDataGenerator::new(config.synth)?;
            println!("{}", dataset_table(&generator.generate(dataset), rows)?);
        }
        Commands::Generate {
            dataset,
            all,
            out,
            format,
        } => {
            let generator = FundDataGenerator::new(config.synth)?;
            match dataset {
                Some(dataset) if !all => {
                    let path = write_dataset(&generator, dataset, &out, format)?;
                    println!("Wrote {}", path.display());
                }
                _ => generate_all(&generator, &out, format)?,
            }
        }
        Commands::Costs {
            input,
            accounting_bps,
            custody_bps,
            ta_bps,
            format,
            out,
        } => {
            config.admin = override_admin(config.admin, accounting_bps, custody_bps, ta_bps)?;
            let source = HoldingsSource::resolve(input, &config)?;
            let run = CostRun::compute(&source.holdings()?, &config);
            let report = run.report(source.as_of());
            emit(&cost_output(&run, &report, format)?, out.as_deref())?;
        }
        Commands::Allocation { input, format } => {
            let source = HoldingsSource::resolve(input, &config)?;
            println!("{}", allocation_output(&source.holdings()?, format)?);
        }
    }

    Ok(())
}

fn override_admin(
    rates: AdminRates,
    accounting_bps: Option<f64>,
    custody_bps: Option<f64>,
    ta_bps: Option<f64>,
) -> Result<AdminRates, fundsynth::costs::RateError> {
    AdminRates::new(
        accounting_bps.unwrap_or(rates.accounting_bps),
        custody_bps.unwrap_or(rates.custody_bps),
        ta_bps.unwrap_or(rates.ta_bps),
    )
}

fn generate_all(
    generator: &FundDataGenerator,
    out: &Path,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(Dataset::ALL.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓░"),
    );

    match write_all_datasets(generator, out, format, Some(&pb)) {
        Ok(paths) => {
            pb.finish_with_message(format!("Wrote {} files to {}", paths.len(), out.display()));
            Ok(())
        }
        Err(e) => {
            pb.finish_with_message("Failed!");
            Err(e.into())
        }
    }
}

fn emit(content: &str, out: Option<&Path>) -> Result<(), std::io::Error> {
    match out {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), "wrote cost output");
            println!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_costs_with_overrides() {
        let cli = Cli::try_parse_from([
            "fundsynth",
            "--seed",
            "7",
            "costs",
            "--custody-bps",
            "0.8",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Commands::Costs {
                custody_bps,
                format,
                ..
            } => {
                assert_eq!(custody_bps, Some(0.8));
                assert_eq!(format, TextFormat::Json);
            }
            _ => panic!("expected costs"),
        }
    }

    #[test]
    fn test_parse_generate_requires_target() {
        assert!(Cli::try_parse_from(["fundsynth", "generate"]).is_err());
        assert!(Cli::try_parse_from(["fundsynth", "generate", "aml", "--all"]).is_err());

        let cli = Cli::try_parse_from([
            "fundsynth",
            "generate",
            "corporate_actions",
            "--format",
            "pretty-json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                dataset, format, ..
            } => {
                assert_eq!(dataset, Some(Dataset::CorporateActions));
                assert_eq!(format, ExportFormat::PrettyJson);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_override_admin_validates() {
        let rates = override_admin(AdminRates::default(), None, Some(2.0), None).unwrap();
        assert_eq!(rates.custody_bps, 2.0);
        assert_eq!(rates.accounting_bps, 1.0);
        assert!(override_admin(AdminRates::default(), Some(-1.0), None, None).is_err());
    }
}
