//! Integration tests for cost reporting over generated data.

use approx::assert_relative_eq;
use fundsynth_costs::{AdminRates, ServicingRates, calculate_admin_costs, calculate_servicing_cost};
use fundsynth_data::{Dataset, FundDataGenerator, SynthConfig, ToFrame};
use fundsynth_output::{
    ExportFormat, Exporter, ReportBuilder, asset_allocation, servicing_frame, summarize_costs,
};

fn generator() -> FundDataGenerator {
    FundDataGenerator::new(SynthConfig {
        seed: 11,
        num_funds: 8,
        ..SynthConfig::default()
    })
    .unwrap()
}

#[test]
fn test_full_cost_workflow() {
    let holdings = generator().portfolio();
    let servicing = calculate_servicing_cost(&holdings, &ServicingRates::default());
    let admin = calculate_admin_costs(&holdings, &AdminRates::default());

    // Summary totals agree with the inputs
    let summary = summarize_costs(&servicing, &admin);
    assert_eq!(summary.len(), 8);
    let servicing_total: f64 = servicing.iter().map(|r| r.servicing_cost).sum();
    let summary_total: f64 = summary.iter().map(|r| r.servicing_cost).sum();
    assert_relative_eq!(servicing_total, summary_total, max_relative = 1e-12);

    let report = ReportBuilder::new()
        .title("Generated Funds")
        .servicing(servicing.clone())
        .admin(admin)
        .build();
    let ascii = report.to_ascii_table();
    assert!(ascii.contains("FUND0001"));
    assert!(ascii.contains("FUND0008"));

    let markdown = report.to_markdown();
    assert!(markdown.contains("# Generated Funds"));
    assert!(markdown.contains("| Fund | Servicing | Admin | Total |"));

    let df = servicing_frame(&servicing).unwrap();
    assert_eq!(df.height(), 8);
}

#[test]
fn test_allocation_sums_to_hundred() {
    let holdings = generator().portfolio();
    let slices = asset_allocation(&holdings);
    assert!(slices.len() <= 7);

    let total_weight: f64 = slices.iter().map(|s| s.weight_pct).sum();
    assert_relative_eq!(total_weight, 100.0, epsilon = 1e-9);
    assert!(
        slices
            .windows(2)
            .all(|w| w[0].market_value >= w[1].market_value)
    );
}

#[test]
fn test_every_dataset_exports_and_frames() {
    let generator = generator();
    for dataset in Dataset::ALL {
        let data = generator.generate(dataset);

        let text = data.export_to_string(ExportFormat::Csv).unwrap();
        // register addresses span two lines, so count parsed records
        let rows = csv::Reader::from_reader(text.as_bytes()).records().count();
        assert_eq!(rows, data.len(), "{dataset}");

        let json = data.export_to_string(ExportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(data.len()));

        assert_eq!(data.to_frame().unwrap().height(), data.len());
    }
}
