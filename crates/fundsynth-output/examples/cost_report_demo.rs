//! Demonstration of cost aggregation and reporting in fundsynth-output.

use fundsynth_costs::{AdminRates, ServicingRates, calculate_admin_costs, calculate_servicing_cost};
use fundsynth_data::{AssetClass, FundDataGenerator, SynthConfig};
use fundsynth_output::{
    ExportFormat, Exporter, ReportBuilder, allocation_table, asset_allocation,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== fundsynth Cost Report Demo ===\n");

    let generator = FundDataGenerator::new(SynthConfig {
        num_funds: 5,
        ..SynthConfig::default()
    })?;
    let holdings = generator.portfolio();
    println!("Generated {} holdings for {} funds\n", holdings.len(), generator.fund_ids().len());

    // 1. Allocation across all funds
    println!("{}", allocation_table(&asset_allocation(&holdings)));

    // 2. Costs at default rates
    let servicing = calculate_servicing_cost(&holdings, &ServicingRates::default());
    let admin = calculate_admin_costs(&holdings, &AdminRates::default());
    let report = ReportBuilder::new()
        .as_of(generator.as_of())
        .servicing(servicing.clone())
        .admin(admin)
        .build();
    println!("{}", report.to_ascii_table());

    // 3. A heavier custody schedule and a new asset class
    let rates = ServicingRates::default().with_rate(AssetClass::parse("Infrastructure"), 0.0012)?;
    let servicing_custom = calculate_servicing_cost(&holdings, &rates);
    let admin_custom = calculate_admin_costs(&holdings, &AdminRates::new(1.0, 2.0, 0.3)?);
    let custom = ReportBuilder::new()
        .title("High Custody Schedule")
        .servicing(servicing_custom)
        .admin(admin_custom)
        .build();
    println!("{}", custom.to_markdown());

    // 4. CSV export
    println!("Servicing costs as CSV:");
    println!("{}", servicing.export_to_string(ExportFormat::Csv)?);

    Ok(())
}
