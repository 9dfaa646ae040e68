//! Portfolio holdings generation.

use super::{FundDataGenerator, words};
use crate::schema::{AssetClass, Dataset, PortfolioHolding};
use rand::Rng;

impl FundDataGenerator {
    /// Generate portfolio holdings for every fund.
    ///
    /// Each fund gets a count drawn from `holdings_per_fund`; each holding
    /// draws its asset class uniformly from the seven known classes,
    /// quantity from 100..10000 and price from 10..500.
    pub fn portfolio(&self) -> Vec<PortfolioHolding> {
        let mut rng = self.rng(Dataset::Portfolio);
        let mut holdings = Vec::new();

        for fund_id in &self.fund_ids {
            let count = rng.gen_range(self.config.holdings_per_fund.clone());
            for _ in 0..count {
                let asset_type = words::pick(&mut rng, &AssetClass::KNOWN).clone();
                let asset_name = words::company(&mut rng);
                let quantity = rng.gen_range(100..10_000);
                let price = rng.gen_range(10.0..500.0);
                holdings.push(PortfolioHolding::new(
                    fund_id.as_str(),
                    asset_type,
                    asset_name,
                    quantity,
                    price,
                ));
            }
        }

        holdings
    }
}
