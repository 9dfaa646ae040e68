//! Trades, budgets and corporate actions.

use super::{FundDataGenerator, uniform_2dp, uuid, words};
use crate::schema::{
    AssetClass, BudgetRecord, CorporateAction, CorporateActionType, Dataset, TradeAction,
    Transaction,
};
use rand::Rng;

const TWO_YEARS: i64 = 730;
const ONE_YEAR: i64 = 365;

impl FundDataGenerator {
    /// Generate trades for every fund over the last two years.
    pub fn transactions(&self) -> Vec<Transaction> {
        let mut rng = self.rng(Dataset::Transactions);
        let mut transactions = Vec::new();

        for fund_id in &self.fund_ids {
            let count = rng.gen_range(self.config.transactions_per_fund.clone());
            for _ in 0..count {
                let trade_date = self.recent_date(&mut rng, TWO_YEARS);
                let transaction_id = uuid(&mut rng);
                let asset_type = words::pick(&mut rng, &AssetClass::KNOWN).clone();
                let action = *words::pick(&mut rng, &[TradeAction::Buy, TradeAction::Sell]);
                let quantity = rng.gen_range(10..500);
                let price = uniform_2dp(&mut rng, 10.0, 300.0);
                transactions.push(Transaction::new(
                    fund_id.as_str(),
                    transaction_id,
                    asset_type,
                    trade_date,
                    action,
                    quantity,
                    price,
                ));
            }
        }

        transactions
    }

    /// Generate one budget row per fund per configured year.
    pub fn budgets(&self) -> Vec<BudgetRecord> {
        let mut rng = self.rng(Dataset::Budget);
        let (first_year, last_year) = self.config.budget_years;
        let mut budgets = Vec::new();

        for fund_id in &self.fund_ids {
            for year in first_year..=last_year {
                budgets.push(BudgetRecord {
                    fund_id: fund_id.clone(),
                    year,
                    budget: uniform_2dp(&mut rng, 1e6, 1e8),
                    expenses: uniform_2dp(&mut rng, 5e5, 9e7),
                    income: uniform_2dp(&mut rng, 5e5, 1e7),
                });
            }
        }

        budgets
    }

    /// Generate corporate actions over the last year, spread across funds.
    pub fn corporate_actions(&self) -> Vec<CorporateAction> {
        let mut rng = self.rng(Dataset::CorporateActions);

        (0..self.config.corporate_actions)
            .map(|_| CorporateAction {
                fund_id: words::pick(&mut rng, &self.fund_ids).clone(),
                action_id: uuid(&mut rng),
                action_type: *words::pick(&mut rng, &CorporateActionType::ALL),
                action_date: self.recent_date(&mut rng, ONE_YEAR),
                description: words::sentence(&mut rng, 50),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::SynthConfig;
    use chrono::{Duration, NaiveDate};

    fn generator() -> FundDataGenerator {
        FundDataGenerator::new(SynthConfig {
            num_funds: 10,
            as_of: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..SynthConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_transactions_dates_and_values() {
        let generator = generator();
        let as_of = generator.as_of();

        for tx in generator.transactions() {
            assert!(tx.trade_date <= as_of);
            assert!(tx.trade_date >= as_of - Duration::days(TWO_YEARS));
            assert_eq!(tx.settlement_date - tx.trade_date, Duration::days(2));
            assert!((10..500).contains(&tx.quantity));
            assert!((tx.value - f64::from(tx.quantity) * tx.price).abs() < 1e-9);
        }
    }

    #[test]
    fn test_budget_rows_per_fund() {
        let budgets = generator().budgets();
        assert_eq!(budgets.len(), 10 * 3);
        assert!(budgets.iter().all(|b| (2023..=2025).contains(&b.year)));
        assert!(
            budgets
                .iter()
                .all(|b| (1e6..1e8).contains(&b.budget) || b.budget == 1e8)
        );
    }

    #[test]
    fn test_corporate_actions() {
        let generator = generator();
        let actions = generator.corporate_actions();
        assert_eq!(actions.len(), 1000);
        for action in &actions {
            assert!(generator.fund_ids().contains(&action.fund_id));
            assert!(action.description.len() <= 50);
            assert!(action.action_date >= generator.as_of() - Duration::days(ONE_YEAR));
        }
    }
}
