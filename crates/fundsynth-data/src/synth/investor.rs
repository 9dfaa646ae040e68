//! Investor flows, AML screening results and the investor register.

use super::{FundDataGenerator, uniform_2dp, uuid, words};
use crate::schema::{AmlRecord, Dataset, FlagReason, FlowType, InvestorFlow, InvestorRecord};
use rand::Rng;

const TWO_YEARS: i64 = 730;
const THREE_YEARS: i64 = 1095;

/// Probability that a screened transaction is flagged.
const FLAG_PROBABILITY: f64 = 0.05;

/// Probability that the rules screen attaches a reason.
const REASON_PROBABILITY: f64 = 0.05;

impl FundDataGenerator {
    /// Generate subscriptions and redemptions for every fund.
    pub fn investor_flows(&self) -> Vec<InvestorFlow> {
        let mut rng = self.rng(Dataset::InvestorFlows);
        let mut flows = Vec::new();

        for fund_id in &self.fund_ids {
            let count = rng.gen_range(self.config.flows_per_fund.clone());
            for _ in 0..count {
                flows.push(InvestorFlow {
                    fund_id: fund_id.clone(),
                    investor_id: uuid(&mut rng),
                    flow_type: *words::pick(
                        &mut rng,
                        &[FlowType::Subscription, FlowType::Redemption],
                    ),
                    flow_date: self.recent_date(&mut rng, TWO_YEARS),
                    amount: uniform_2dp(&mut rng, 1e4, 1e6),
                });
            }
        }

        flows
    }

    /// Generate AML screening results.
    ///
    /// The flag and the reason are drawn independently: a record may be
    /// flagged with reason `None`, or carry a reason without being flagged.
    pub fn aml_records(&self) -> Vec<AmlRecord> {
        let mut rng = self.rng(Dataset::Aml);

        (0..self.config.aml_records)
            .map(|_| {
                let investor_id = uuid(&mut rng);
                let name = words::person_name(&mut rng);
                let country = words::country(&mut rng);
                let transaction_amount = uniform_2dp(&mut rng, 1e3, 1e6);
                let flagged = rng.gen_bool(FLAG_PROBABILITY);
                let flag_reason = if rng.gen_bool(REASON_PROBABILITY) {
                    *words::pick(&mut rng, &FlagReason::ALL)
                } else {
                    FlagReason::None
                };

                AmlRecord {
                    investor_id,
                    name,
                    country,
                    transaction_amount,
                    flagged,
                    flag_reason,
                }
            })
            .collect()
    }

    /// Generate the investor register.
    pub fn investor_register(&self) -> Vec<InvestorRecord> {
        let mut rng = self.rng(Dataset::InvestorRegister);

        (0..self.config.register_entries)
            .map(|_| InvestorRecord {
                investor_id: uuid(&mut rng),
                name: words::person_name(&mut rng),
                email: words::email(&mut rng),
                address: words::address(&mut rng),
                country: words::country(&mut rng),
                registered_date: self.recent_date(&mut rng, THREE_YEARS),
            })
            .collect()
    }
}
