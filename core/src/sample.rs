//! Deterministic sample data for demos and tests.
//!
//! Produces the same three collections the bundled files hold. A share of
//! customers deliberately has no portfolio and a smaller share references
//! a risk profile that does not exist, so the outer join has work to do.

use crate::{
    customer::{
        CustomerRecord, Investment, PortfolioRecord, RiskProfileRecord, CLIENT_TYPE_INSTITUTIONAL,
        CLIENT_TYPE_PRIVATE,
    },
    dataset::RawDataSet,
    names,
    rng::{SampleRng, SampleStream},
};

pub const MISSING_PORTFOLIO_RATE: f64 = 0.10;
pub const UNKNOWN_RISK_PROFILE_RATE: f64 = 0.05;
pub const INSTITUTIONAL_RATE: f64 = 0.30;
pub const MAX_INVESTMENTS: u64 = 4;

/// Risk profiles shipped with every sample data set.
pub const RISK_PROFILES: &[(i64, &str)] = &[
    (1, "Conservative"),
    (2, "Moderate"),
    (3, "Balanced"),
    (4, "Growth"),
    (5, "Aggressive"),
];

const RESIDENCES: &[(&str, &str)] = &[
    ("Switzerland", "CHF"),
    ("Germany", "EUR"),
    ("France", "EUR"),
    ("Italy", "EUR"),
    ("Austria", "EUR"),
    ("United Kingdom", "GBP"),
    ("United States", "USD"),
];

const INVESTMENT_TYPES: &[&str] = &[
    "Equity",
    "Bonds",
    "Real Estate",
    "Commodities",
    "Cash",
    "Hedge Funds",
    "Private Equity",
];

pub struct SampleGenerator {
    seed: u64,
}

impl SampleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn generate(&self, count: usize) -> RawDataSet {
        let mut customer_rng = SampleRng::new(self.seed, SampleStream::Customers);
        let mut portfolio_rng = SampleRng::new(self.seed, SampleStream::Portfolios);

        let risk_profiles: Vec<RiskProfileRecord> = RISK_PROFILES
            .iter()
            .map(|(id, name)| RiskProfileRecord {
                id: *id,
                name: (*name).to_string(),
            })
            .collect();

        let mut customers = Vec::with_capacity(count);
        let mut portfolios = Vec::with_capacity(count);

        for i in 0..count {
            let client_id = (i + 1).to_string();
            let customer = self.generate_customer(&mut customer_rng, client_id.clone());

            if !portfolio_rng.chance(MISSING_PORTFOLIO_RATE) {
                portfolios.push(PortfolioRecord {
                    portfolio_id: client_id,
                    investments: self.generate_investments(&mut portfolio_rng, &customer.currency),
                });
            }
            customers.push(customer);
        }

        log::info!(
            "sample: seed={} generated {} customers, {} portfolios",
            self.seed,
            customers.len(),
            portfolios.len()
        );

        RawDataSet {
            customers,
            portfolios,
            risk_profiles,
        }
    }

    fn generate_customer(&self, rng: &mut SampleRng, client_id: String) -> CustomerRecord {
        let (residence, currency) = *rng.pick(RESIDENCES);
        let institutional = rng.chance(INSTITUTIONAL_RATE);
        let client_type = if institutional {
            CLIENT_TYPE_INSTITUTIONAL
        } else {
            CLIENT_TYPE_PRIVATE
        };
        let annual_income = if institutional {
            rng.pareto(250_000.0, 1.8)
        } else {
            rng.pareto(45_000.0, 2.5)
        };
        let risk_profile = if rng.chance(UNKNOWN_RISK_PROFILE_RATE) {
            RISK_PROFILES.len() as i64 + 1
        } else {
            rng.pick(RISK_PROFILES).0
        };

        CustomerRecord {
            client_id,
            first_name: names::first_name(rng).to_string(),
            last_name: names::last_name(rng).to_string(),
            annual_income: round_cents(annual_income),
            currency: currency.to_string(),
            residence: residence.to_string(),
            client_type: client_type.to_string(),
            risk_profile,
            portfolios: Vec::new(),
        }
    }

    fn generate_investments(&self, rng: &mut SampleRng, currency: &str) -> Vec<Investment> {
        let n = 1 + rng.next_u64_below(MAX_INVESTMENTS);
        (0..n)
            .map(|_| Investment {
                investment_type: rng.pick(INVESTMENT_TYPES).to_string(),
                amount: round_cents(rng.pareto(5_000.0, 1.6)),
                currency: currency.to_string(),
            })
            .collect()
    }
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
