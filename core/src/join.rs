//! Left-outer join of customers against portfolios and risk profiles.
//!
//! RULE: the join never fails. A customer without a matching portfolio
//! gets an empty investment list; one without a matching risk profile
//! gets no risk profile details.

use crate::{
    customer::{CustomerRecord, Investment, PortfolioRecord, RiskProfileRecord},
    types::RiskProfileId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// A customer enriched with its resolved portfolio and risk profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedCustomer {
    #[serde(flatten)]
    pub customer: CustomerRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_profile_details: Option<RiskProfileRecord>,
}

impl MergedCustomer {
    pub fn client_id(&self) -> &str {
        &self.customer.client_id
    }

    pub fn portfolios(&self) -> &[Investment] {
        &self.customer.portfolios
    }

    pub fn risk_profile_name(&self) -> Option<&str> {
        self.risk_profile_details.as_ref().map(|r| r.name.as_str())
    }
}

/// Merge the three collections, keeping the order and count of `customers`.
///
/// When several portfolios (or risk profiles) share a key, the first one
/// in input order wins.
pub fn join_records(
    customers: &[CustomerRecord],
    portfolios: &[PortfolioRecord],
    risk_profiles: &[RiskProfileRecord],
) -> Vec<MergedCustomer> {
    let portfolio_index = first_by_key(portfolios, |p| p.portfolio_id.as_str(), "portfolio");
    let risk_index: HashMap<RiskProfileId, &RiskProfileRecord> =
        first_by_key(risk_profiles, |r| r.id, "risk profile");

    let mut unmatched_portfolios = 0usize;
    let mut unmatched_profiles = 0usize;

    let merged: Vec<MergedCustomer> = customers
        .iter()
        .map(|c| {
            let investments = match portfolio_index.get(c.client_id.as_str()) {
                Some(p) => p.investments.clone(),
                None => {
                    unmatched_portfolios += 1;
                    log::debug!("join: no portfolio for client {}", c.client_id);
                    Vec::new()
                }
            };
            let risk_profile_details = risk_index.get(&c.risk_profile).map(|r| (*r).clone());
            if risk_profile_details.is_none() {
                unmatched_profiles += 1;
                log::debug!(
                    "join: no risk profile {} for client {}",
                    c.risk_profile,
                    c.client_id
                );
            }
            MergedCustomer {
                customer: CustomerRecord {
                    portfolios: investments,
                    ..c.clone()
                },
                risk_profile_details,
            }
        })
        .collect();

    log::info!(
        "join: merged {} customers ({} without portfolio, {} without risk profile)",
        merged.len(),
        unmatched_portfolios,
        unmatched_profiles
    );
    merged
}

fn first_by_key<'a, T, K>(
    records: &'a [T],
    key: impl Fn(&'a T) -> K,
    what: &str,
) -> HashMap<K, &'a T>
where
    K: Eq + Hash + Display,
{
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        let k = key(record);
        if index.contains_key(&k) {
            log::debug!("join: duplicate {what} key {k} ignored");
            continue;
        }
        index.insert(k, record);
    }
    index
}
