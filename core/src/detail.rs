//! Per-customer portfolio detail view.

use crate::{
    format::format_currency,
    i18n::{translate, Locale},
    join::MergedCustomer,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioDetail {
    pub client_id: String,
    pub title: String,
    pub lines: Vec<String>,
}

impl PortfolioDetail {
    pub fn for_customer(row: &MergedCustomer, locale: Locale) -> Self {
        let c = &row.customer;
        let title = format!(
            "{} {}'s {}",
            c.first_name,
            c.last_name,
            translate(locale, "Portfolios")
        );
        let type_label = translate(locale, "Investment Type");
        let amount_label = translate(locale, "Amount");
        let lines = row
            .portfolios()
            .iter()
            .map(|inv| {
                format!(
                    "{type_label}: {} | {amount_label}: {}",
                    inv.investment_type,
                    format_currency(inv.amount, &inv.currency)
                )
            })
            .collect();
        Self {
            client_id: c.client_id.clone(),
            title,
            lines,
        }
    }
}
