//! Free-text row filter.
//!
//! A row is kept when one of its text fields, or the name of one of its
//! named sub-records, contains the filter text case-insensitively.
//! Numbers and investment lists are not searched.

use crate::join::MergedCustomer;

/// A searchable view of one field of a merged row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    /// A sub-record exposing a display `name`.
    Named(&'a str),
    List(usize),
    Absent,
}

impl MergedCustomer {
    /// Every field of the row, in declaration order.
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); 10] {
        let c = &self.customer;
        [
            ("clientId", FieldValue::Text(&c.client_id)),
            ("firstName", FieldValue::Text(&c.first_name)),
            ("lastName", FieldValue::Text(&c.last_name)),
            ("riskProfile", FieldValue::Number(c.risk_profile as f64)),
            ("annualIncome", FieldValue::Number(c.annual_income)),
            ("currency", FieldValue::Text(&c.currency)),
            ("residence", FieldValue::Text(&c.residence)),
            ("clientType", FieldValue::Text(&c.client_type)),
            ("portfolios", FieldValue::List(c.portfolios.len())),
            (
                "riskProfileDetails",
                match self.risk_profile_name() {
                    Some(name) => FieldValue::Named(name),
                    None => FieldValue::Absent,
                },
            ),
        ]
    }

    /// True when the row survives a filter with the already-lowercased `needle`.
    fn matches_lowered(&self, needle: &str) -> bool {
        self.fields().iter().any(|(_, value)| match value {
            FieldValue::Text(s) | FieldValue::Named(s) => s.to_lowercase().contains(needle),
            FieldValue::Number(_) | FieldValue::List(_) | FieldValue::Absent => false,
        })
    }

    pub fn matches_filter(&self, text: &str) -> bool {
        text.is_empty() || self.matches_lowered(&text.to_lowercase())
    }
}

/// Rows matching `text`, in input order. Empty text keeps everything.
pub fn filter_rows<'a>(rows: &'a [MergedCustomer], text: &str) -> Vec<&'a MergedCustomer> {
    if text.is_empty() {
        return rows.iter().collect();
    }
    let needle = text.to_lowercase();
    rows.iter().filter(|r| r.matches_lowered(&needle)).collect()
}

/// Owning variant of [`filter_rows`].
pub fn filter_rows_owned(rows: Vec<MergedCustomer>, text: &str) -> Vec<MergedCustomer> {
    if text.is_empty() {
        return rows;
    }
    let needle = text.to_lowercase();
    rows.into_iter().filter(|r| r.matches_lowered(&needle)).collect()
}
