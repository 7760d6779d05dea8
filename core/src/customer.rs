//! Raw record types as they appear in the bundled JSON files.

use crate::types::{ClientId, RiskProfileId};
use serde::{Deserialize, Serialize};

pub const CLIENT_TYPE_PRIVATE: &str = "private";
pub const CLIENT_TYPE_INSTITUTIONAL: &str = "institutional";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub investment_type: String,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub client_id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub annual_income: f64,
    pub currency: String,
    pub residence: String,
    pub client_type: String, // private | institutional
    pub risk_profile: RiskProfileId,
    /// Filled in by the join; raw files normally omit it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub portfolios: Vec<Investment>,
}

impl CustomerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn client_kind(&self) -> ClientKind {
        ClientKind::parse(&self.client_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    /// Equal to the owning customer's `clientId`.
    pub portfolio_id: ClientId,
    #[serde(default)]
    pub investments: Vec<Investment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfileRecord {
    pub id: RiskProfileId,
    pub name: String,
}

/// Interpretation of the free-form `clientType` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Private,
    Institutional,
    Other,
}

impl ClientKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            CLIENT_TYPE_PRIVATE => Self::Private,
            CLIENT_TYPE_INSTITUTIONAL => Self::Institutional,
            _ => Self::Other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Private => "🔒",
            Self::Institutional | Self::Other => "🛒",
        }
    }
}
