//! Shared primitive types used across the viewer.

/// Identity of a customer. Portfolios reference it through `portfolioId`.
pub type ClientId = String;

/// Identity of a risk profile. Customers reference it through `riskProfile`.
pub type RiskProfileId = i64;
