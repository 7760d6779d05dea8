//! English and French UI labels.
//!
//! Lookup falls back to English, then to the key itself.

use crate::error::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    fn catalog(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::Fr => FR,
        }
    }
}

impl FromStr for Locale {
    type Err = DeskError;

    fn from_str(s: &str) -> DeskResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            other => Err(DeskError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn translate(locale: Locale, key: &str) -> &str {
    lookup(locale.catalog(), key)
        .or_else(|| lookup(Locale::En.catalog(), key))
        .unwrap_or(key)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    ("Full Name", "Full Name"),
    ("Risk Profile", "Risk Profile"),
    ("Annual Income", "Annual Income"),
    ("Residence", "Residence"),
    ("Client Type", "Client Type"),
    ("Investment Type", "Investment Type"),
    ("Amount", "Amount"),
    ("Portfolios", "Portfolios"),
    ("Filter table...", "Filter table..."),
    ("View Portfolios", "View Portfolios"),
    ("Show", "Show"),
    ("of", "of"),
    ("Rows", "Rows"),
    ("Close", "Close"),
];

// Keys missing here fall back to English.
const FR: &[(&str, &str)] = &[
    ("Full Name", "Nom Complet"),
    ("Risk Profile", "Profil de Risque"),
    ("Annual Income", "Revenu Annuel"),
    ("Residence", "Résidence"),
    ("Client Type", "Type de Client"),
    ("Investment Type", "Type d'Investissement"),
    ("Amount", "Montant"),
    ("Portfolios", "Portfolios"),
    ("Filter table...", "Filtrer la table"),
];
