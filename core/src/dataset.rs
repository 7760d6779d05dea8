//! Loading the three record files and producing merged rows.
//!
//! Loading is fail-stop: if any file cannot be read or parsed, no rows
//! are produced for that attempt.

use crate::{
    config::{read_text, ViewerConfig, CUSTOMERS_FILE, PORTFOLIOS_FILE, RISK_PROFILES_FILE},
    customer::{CustomerRecord, PortfolioRecord, RiskProfileRecord},
    error::{DeskError, DeskResult},
    join::{join_records, MergedCustomer},
    tolerant::parse_tolerant,
};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// The raw collections, as decoded from their files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDataSet {
    pub customers: Vec<CustomerRecord>,
    pub portfolios: Vec<PortfolioRecord>,
    pub risk_profiles: Vec<RiskProfileRecord>,
}

impl RawDataSet {
    /// Decode the three collections from their JSON text.
    pub fn from_texts(customers: &str, portfolios: &str, risk_profiles: &str) -> DeskResult<Self> {
        Ok(Self {
            customers: parse_tolerant("customers", customers)?,
            portfolios: parse_tolerant("portfolios", portfolios)?,
            risk_profiles: parse_tolerant("risk profiles", risk_profiles)?,
        })
    }

    /// Read and decode the files named by `config`.
    pub fn load(config: &ViewerConfig) -> DeskResult<Self> {
        let raw = Self {
            customers: load_file(&config.customers_path())?,
            portfolios: load_file(&config.portfolios_path())?,
            risk_profiles: load_file(&config.risk_profiles_path())?,
        };
        log::info!(
            "load: {} customers, {} portfolios, {} risk profiles from {}",
            raw.customers.len(),
            raw.portfolios.len(),
            raw.risk_profiles.len(),
            config.data_dir.display()
        );
        Ok(raw)
    }

    /// Write the collections as pretty JSON under `dir`, using the default
    /// file names. Creates `dir` if needed.
    pub fn write_to(&self, dir: &Path) -> DeskResult<()> {
        std::fs::create_dir_all(dir).map_err(|source| DeskError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        write_file(&dir.join(CUSTOMERS_FILE), &self.customers)?;
        write_file(&dir.join(PORTFOLIOS_FILE), &self.portfolios)?;
        write_file(&dir.join(RISK_PROFILES_FILE), &self.risk_profiles)?;
        log::info!("wrote sample data to {}", dir.display());
        Ok(())
    }

    pub fn join(&self) -> Vec<MergedCustomer> {
        join_records(&self.customers, &self.portfolios, &self.risk_profiles)
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> DeskResult<T> {
    let content = read_text(path)?;
    parse_tolerant(&path.display().to_string(), &content)
}

fn write_file<T: Serialize>(path: &Path, value: &T) -> DeskResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| DeskError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load, decode and join in one step.
pub fn load_merged(config: &ViewerConfig) -> DeskResult<Vec<MergedCustomer>> {
    Ok(RawDataSet::load(config)?.join())
}
