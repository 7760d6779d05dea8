use crate::{
    error::{DeskError, DeskResult},
    i18n::Locale,
    table::DEFAULT_PAGE_SIZE,
    theme::ThemeMode,
    tolerant::parse_tolerant,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CUSTOMERS_FILE: &str = "data.json";
pub const PORTFOLIOS_FILE: &str = "portfolio.json";
pub const RISK_PROFILES_FILE: &str = "riskProfiles.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub data_dir: PathBuf,
    pub customers_file: String,
    pub portfolios_file: String,
    pub risk_profiles_file: String,
    pub page_size: usize,
    pub locale: Locale,
    pub theme: ThemeMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            customers_file: CUSTOMERS_FILE.into(),
            portfolios_file: PORTFOLIOS_FILE.into(),
            risk_profiles_file: RISK_PROFILES_FILE.into(),
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::En,
            theme: ThemeMode::Light,
        }
    }
}

impl ViewerConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> DeskResult<Self> {
        let path = path.as_ref();
        let content = read_text(path)?;
        parse_tolerant(&path.display().to_string(), &content)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    pub fn portfolios_path(&self) -> PathBuf {
        self.data_dir.join(&self.portfolios_file)
    }

    pub fn risk_profiles_path(&self) -> PathBuf {
        self.data_dir.join(&self.risk_profiles_file)
    }
}

pub(crate) fn read_text(path: &Path) -> DeskResult<String> {
    std::fs::read_to_string(path).map_err(|source| DeskError::Io {
        path: path.display().to_string(),
        source,
    })
}
