use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Cannot parse {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown column '{id}'")]
    UnknownColumn { id: String },

    #[error("Column '{id}' cannot be sorted")]
    ColumnNotSortable { id: String },

    #[error("Invalid page size {size}: expected one of {allowed:?}")]
    InvalidPageSize { size: usize, allowed: &'static [usize] },

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("Invalid colour '{0}': expected #rrggbb or #rgb")]
    InvalidColor(String),

    #[error("Customer '{client_id}' not found")]
    CustomerNotFound { client_id: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
