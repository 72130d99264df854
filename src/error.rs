use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Unknown cadence: {0} (expected monthly, semi-annual or annual)")]
    UnknownCadence(String),

    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Unknown credit: {0}")]
    UnknownCredit(String),

    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("{what} index {index} out of range (have {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
