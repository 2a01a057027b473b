use std::path::PathBuf;
use thiserror::Error;

pub type GateInResult<T> = std::result::Result<T, GateInError>;

#[derive(Debug, Error)]
pub enum GateInError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Failed to fetch dataset from {source_name}: {message}")]
    Fetch {
        source_name: String,
        message: String,
    },
    #[error("Record {position} (style number {style_number}) has no division")]
    MissingDivision {
        position: usize,
        style_number: String,
    },
    #[error("Record {position} (style number {style_number}) has a non-string division: {value}")]
    InvalidDivision {
        position: usize,
        style_number: String,
        value: String,
    },
    #[error("Invalid gzip header: {}", path.display())]
    InvalidGzipHeader { path: PathBuf },
    #[error("Output directory does not exist: {}", path.display())]
    MissingOutputDir { path: PathBuf },
}

impl GateInError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[macro_export]
macro_rules! gatein_error {
    ($($arg:tt)*) => {
        $crate::error::GateInError::message(format!($($arg)*))
    };
}
