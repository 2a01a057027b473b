use super::readers::open_dataset_reader;
use crate::{core::record::RawRecord, error::GateInError, utils::util::Result};
use std::path::{Path, PathBuf};

/// Where the catalog comes from. Implementations return the complete dataset,
/// unfiltered and unsorted, or a [`GateInError::Fetch`].
pub trait DatasetSource {
    fn name(&self) -> String;
    fn fetch_all(&self) -> Result<Vec<RawRecord>>;
}

/// A dataset stored as a JSON array of flat objects, optionally gzip compressed.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn fetch_error(&self, error: impl std::fmt::Display) -> GateInError {
        GateInError::Fetch {
            source_name: self.name(),
            message: error.to_string(),
        }
    }
}

impl DatasetSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_all(&self) -> Result<Vec<RawRecord>> {
        let reader = open_dataset_reader(&self.path).map_err(|e| self.fetch_error(e))?;
        let records: Vec<RawRecord> =
            serde_json::from_reader(reader).map_err(|e| self.fetch_error(e))?;
        log::debug!("Fetched {} records from {}", records.len(), self.name());
        Ok(records)
    }
}

/// A dataset already resident in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<RawRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl DatasetSource for InMemorySource {
    fn name(&self) -> String {
        "memory".to_string()
    }

    fn fetch_all(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}
