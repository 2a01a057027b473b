use crate::{
    constants::{EXPORT_FILENAME, EXPORT_HEADERS, EXPORT_MIME_TYPE},
    core::{record::Record, sorter::OrderedCollection},
    error::GateInError,
    utils::util::Result,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const EXPORT_COLUMNS: usize = EXPORT_HEADERS.len();

/// Header plus one row per record, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: [&'static str; EXPORT_COLUMNS],
    pub rows: Vec<[String; EXPORT_COLUMNS]>,
}

impl ExportTable {
    pub fn from_records(ordered: &OrderedCollection, placeholder_image_url: &str) -> Self {
        let rows = ordered
            .iter()
            .map(|record| export_row(record, placeholder_image_url))
            .collect();
        Self {
            headers: EXPORT_HEADERS,
            rows,
        }
    }

    /// Serializes as CSV. Fields containing commas, quotes or newlines are quoted.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|error| crate::gatein_error!("Failed to finish CSV export: {}", error.error()))
    }
}

fn export_row(record: &Record, placeholder_image_url: &str) -> [String; EXPORT_COLUMNS] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    [
        text(&record.product_reference),
        record.image_or(placeholder_image_url).to_string(),
        text(&record.style_number),
        text(&record.colour),
        text(&record.product_type),
        text(&record.order_qty),
        text(&record.store_launch_week),
        record
            .gate_date
            .as_ref()
            .map(|gate_date| gate_date.raw().to_string())
            .unwrap_or_default(),
        text(&record.current_status),
    ]
}

/// Serialized export ready to hand to a [`FileSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedTable {
    pub filename: String,
    pub mime_type: String,
    pub content: Vec<u8>,
    pub row_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Ready(SerializedTable),
    /// Nothing to export; no file should be produced.
    Skipped,
}

/// Projects the ordered collection into the `GateIn_Options.csv` export.
///
/// An empty collection is not an error: a warning is logged and
/// [`ExportOutcome::Skipped`] returned.
pub fn export_collection(
    ordered: &OrderedCollection,
    placeholder_image_url: &str,
) -> Result<ExportOutcome> {
    if ordered.is_empty() {
        log::warn!("No data available to export.");
        return Ok(ExportOutcome::Skipped);
    }

    let table = ExportTable::from_records(ordered, placeholder_image_url);
    let content = table.to_csv()?;
    log::debug!(
        "Exporter: serialized {} rows ({} bytes)",
        table.rows.len(),
        content.len()
    );
    Ok(ExportOutcome::Ready(SerializedTable {
        filename: EXPORT_FILENAME.to_string(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        content,
        row_count: table.rows.len(),
    }))
}

/// Persists an export somewhere a user can pick it up.
pub trait FileSink {
    fn save(&self, filename: &str, content: &[u8], mime_type: &str) -> Result<PathBuf>;
}

/// Writes exports into an existing directory, replacing any previous file.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn save(&self, filename: &str, content: &[u8], mime_type: &str) -> Result<PathBuf> {
        if !self.dir.is_dir() {
            return Err(GateInError::MissingOutputDir {
                path: self.dir.clone(),
            });
        }
        let path = self.dir.join(filename);
        log::debug!("Writing {} ({}) to {}", filename, mime_type, path.display());
        fs::write(&path, content).map_err(|error| {
            crate::gatein_error!("Failed to write export {}: {error}", path.display())
        })?;
        Ok(path)
    }
}
