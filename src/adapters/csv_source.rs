use crate::domain::model::RawListingRow;
use crate::domain::ports::TabularSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// CSV-backed tabular source with the fixed listings header schema
/// (ID, timezone, ratings, one hours column per day, categories).
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TabularSource for CsvSource {
    async fn fetch_rows(&self) -> Result<Vec<RawListingRow>> {
        let mut reader = csv::Reader::from_path(&self.path)?;

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }

        tracing::debug!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}
