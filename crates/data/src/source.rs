//! Stat source trait and file-based implementations.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{DataError, Result};
use crate::record::{StatRecord, REQUIRED_COLUMNS};

/// Trait for sources that supply per-game stat records.
///
/// Implementations own the fetch mechanism; the rest of the pipeline
/// depends only on the record schema.
pub trait StatSource {
    /// Source name, for logging.
    fn name(&self) -> &str;

    /// Load all records from the source.
    fn load(&self) -> Result<Vec<StatRecord>>;
}

/// Stat source backed by a headed CSV file.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a source reading from the given CSV file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<Vec<StatRecord>> {
        let file = File::open(&self.path).map_err(|e| DataError::Io(e.to_string()))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|e| DataError::Parse(e.to_string()))?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataError::SchemaMismatch {
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: StatRecord = row.map_err(|e| DataError::Parse(e.to_string()))?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(DataError::NoData);
        }

        log::debug!("loaded {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// Stat source backed by a JSON file holding an array of record objects.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Create a source reading from the given JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatSource for JsonSource {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self) -> Result<Vec<StatRecord>> {
        let file = File::open(&self.path).map_err(|e| DataError::Io(e.to_string()))?;
        let rows: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DataError::Parse(e.to_string()))?;

        if rows.is_empty() {
            return Err(DataError::NoData);
        }

        // Check the schema against the first row so a missing column is
        // reported by name instead of as a per-row parse failure.
        for column in REQUIRED_COLUMNS {
            if rows[0].get(column).is_none() {
                return Err(DataError::SchemaMismatch {
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let record: StatRecord =
                serde_json::from_value(row).map_err(|e| DataError::Parse(e.to_string()))?;
            records.push(record);
        }

        log::debug!("loaded {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// In-memory stat source for tests and examples.
pub struct FixtureSource {
    records: Vec<StatRecord>,
}

impl FixtureSource {
    /// Create a source serving the given records.
    pub fn new(records: Vec<StatRecord>) -> Self {
        Self { records }
    }
}

impl StatSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn load(&self) -> Result<Vec<StatRecord>> {
        if self.records.is_empty() {
            return Err(DataError::NoData);
        }
        Ok(self.records.clone())
    }
}

/// Load records from a file, picking the source by extension.
///
/// `.csv` and `.json` are recognized; anything else is tried as CSV
/// first, then JSON.
pub fn load_records(path: &Path) -> Result<Vec<StatRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => CsvSource::new(path).load(),
        "json" => JsonSource::new(path).load(),
        _ => CsvSource::new(path)
            .load()
            .or_else(|_| JsonSource::new(path).load()),
    }
}
