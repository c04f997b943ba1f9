//! CSV manifest ingestion.
//!
//! The manifest is a headed CSV file with the columns `name, weight, height,
//! length, width, city`. Extra columns (legacy manifests carry a `price`)
//! are ignored. Numeric coercion happens here: a record the reader cannot
//! type is a loader error, not an invalid item — screening only ever sees
//! fully typed records.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use cartage_core::ItemRecord;
use serde::Deserialize;
use thiserror::Error;

use crate::fs::open_utf8_file;

#[derive(Debug, Deserialize)]
struct ManifestRow {
    name: String,
    weight: i64,
    height: f64,
    length: f64,
    width: f64,
    city: String,
}

impl From<ManifestRow> for ItemRecord {
    fn from(row: ManifestRow) -> Self {
        Self {
            name: row.name,
            weight: row.weight,
            height: row.height,
            length: row.length,
            width: row.width,
            city: row.city,
        }
    }
}

/// Errors raised while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Opening the manifest file failed.
    #[error("failed to open manifest at {path}")]
    Open {
        /// Requested manifest path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A record could not be read or typed.
    #[error("failed to parse manifest record {record} in {path}")]
    Parse {
        /// Requested manifest path.
        path: Utf8PathBuf,
        /// One-based data record number.
        record: usize,
        /// Source error from the CSV reader.
        #[source]
        source: csv::Error,
    },
    /// The manifest held no data rows at all.
    #[error("manifest at {path} contains no records")]
    Empty {
        /// Requested manifest path.
        path: Utf8PathBuf,
    },
}

/// Load and type every record of the manifest at `path`.
///
/// Returns the full record list or the first error encountered; a manifest
/// is never partially loaded.
///
/// # Errors
/// Returns [`ManifestError`] when the file cannot be opened, a record fails
/// numeric coercion, or the manifest has no data rows.
pub fn load_manifest(path: &Utf8Path) -> Result<Vec<ItemRecord>, ManifestError> {
    let file = open_utf8_file(path).map_err(|source| ManifestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<ManifestRow>().enumerate() {
        let typed = row.map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            record: index + 1,
            source,
        })?;
        records.push(ItemRecord::from(typed));
    }
    if records.is_empty() {
        return Err(ManifestError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}
