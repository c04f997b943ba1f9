//! Destination-table sources.
//!
//! The delivery network comes either from a JSON object mapping city names
//! to distances, or from the built-in default network.

use std::collections::HashMap;
use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use cartage_core::DestinationTable;
use thiserror::Error;

use crate::fs::open_utf8_file;

/// Errors raised while loading a destination table.
#[derive(Debug, Error)]
pub enum DestinationsError {
    /// Opening the table file failed.
    #[error("failed to open destination table at {path}")]
    Open {
        /// Requested table path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The table JSON could not be decoded.
    #[error("failed to parse destination table at {path}")]
    Parse {
        /// Requested table path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Load a destination table from a JSON object of `city: distance` pairs.
///
/// An empty object is accepted but logged, since it makes every manifest
/// record screen as invalid.
///
/// # Errors
/// Returns [`DestinationsError`] when the file cannot be opened or decoded.
pub fn load_destinations(path: &Utf8Path) -> Result<DestinationTable, DestinationsError> {
    let file = open_utf8_file(path).map_err(|source| DestinationsError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let raw: HashMap<String, u32> =
        serde_json::from_reader(reader).map_err(|source| DestinationsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if raw.is_empty() {
        log::warn!("destination table at {path} is empty; every manifest record will screen as invalid");
    }
    Ok(DestinationTable::from_pairs(raw))
}

/// The built-in delivery network used when no table file is supplied.
pub fn default_destinations() -> DestinationTable {
    DestinationTable::from_pairs([
        ("HCMC".to_owned(), 1700),
        ("Da Nang".to_owned(), 800),
        ("Dalat".to_owned(), 1500),
        ("Nha Trang".to_owned(), 1300),
        ("Hai Phong".to_owned(), 100),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table_file(contents: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("destinations.json"))
            .expect("utf8 temp path");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[rstest]
    fn loads_city_distances() {
        let (_dir, path) = table_file(r#"{"HCMC": 1700, "Hai Phong": 100}"#);
        let table = load_destinations(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.distance("Hai Phong"), Some(100));
    }

    #[rstest]
    fn empty_object_yields_empty_table() {
        let (_dir, path) = table_file("{}");
        let table = load_destinations(&path).unwrap();
        assert!(table.is_empty());
    }

    #[rstest]
    #[case("not json at all")]
    #[case(r#"{"HCMC": "far"}"#)]
    #[case(r#"{"HCMC": -5}"#)]
    fn undecodable_table_is_a_typed_error(#[case] contents: &str) {
        let (_dir, path) = table_file(contents);
        assert!(matches!(
            load_destinations(&path),
            Err(DestinationsError::Parse { .. })
        ));
    }

    #[rstest]
    fn missing_file_is_a_typed_error() {
        let err = load_destinations(Utf8Path::new("nowhere/destinations.json")).unwrap_err();
        assert!(matches!(err, DestinationsError::Open { .. }));
    }

    #[rstest]
    fn default_network_covers_the_five_cities() {
        let table = default_destinations();
        assert_eq!(table.len(), 5);
        assert_eq!(table.distance("HCMC"), Some(1700));
        assert_eq!(table.distance("Da Nang"), Some(800));
        assert_eq!(table.distance("Hai Phong"), Some(100));
    }
}
