//! The delivery network: a read-only city-to-distance table.

use std::collections::HashMap;

/// Distances to deliverable cities, keyed by exact city name.
///
/// The table is read-only for the duration of an allocation run. Lookups are
/// direct key matches; no normalisation or fuzzy matching is applied.
///
/// # Examples
/// ```
/// use cartage_core::DestinationTable;
///
/// let table = DestinationTable::from_pairs([("Hai Phong".to_owned(), 100)]);
/// assert_eq!(table.distance("Hai Phong"), Some(100));
/// assert_eq!(table.distance("hai phong"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationTable {
    distances: HashMap<String, u32>,
}

impl DestinationTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(city, distance)` pairs.
    ///
    /// Duplicate city names keep the last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Self {
            distances: pairs.into_iter().collect(),
        }
    }

    /// Return the distance to `city`, if the city is deliverable.
    pub fn distance(&self, city: &str) -> Option<u32> {
        self.distances.get(city).copied()
    }

    /// Report whether `city` is part of the delivery network.
    pub fn contains(&self, city: &str) -> bool {
        self.distances.contains_key(city)
    }

    /// Number of deliverable cities.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Report whether the table has no cities at all.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn duplicate_city_keeps_last_value() {
        let table =
            DestinationTable::from_pairs([("Dalat".to_owned(), 900), ("Dalat".to_owned(), 1500)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.distance("Dalat"), Some(1500));
    }

    #[rstest]
    fn lookup_is_exact() {
        let table = DestinationTable::from_pairs([("Nha Trang".to_owned(), 1300)]);
        assert!(table.contains("Nha Trang"));
        assert!(!table.contains("nha trang"));
        assert!(!table.contains("Nha Trang "));
    }

    #[rstest]
    fn empty_table_rejects_everything() {
        let table = DestinationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.distance("HCMC"), None);
    }
}
