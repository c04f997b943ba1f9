//! Shippable items: raw manifest records and their enriched form.
//!
//! [`ItemRecord`] is what the external loader hands over: fully typed, but
//! not yet checked against the delivery network. [`ManifestItem`] is produced
//! by screening and carries the derived fields (volume, distance, bill).
//! Enriched items are never mutated afterwards; the allocation pipeline only
//! moves them between buckets.

/// A raw manifest record as delivered by the loader.
///
/// Numeric fields are already coerced by the loader; a non-positive weight
/// is representable because it is data to be screened out, not an error.
///
/// # Examples
/// ```
/// use cartage_core::ItemRecord;
///
/// let record = ItemRecord {
///     name: "pallet of tiles".into(),
///     weight: 40,
///     height: 1.2,
///     length: 0.8,
///     width: 0.8,
///     city: "Da Nang".into(),
/// };
/// assert_eq!(record.weight, 40);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    /// Item name as it appeared in the manifest.
    pub name: String,
    /// Weight in whole units; may be zero or negative in raw data.
    pub weight: i64,
    /// Height of the packed item.
    pub height: f64,
    /// Length of the packed item.
    pub length: f64,
    /// Width of the packed item.
    pub width: f64,
    /// Destination city key.
    pub city: String,
}

/// A screened, billable item with its derived fields.
///
/// Constructed exactly once during screening; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManifestItem {
    /// Item name as it appeared in the manifest.
    pub name: String,
    /// Validated weight, strictly positive.
    pub weight: u32,
    /// Height of the packed item.
    pub height: f64,
    /// Length of the packed item.
    pub length: f64,
    /// Width of the packed item.
    pub width: f64,
    /// Destination city key, present in the destination table.
    pub city: String,
    /// `height * length * width`, computed during screening.
    pub volume: f64,
    /// Distance to the destination city from the table.
    pub distance: u32,
    /// Billed price for transporting this item.
    pub bill: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_raw_weight() {
        let record = ItemRecord {
            name: "crate".into(),
            weight: -3,
            height: 0.0,
            length: 0.0,
            width: 0.0,
            city: "Dalat".into(),
        };
        assert_eq!(record.weight, -3);
    }
}
