//! Manifest screening: partition raw records and enrich the billable ones.
//!
//! Screening is a pure function returning an explicit `(valid, invalid)`
//! pair. Rejected records are data, not errors: they come back unmodified so
//! the presentation layer can show them as received.

use crate::{DestinationTable, ItemRecord, ManifestItem, Tariff};

/// Result of screening a manifest: both sides preserve input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Screening {
    /// Enriched items eligible for allocation.
    pub valid: Vec<ManifestItem>,
    /// Rejected records, exactly as they arrived.
    pub invalid: Vec<ItemRecord>,
}

/// Partition `records` into billable items and rejects.
///
/// A record is rejected iff its weight is outside `1..=u32::MAX` or its city
/// is absent from `destinations`. Accepted records are enriched exactly once
/// with volume, destination distance, and the billed price for the given
/// `tariff`.
///
/// # Examples
/// ```
/// use cartage_core::{DestinationTable, ItemRecord, Tariff, screen_items};
///
/// # fn main() -> Result<(), cartage_core::TariffError> {
/// let destinations = DestinationTable::from_pairs([("HCMC".to_owned(), 1700)]);
/// let tariff = Tariff::new(500.0, 200.0)?;
/// let records = vec![
///     ItemRecord {
///         name: "generator".into(),
///         weight: 60,
///         height: 1.0,
///         length: 1.0,
///         width: 0.5,
///         city: "HCMC".into(),
///     },
///     ItemRecord {
///         name: "mystery box".into(),
///         weight: 4,
///         height: 0.2,
///         length: 0.2,
///         width: 0.2,
///         city: "Atlantis".into(),
///     },
/// ];
///
/// let screening = screen_items(records, &destinations, &tariff);
/// assert_eq!(screening.valid.len(), 1);
/// assert_eq!(screening.valid[0].bill, 60.0 * 500.0 + 1700.0 * 200.0);
/// assert_eq!(screening.invalid[0].name, "mystery box");
/// # Ok(())
/// # }
/// ```
pub fn screen_items(
    records: Vec<ItemRecord>,
    destinations: &DestinationTable,
    tariff: &Tariff,
) -> Screening {
    let mut screening = Screening::default();
    for record in records {
        match screen_one(&record, destinations, tariff) {
            Some(item) => screening.valid.push(item),
            None => screening.invalid.push(record),
        }
    }
    screening
}

fn screen_one(
    record: &ItemRecord,
    destinations: &DestinationTable,
    tariff: &Tariff,
) -> Option<ManifestItem> {
    let weight = u32::try_from(record.weight).ok().filter(|&w| w > 0)?;
    let distance = destinations.distance(&record.city)?;
    Some(ManifestItem {
        name: record.name.clone(),
        weight,
        height: record.height,
        length: record.length,
        width: record.width,
        city: record.city.clone(),
        volume: record.height * record.length * record.width,
        distance,
        bill: tariff.bill(weight, distance),
    })
}
