//! The allocation seam: one manifest in, five disjoint buckets out.

use thiserror::Error;

use crate::{Fleet, ItemRecord, ManifestItem, PlanError};

/// Parameters for one allocation run.
///
/// Reference data (destination table, tariff, optimizer) belongs to the
/// allocator itself; the request carries only what varies per run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationRequest {
    /// Raw manifest records, in manifest order.
    pub items: Vec<ItemRecord>,
    /// Vehicle capacities for this run.
    pub fleet: Fleet,
}

/// The five disjoint result buckets of an allocation run.
///
/// Every input record lands in exactly one bucket, and each bucket preserves
/// the relative order of the sequence it was carved from, so downstream
/// presentation is deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Records rejected by screening, as received.
    pub invalid: Vec<ItemRecord>,
    /// Items heavier than the two-door vehicle's capacity.
    pub oversized: Vec<ManifestItem>,
    /// Items loaded onto the one-door vehicle.
    pub one_door: Vec<ManifestItem>,
    /// Items loaded onto the two-door vehicle.
    pub two_door: Vec<ManifestItem>,
    /// Items deferred to the next delivery run.
    pub next_delivery: Vec<ManifestItem>,
}

impl Allocation {
    /// Total billed revenue of the one-door load.
    pub fn one_door_bill(&self) -> f64 {
        bill_total(&self.one_door)
    }

    /// Total billed revenue of the two-door load.
    pub fn two_door_bill(&self) -> f64 {
        bill_total(&self.two_door)
    }

    /// Loaded weight of the one-door vehicle.
    pub fn one_door_weight(&self) -> u64 {
        weight_total(&self.one_door)
    }

    /// Loaded weight of the two-door vehicle.
    pub fn two_door_weight(&self) -> u64 {
        weight_total(&self.two_door)
    }

    /// Number of records across all five buckets.
    pub fn total_records(&self) -> usize {
        self.invalid.len()
            + self.oversized.len()
            + self.one_door.len()
            + self.two_door.len()
            + self.next_delivery.len()
    }
}

fn bill_total(items: &[ManifestItem]) -> f64 {
    items.iter().map(|item| item.bill).sum()
}

fn weight_total(items: &[ManifestItem]) -> u64 {
    items.iter().map(|item| u64::from(item.weight)).sum()
}

/// Errors returned by [`Allocator::allocate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocateError {
    /// An optimizer run rejected its inputs.
    #[error("load planning failed: {0}")]
    Plan(#[from] PlanError),
}

/// Allocate a manifest across the fleet.
///
/// Implementations screen the manifest, fill each vehicle tier in fixed
/// order, and classify the leftovers. They must be deterministic: identical
/// requests against identical reference data produce identical buckets in
/// identical order.
pub trait Allocator: Send + Sync {
    /// Run one allocation, producing the five buckets.
    fn allocate(&self, request: &AllocationRequest) -> Result<Allocation, AllocateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, weight: u32, bill: f64) -> ManifestItem {
        ManifestItem {
            name: name.into(),
            weight,
            height: 0.0,
            length: 0.0,
            width: 0.0,
            city: "A".into(),
            volume: 0.0,
            distance: 0,
            bill,
        }
    }

    #[test]
    fn totals_sum_per_bucket() {
        let allocation = Allocation {
            invalid: Vec::new(),
            oversized: Vec::new(),
            one_door: vec![item("a", 5, 150.0), item("b", 3, 50.0)],
            two_door: vec![item("c", 15, 250.0)],
            next_delivery: Vec::new(),
        };
        assert_eq!(allocation.one_door_bill(), 200.0);
        assert_eq!(allocation.one_door_weight(), 8);
        assert_eq!(allocation.two_door_bill(), 250.0);
        assert_eq!(allocation.two_door_weight(), 15);
        assert_eq!(allocation.total_records(), 3);
    }

    #[test]
    fn empty_allocation_is_all_zeroes() {
        let allocation = Allocation::default();
        assert_eq!(allocation.total_records(), 0);
        assert_eq!(allocation.one_door_bill(), 0.0);
        assert_eq!(allocation.two_door_weight(), 0);
    }
}
