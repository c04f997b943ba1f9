//! Test-only helpers: a deterministic optimizer double and item builders.

use crate::{DestinationTable, ItemRecord, LoadOptimizer, LoadPlan, PlanError};

/// Greedy in-order optimizer used to exercise allocation mechanics without
/// an exact solver. Takes each item while it still fits.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFitOptimizer;

impl LoadOptimizer for FirstFitOptimizer {
    fn plan(&self, weights: &[u32], bills: &[f64], capacity: u32) -> Result<LoadPlan, PlanError> {
        if weights.len() != bills.len() {
            return Err(PlanError::LengthMismatch {
                weights: weights.len(),
                bills: bills.len(),
            });
        }
        let mut plan = LoadPlan::empty();
        let mut remaining = capacity;
        for (index, (&weight, &bill)) in weights.iter().zip(bills).enumerate() {
            if weight <= remaining {
                remaining -= weight;
                plan.total_bill += bill;
                plan.selected.push(index);
            }
        }
        Ok(plan)
    }
}

/// Build a raw record with unit dimensions.
pub fn record(name: &str, weight: i64, city: &str) -> ItemRecord {
    ItemRecord {
        name: name.into(),
        weight,
        height: 1.0,
        length: 1.0,
        width: 1.0,
        city: city.into(),
    }
}

/// A two-city table used across tests: `A` at 100, `B` at 500.
pub fn two_city_table() -> DestinationTable {
    DestinationTable::from_pairs([("A".to_owned(), 100), ("B".to_owned(), 500)])
}
