//! Property-based tests for the knapsack optimizer and the tiered allocator.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! well-formed inputs, complementing the example-driven unit tests.
//!
//! # Invariants tested
//!
//! - **Exactness:** The planned total equals the brute-force optimum.
//! - **Feasibility:** Selected weight never exceeds the capacity.
//! - **Consistency:** The planned total equals the sum of selected bills.
//! - **Partition completeness:** Every record lands in exactly one bucket.
//! - **Oversized rule:** Only items above the two-door capacity are set
//!   aside, and none of them reaches a vehicle.
//! - **Determinism:** Identical runs produce identical allocations.

use std::collections::HashSet;

use proptest::prelude::*;

use cartage_core::{
    Allocation, AllocationRequest, Allocator, DestinationTable, Fleet, ItemRecord, LoadOptimizer,
    Tariff,
};
use cartage_solver_knapsack::{KnapsackOptimizer, TieredAllocator};

/// Exhaustive subset search; only usable for small `n`.
fn brute_force_optimum(weights: &[u32], bills: &[f64], capacity: u32) -> f64 {
    let n = weights.len();
    let mut best = 0.0_f64;
    for mask in 0_u32..(1 << n) {
        let mut weight = 0_u64;
        let mut bill = 0.0_f64;
        for (index, (&item_weight, &item_bill)) in weights.iter().zip(bills).enumerate() {
            if mask & (1 << index) != 0 {
                weight += u64::from(item_weight);
                bill += item_bill;
            }
        }
        if weight <= u64::from(capacity) && bill > best {
            best = bill;
        }
    }
    best
}

/// Manifests of up to 14 records with unique names, mixed validity.
fn manifest_strategy() -> impl Strategy<Value = Vec<ItemRecord>> {
    prop::collection::vec(
        (
            -5_i64..=45,
            prop_oneof![
                Just("A".to_owned()),
                Just("B".to_owned()),
                Just("Nowhere".to_owned()),
            ],
        ),
        0..=14,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (weight, city))| ItemRecord {
                name: format!("item-{index}"),
                weight,
                height: 1.0,
                length: 1.0,
                width: 1.0,
                city,
            })
            .collect()
    })
}

fn build_allocator() -> TieredAllocator<KnapsackOptimizer> {
    let destinations =
        DestinationTable::from_pairs([("A".to_owned(), 100), ("B".to_owned(), 500)]);
    let tariff = Tariff::new(10.0, 1.0).expect("valid tariff");
    TieredAllocator::new(destinations, tariff)
}

fn bucket_names(allocation: &Allocation) -> Vec<String> {
    let mut names: Vec<String> = allocation
        .invalid
        .iter()
        .map(|record| record.name.clone())
        .collect();
    for bucket in [
        &allocation.oversized,
        &allocation.one_door,
        &allocation.two_door,
        &allocation.next_delivery,
    ] {
        names.extend(bucket.iter().map(|item| item.name.clone()));
    }
    names
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the dynamic program is exact. Bills are integer-valued so
    /// floating-point sums are exact and the comparison needs no tolerance.
    #[test]
    fn planned_total_matches_brute_force(
        items in prop::collection::vec((1_u32..=25, 0_u32..=500), 0..=12),
        capacity in 0_u32..=60,
    ) {
        let weights: Vec<u32> = items.iter().map(|&(weight, _)| weight).collect();
        let bills: Vec<f64> = items.iter().map(|&(_, bill)| f64::from(bill)).collect();

        let plan = KnapsackOptimizer
            .plan(&weights, &bills, capacity)
            .expect("parallel inputs are equal length");

        let optimum = brute_force_optimum(&weights, &bills, capacity);
        prop_assert_eq!(plan.total_bill, optimum);
    }

    /// Property: a planned load always fits the vehicle.
    #[test]
    fn planned_load_respects_capacity(
        items in prop::collection::vec((1_u32..=25, 0_u32..=500), 0..=12),
        capacity in 0_u32..=60,
    ) {
        let weights: Vec<u32> = items.iter().map(|&(weight, _)| weight).collect();
        let bills: Vec<f64> = items.iter().map(|&(_, bill)| f64::from(bill)).collect();

        let plan = KnapsackOptimizer
            .plan(&weights, &bills, capacity)
            .expect("parallel inputs are equal length");

        let loaded: u64 = plan
            .selected
            .iter()
            .map(|&index| u64::from(weights[index]))
            .sum();
        prop_assert!(
            loaded <= u64::from(capacity),
            "loaded {} exceeds capacity {}",
            loaded,
            capacity
        );

        let direct: f64 = plan.selected.iter().map(|&index| bills[index]).sum();
        prop_assert_eq!(plan.total_bill, direct);
    }

    /// Property: selected indices are strictly ascending and unique.
    #[test]
    fn planned_indices_are_ascending(
        items in prop::collection::vec((1_u32..=25, 0_u32..=500), 0..=12),
        capacity in 0_u32..=60,
    ) {
        let weights: Vec<u32> = items.iter().map(|&(weight, _)| weight).collect();
        let bills: Vec<f64> = items.iter().map(|&(_, bill)| f64::from(bill)).collect();

        let plan = KnapsackOptimizer
            .plan(&weights, &bills, capacity)
            .expect("parallel inputs are equal length");

        prop_assert!(plan.selected.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(plan.selected.iter().all(|&index| index < weights.len()));
    }

    /// Property: every manifest record lands in exactly one bucket.
    #[test]
    fn allocation_partitions_the_manifest(
        items in manifest_strategy(),
        one_door in 0_u32..=30,
        extra in 0_u32..=30,
    ) {
        let fleet = Fleet::new(one_door, one_door + extra).expect("ordered capacities");
        let allocator = build_allocator();
        let allocation = allocator
            .allocate(&AllocationRequest { items: items.clone(), fleet })
            .expect("allocation succeeds");

        let mut seen = bucket_names(&allocation);
        prop_assert_eq!(seen.len(), items.len(), "a record was dropped or duplicated");
        seen.sort();
        let distinct: HashSet<&String> = seen.iter().collect();
        prop_assert_eq!(distinct.len(), seen.len(), "a record appears twice");

        let mut expected: Vec<String> = items.iter().map(|item| item.name.clone()).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }

    /// Property: the oversized bucket is exactly the screened items above
    /// the two-door capacity.
    #[test]
    fn oversized_items_never_reach_a_vehicle(
        items in manifest_strategy(),
        one_door in 0_u32..=30,
        extra in 0_u32..=30,
    ) {
        let two_door = one_door + extra;
        let fleet = Fleet::new(one_door, two_door).expect("ordered capacities");
        let allocator = build_allocator();
        let allocation = allocator
            .allocate(&AllocationRequest { items, fleet })
            .expect("allocation succeeds");

        prop_assert!(allocation.oversized.iter().all(|item| item.weight > two_door));
        for bucket in [
            &allocation.one_door,
            &allocation.two_door,
            &allocation.next_delivery,
        ] {
            prop_assert!(bucket.iter().all(|item| item.weight <= two_door));
        }
    }

    /// Property: loaded vehicles respect their capacities end to end.
    #[test]
    fn vehicle_loads_respect_fleet_capacities(
        items in manifest_strategy(),
        one_door in 0_u32..=30,
        extra in 0_u32..=30,
    ) {
        let fleet = Fleet::new(one_door, one_door + extra).expect("ordered capacities");
        let allocator = build_allocator();
        let allocation = allocator
            .allocate(&AllocationRequest { items, fleet })
            .expect("allocation succeeds");

        prop_assert!(allocation.one_door_weight() <= u64::from(fleet.one_door_capacity()));
        prop_assert!(allocation.two_door_weight() <= u64::from(fleet.two_door_capacity()));
    }

    /// Property: allocation is a pure function of its inputs.
    #[test]
    fn allocation_is_deterministic(
        items in manifest_strategy(),
        one_door in 0_u32..=30,
        extra in 0_u32..=30,
    ) {
        let fleet = Fleet::new(one_door, one_door + extra).expect("ordered capacities");
        let allocator = build_allocator();
        let request = AllocationRequest { items, fleet };

        let first = allocator.allocate(&request).expect("allocation succeeds");
        let second = allocator.allocate(&request).expect("allocation succeeds");
        prop_assert_eq!(first, second);
    }
}
