//! Facade crate for the Cartage load allocation engine.
//!
//! This crate re-exports the core domain types and exposes the exact
//! knapsack solver implementation behind a feature flag.

#![forbid(unsafe_code)]

pub use cartage_core::{
    AllocateError, Allocation, AllocationRequest, Allocator, DestinationTable, Fleet, FleetError,
    ItemRecord, LoadOptimizer, LoadPlan, ManifestItem, PlanError, Screening, Tariff, TariffError,
    screen_items,
};

#[cfg(feature = "solver-knapsack")]
pub use cartage_solver_knapsack::{KnapsackOptimizer, TieredAllocator};
