//! Core domain types for the Cartage load allocation engine.
//!
//! The crate defines the shippable-item model, the read-only reference data
//! (destination table, tariff, fleet), the screening step that partitions a
//! manifest into billable and rejected records, and the trait seams
//! ([`LoadOptimizer`], [`Allocator`]) that solver crates implement.
//!
//! Constructors return `Result` to surface invalid configuration early; item
//! records themselves are never errors — screening routes them to buckets.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocator;
mod destinations;
mod fleet;
mod item;
mod optimizer;
mod screen;
mod tariff;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use allocator::{AllocateError, Allocation, AllocationRequest, Allocator};
pub use destinations::DestinationTable;
pub use fleet::{Fleet, FleetError};
pub use item::{ItemRecord, ManifestItem};
pub use optimizer::{LoadOptimizer, LoadPlan, PlanError};
pub use screen::{Screening, screen_items};
pub use tariff::{Tariff, TariffError};
