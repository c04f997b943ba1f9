//! Exact load planning for Cartage.
//!
//! This crate provides [`KnapsackOptimizer`], the default implementation of
//! the [`LoadOptimizer`](cartage_core::LoadOptimizer) trait, and
//! [`TieredAllocator`], the default [`Allocator`](cartage_core::Allocator).
//! The optimizer solves the 0/1 knapsack exactly with a bottom-up value
//! table; the allocator screens a manifest, fills the one-door vehicle,
//! then fills the two-door vehicle from what remains.
//!
//! Both are synchronous and deterministic: identical inputs produce
//! identical loads in identical order.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocator;
mod knapsack;

pub use allocator::TieredAllocator;
pub use knapsack::KnapsackOptimizer;
