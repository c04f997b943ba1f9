//! External-loader glue for the Cartage engine.
//!
//! The engine core never parses text; this crate does. It turns a CSV
//! manifest into fully typed [`ItemRecord`](cartage_core::ItemRecord)s and
//! supplies the destination table, either from a JSON file or from the
//! built-in delivery network. Every failure is an explicit typed error —
//! the loader never hands the core a partially populated list.

#![forbid(unsafe_code)]

pub mod destinations;
pub mod fs;
pub mod manifest;

pub use destinations::{DestinationsError, default_destinations, load_destinations};
pub use manifest::{ManifestError, load_manifest};
