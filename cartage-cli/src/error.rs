//! Error types emitted by the Cartage CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use cartage_core::{AllocateError, FleetError, TariffError};
use cartage_data::{DestinationsError, ManifestError};
use thiserror::Error;

/// Errors emitted by the Cartage CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configured billing rates are unusable.
    #[error("invalid tariff configuration: {0}")]
    InvalidTariff(#[from] TariffError),
    /// The configured vehicle capacities are unusable.
    #[error("invalid fleet configuration: {0}")]
    InvalidFleet(#[from] FleetError),
    /// Loading the manifest failed.
    #[error(transparent)]
    LoadManifest(#[from] ManifestError),
    /// Loading the destination table failed.
    #[error(transparent)]
    LoadDestinations(#[from] DestinationsError),
    /// The allocator rejected the run.
    #[error("allocation failed: {0}")]
    Allocate(#[from] AllocateError),
    /// Serializing the allocation report failed.
    #[error("failed to serialize allocation report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing the allocation report failed.
    #[error("failed to write allocation report: {0}")]
    WriteReport(#[source] std::io::Error),
}
