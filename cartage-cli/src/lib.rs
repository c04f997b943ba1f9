//! Command-line interface for the Cartage allocation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod allocate;
mod error;

pub use error::CliError;

use allocate::AllocateArgs;

pub(crate) const ARG_MANIFEST: &str = "manifest";
pub(crate) const ARG_DESTINATIONS: &str = "destinations";
pub(crate) const ARG_WEIGHT_RATE: &str = "weight-rate";
pub(crate) const ARG_DISTANCE_RATE: &str = "distance-rate";
pub(crate) const ARG_ONE_DOOR_CAPACITY: &str = "one-door-capacity";
pub(crate) const ARG_TWO_DOOR_CAPACITY: &str = "two-door-capacity";
pub(crate) const ENV_MANIFEST: &str = "CARTAGE_CMDS_ALLOCATE_MANIFEST";

/// Run the Cartage CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Allocate(args) => allocate::run_allocate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cartage",
    about = "Two-tier fleet allocation for delivery manifests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Allocate a manifest of shippable items across the delivery fleet.
    Allocate(AllocateArgs),
}
