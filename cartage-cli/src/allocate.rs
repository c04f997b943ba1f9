//! Allocate command implementation for the Cartage CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use cartage_core::{
    Allocation, AllocationRequest, Allocator, Fleet, ItemRecord, ManifestItem, Tariff,
};
use cartage_data::fs::file_is_file;
use cartage_data::{default_destinations, load_destinations, load_manifest};
use cartage_solver_knapsack::TieredAllocator;

use crate::{
    ARG_DESTINATIONS, ARG_DISTANCE_RATE, ARG_MANIFEST, ARG_ONE_DOOR_CAPACITY, ARG_TWO_DOOR_CAPACITY,
    ARG_WEIGHT_RATE, CliError, ENV_MANIFEST,
};

pub(crate) const DEFAULT_WEIGHT_RATE: f64 = 500.0;
pub(crate) const DEFAULT_DISTANCE_RATE: f64 = 200.0;
pub(crate) const DEFAULT_ONE_DOOR_CAPACITY: u32 = 100;
pub(crate) const DEFAULT_TWO_DOOR_CAPACITY: u32 = 150;

/// CLI arguments for the `allocate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Allocate a CSV manifest of shippable items across the one-door \
                 and two-door vehicles. Rates and capacities can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Allocate a manifest across the delivery fleet"
)]
#[ortho_config(prefix = "CARTAGE")]
pub(crate) struct AllocateArgs {
    /// Path to the CSV manifest of shippable items.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) manifest_path: Option<Utf8PathBuf>,
    /// Path to a JSON destination table; the built-in network when omitted.
    #[arg(long = ARG_DESTINATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) destinations: Option<Utf8PathBuf>,
    /// Billed rate per unit weight.
    #[arg(long = ARG_WEIGHT_RATE, value_name = "rate")]
    #[serde(default)]
    pub(crate) weight_rate: Option<f64>,
    /// Billed rate per unit distance.
    #[arg(long = ARG_DISTANCE_RATE, value_name = "rate")]
    #[serde(default)]
    pub(crate) distance_rate: Option<f64>,
    /// Weight capacity of the one-door vehicle.
    #[arg(long = ARG_ONE_DOOR_CAPACITY, value_name = "weight")]
    #[serde(default)]
    pub(crate) one_door_capacity: Option<u32>,
    /// Weight capacity of the two-door vehicle.
    #[arg(long = ARG_TWO_DOOR_CAPACITY, value_name = "weight")]
    #[serde(default)]
    pub(crate) two_door_capacity: Option<u32>,
}

impl AllocateArgs {
    fn into_config(self) -> Result<AllocateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AllocateConfig::try_from(merged)
    }
}

/// Resolved `allocate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AllocateConfig {
    /// Path to the CSV manifest.
    pub(crate) manifest_path: Utf8PathBuf,
    /// Optional destination-table override.
    pub(crate) destinations: Option<Utf8PathBuf>,
    /// Validated billing rates.
    pub(crate) tariff: Tariff,
    /// Validated vehicle capacities.
    pub(crate) fleet: Fleet,
}

impl AllocateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.manifest_path, ARG_MANIFEST)?;
        if let Some(path) = &self.destinations {
            Self::require_existing(path, ARG_DESTINATIONS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<AllocateArgs> for AllocateConfig {
    type Error = CliError;

    fn try_from(args: AllocateArgs) -> Result<Self, Self::Error> {
        let manifest_path = args.manifest_path.ok_or(CliError::MissingArgument {
            field: ARG_MANIFEST,
            env: ENV_MANIFEST,
        })?;
        let tariff = Tariff::new(
            args.weight_rate.unwrap_or(DEFAULT_WEIGHT_RATE),
            args.distance_rate.unwrap_or(DEFAULT_DISTANCE_RATE),
        )?;
        let fleet = Fleet::new(
            args.one_door_capacity.unwrap_or(DEFAULT_ONE_DOOR_CAPACITY),
            args.two_door_capacity.unwrap_or(DEFAULT_TWO_DOOR_CAPACITY),
        )?;
        Ok(Self {
            manifest_path,
            destinations: args.destinations,
            tariff,
            fleet,
        })
    }
}

pub(super) fn run_allocate(args: AllocateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_allocate_with(args, &mut stdout)
}

pub(super) fn run_allocate_with(
    args: AllocateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_allocate_config(args)?;
    let allocation = execute_allocation(&config)?;
    write_report(writer, &allocation)
}

fn resolve_allocate_config(args: AllocateArgs) -> Result<AllocateConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_allocation(config: &AllocateConfig) -> Result<Allocation, CliError> {
    let items = load_manifest(&config.manifest_path)?;
    let destinations = config
        .destinations
        .as_deref()
        .map(load_destinations)
        .transpose()?
        .unwrap_or_else(default_destinations);

    let allocator = TieredAllocator::new(destinations, config.tariff);
    let request = AllocationRequest {
        items,
        fleet: config.fleet,
    };
    allocator.allocate(&request).map_err(CliError::from)
}

/// JSON payload presented to the caller: the five buckets, with per-vehicle
/// bill and weight totals on the loaded tiers.
#[derive(Debug, Serialize)]
pub(crate) struct AllocationReport<'a> {
    invalid: &'a [ItemRecord],
    oversized: &'a [ManifestItem],
    one_door: TierReport<'a>,
    two_door: TierReport<'a>,
    next_delivery: &'a [ManifestItem],
}

#[derive(Debug, Serialize)]
struct TierReport<'a> {
    items: &'a [ManifestItem],
    total_bill: f64,
    total_weight: u64,
}

impl<'a> From<&'a Allocation> for AllocationReport<'a> {
    fn from(allocation: &'a Allocation) -> Self {
        Self {
            invalid: &allocation.invalid,
            oversized: &allocation.oversized,
            one_door: TierReport {
                items: &allocation.one_door,
                total_bill: allocation.one_door_bill(),
                total_weight: allocation.one_door_weight(),
            },
            two_door: TierReport {
                items: &allocation.two_door,
                total_bill: allocation.two_door_bill(),
                total_weight: allocation.two_door_weight(),
            },
            next_delivery: &allocation.next_delivery,
        }
    }
}

pub(crate) fn write_report(writer: &mut dyn Write, allocation: &Allocation) -> Result<(), CliError> {
    let report = AllocationReport::from(allocation);
    let payload = serde_json::to_string_pretty(&report).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
