//! Stats lookup: the historical delay datasets and the per-station series
//! shown on the station card.
//!
//! The JSON tables (`[header, ...rows]`) are decoded into typed records once
//! at startup; a missing column or malformed cell fails the load and the app
//! exits. Queries are keyed on `(line, name)` and recomputed only when the
//! selection changes.

mod error;
mod queries;
mod records;
mod table;


pub use error::StatsError;
pub use queries::*;
pub use records::*;
pub use table::{Column, Row, Table};

use std::path::PathBuf;

use bevy::prelude::*;

use crate::config::{DATA_DIR_ENV, DEFAULT_DATA_DIR};
use crate::selection::SelectedStation;

/// Where the dataset tables live.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DataConfig {
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl DataConfig {
    /// `SUBWAY_DELAYS_DATA_DIR` when set and non-empty, the default otherwise.
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self {
                data_dir: PathBuf::from(dir.trim()),
            },
            _ => Self::default(),
        }
    }
}

/// Series for the selected station; `None` while nothing is selected.
#[derive(Resource, Debug, Clone, Default)]
pub struct SelectedStationStats(pub Option<StationStats>);

#[cfg(not(target_arch = "wasm32"))]
fn read_datasets(config: &DataConfig) -> Result<Datasets, StatsError> {
    Datasets::load(&config.data_dir)
}

/// The browser build has no filesystem; the tables are compiled in.
#[cfg(target_arch = "wasm32")]
fn read_datasets(_config: &DataConfig) -> Result<Datasets, StatsError> {
    macro_rules! table {
        ($file:literal) => {
            Table::parse(
                $file,
                include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/data/", $file)),
            )
        };
    }
    Datasets::from_tables(
        &table!("delay_likelihood.json")?,
        &table!("incidents.json")?,
        &table!("station_ranking_with_latlon.json")?,
    )
}

/// Load the datasets unless they were provided up front. A load failure is
/// fatal.
pub fn load_datasets(
    mut commands: Commands,
    config: Res<DataConfig>,
    existing: Option<Res<Datasets>>,
    mut exit: EventWriter<AppExit>,
) {
    if existing.is_some() {
        return;
    }
    match read_datasets(&config) {
        Ok(datasets) => {
            info!(
                "Loaded datasets from {}: {} hourly rows, {} incidents, {} ranked stations",
                config.data_dir.display(),
                datasets.delay_likelihood.len(),
                datasets.incidents.len(),
                datasets.station_ranking.len()
            );
            commands.insert_resource(datasets);
        }
        Err(e) => {
            error!("Failed to load datasets: {e}");
            exit.send(AppExit::from_code(1));
        }
    }
}

/// Recompute the card series whenever the selection changes.
pub fn refresh_selected_stats(
    selected: Res<SelectedStation>,
    datasets: Option<Res<Datasets>>,
    mut stats: ResMut<SelectedStationStats>,
) {
    if !selected.is_changed() {
        return;
    }
    stats.0 = match (selected.key(), datasets) {
        (Some(key), Some(datasets)) => Some(StationStats::compute(&datasets, key)),
        _ => None,
    };
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<DataConfig>() {
            app.insert_resource(DataConfig::from_env());
        }
        app.init_resource::<SelectedStationStats>()
            .add_systems(Startup, load_datasets)
            .add_systems(
                Update,
                refresh_selected_stats.after(crate::selection::apply_selection),
            );
    }
}
