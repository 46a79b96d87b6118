//! Headless engine for the subway delay map: route geometry, animated
//! trains, station navigation, viewport targeting, selection and the
//! historical delay datasets.

use bevy::prelude::*;

pub mod config;
pub mod geolocation;
pub mod geometry;
pub mod navigator;
pub mod routes;
pub mod selection;
pub mod stats;
pub mod status;
pub mod trains;
pub mod viewport;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use routes::{RouteRegistry, StationKey};
pub use selection::{SelectStation, SelectedStation, SelectionSource};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Trains move one map unit per fixed tick.
        app.insert_resource(Time::<Fixed>::from_duration(config::TRAIN_TICK));

        app.add_plugins((
            routes::RoutesPlugin,
            selection::SelectionPlugin,
            viewport::ViewportPlugin,
            trains::TrainsPlugin,
            stats::StatsPlugin,
            geolocation::GeolocationPlugin,
            status::StatusPlugin,
        ));
    }
}
