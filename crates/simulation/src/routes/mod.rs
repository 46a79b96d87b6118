//! Route registry: the static table of subway lines and their stations.
//!
//! Each line is a start point plus relative segments and an ordered station
//! list. The registry is validated once when the plugin builds and lives for
//! the whole process as an immutable resource.

mod registry;
pub mod toronto;
mod types;

#[cfg(test)]
mod tests;

pub use registry::{RouteError, RouteRegistry};
pub use types::*;

use bevy::prelude::*;

pub struct RoutesPlugin;

impl Plugin for RoutesPlugin {
    fn build(&self, app: &mut App) {
        // Tests and alternative maps may insert their own registry first.
        if app.world().contains_resource::<RouteRegistry>() {
            return;
        }
        let registry = RouteRegistry::toronto()
            .unwrap_or_else(|e| panic!("built-in route table is invalid: {e}"));
        info!(
            "Route registry loaded: {} lines, {} stations",
            registry.lines_by_name().len(),
            registry.station_count()
        );
        app.insert_resource(registry);
    }
}
