//! Animated trains.
//!
//! Every train is an entity carrying a [`Train`] component. Trains advance one
//! map unit per fixed tick (20 ms), dwell for one second at each station, and
//! reverse after a one-second dwell at either end of the line. They only read
//! the shared [`RouteRegistry`]; despawning the entity stops the train.
//!
//! ## State machine
//! - `Running`: advance, then check termini and the next station
//! - `PausedAtStation`: count down, then step `current_station_index`
//! - `PausedAtTerminus`: count down, then flip direction and reset the index

mod state;
mod systems;
mod types;


pub use state::TrainState;
pub use systems::{spawn_trains, tick_trains};
pub use types::*;

use bevy::prelude::*;

/// A simulated train.
#[derive(Component, Debug, Clone)]
pub struct Train {
    pub state: TrainState,
}

pub struct TrainsPlugin;

impl Plugin for TrainsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrainRoster>()
            .add_systems(Startup, spawn_trains)
            .add_systems(FixedUpdate, tick_trains);
    }
}
