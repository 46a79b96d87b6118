//! ECS systems for the trains feature.

use bevy::prelude::*;

use crate::routes::RouteRegistry;

use super::{Train, TrainRoster, TrainState};

/// Spawn one entity per roster entry. Entries naming an unknown line are
/// skipped with a warning.
pub fn spawn_trains(mut commands: Commands, roster: Res<TrainRoster>, registry: Res<RouteRegistry>) {
    let mut spawned = 0;
    for (i, spec) in roster.trains.iter().enumerate() {
        let Some(line) = registry.line(&spec.line) else {
            warn!("Train roster entry {}: unknown line '{}', skipping", i, spec.line);
            continue;
        };
        commands.spawn((
            Train {
                state: TrainState::new(spec, line),
            },
            Name::new(format!("{} train {}", spec.line, i)),
        ));
        spawned += 1;
    }
    info!("Spawned {} trains", spawned);
}

/// Advance every train by one fixed tick.
pub fn tick_trains(registry: Res<RouteRegistry>, mut trains: Query<&mut Train>) {
    for mut train in &mut trains {
        let Some(line) = registry.line(&train.state.line) else {
            continue;
        };
        train.state.tick(line);
    }
}
