//! Integration tests using the `TestMap` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and check the
//! behavior of the systems working together.

mod geolocation_tests;
mod navigation_tests;
mod selection_tests;
mod stats_tests;

use std::time::Duration;

use crate::routes::toronto::{BLOOR_DANFORTH, SHEPPARD};
use crate::routes::RouteRegistry;
use crate::test_harness::TestMap;
use crate::trains::{Train, TrainPhase, TrainRoster, TrainSpec, TravelDirection};

// ====================================================================
// Startup
// ====================================================================

#[test]
fn test_startup_loads_registry_and_trains() {
    let mut map = TestMap::new();
    assert_eq!(map.resource::<RouteRegistry>().station_count(), 74);
    assert_eq!(map.train_count(), TrainRoster::default().trains.len());
    assert!(map.selected().is_none());
}

#[test]
fn test_unknown_roster_line_is_skipped() {
    let mut map = TestMap::with_roster(TrainRoster {
        trains: vec![
            TrainSpec::new("Eglinton Crosstown", 1.0, TravelDirection::Forward),
            TrainSpec::new(SHEPPARD, 1.0, TravelDirection::Forward),
        ],
    });
    assert_eq!(map.train_count(), 1);
}

// ====================================================================
// Trains
// ====================================================================

#[test]
fn test_trains_advance_one_unit_per_tick() {
    let mut map = TestMap::with_roster(TrainRoster {
        trains: vec![
            TrainSpec::new(SHEPPARD, 1.0, TravelDirection::Forward),
            // Between Main Street (751) and Woodbine (723), clear of both.
            TrainSpec::new(BLOOR_DANFORTH, 740.0, TravelDirection::Reverse),
        ],
    });
    map.tick(10);
    let trains = map.trains();
    assert_eq!(trains[0].distance, 11.0);
    assert_eq!(trains[1].distance, 730.0);
}

#[test]
fn test_reverse_train_dwells_at_next_station() {
    let mut map = TestMap::with_roster(TrainRoster {
        trains: vec![TrainSpec::new(BLOOR_DANFORTH, 700.0, TravelDirection::Reverse)],
    });
    // Coxwell sits 5 units behind, so the train stops there and holds.
    map.tick(10);
    let train = &map.trains()[0];
    assert_eq!(train.distance, 695.0);
    assert!(matches!(train.phase, TrainPhase::PausedAtStation { .. }));
}

#[test]
fn test_sheppard_round_trip() {
    let mut map = TestMap::with_roster(TrainRoster {
        trains: vec![TrainSpec::new(SHEPPARD, 1.0, TravelDirection::Forward)],
    });
    // 224 units of travel plus three station dwells reach Don Mills.
    map.tick(224 + 3 * 50);
    let train = &map.trains()[0];
    assert_eq!(train.distance, 225.0);
    assert!(matches!(train.phase, TrainPhase::PausedAtTerminus { .. }));

    map.tick(50);
    let train = &map.trains()[0];
    assert_eq!(train.direction, TravelDirection::Reverse);
    assert_eq!(train.current_station_index, 4);

    // Back to Sheppard-Yonge and turned around again.
    map.tick(224 + 3 * 50 + 50);
    let train = &map.trains()[0];
    assert_eq!(train.distance, 1.0);
    assert_eq!(train.direction, TravelDirection::Forward);
    assert_eq!(train.current_station_index, 0);
}

#[test]
fn test_despawned_train_stops() {
    let mut map = TestMap::new();
    let before = map.train_count();
    let world = map.world_mut();
    let first = world
        .query_filtered::<bevy::prelude::Entity, bevy::prelude::With<Train>>()
        .iter(world)
        .next()
        .unwrap();
    assert!(world.despawn(first));
    map.tick(5);
    assert_eq!(map.train_count(), before - 1);
}

#[test]
fn test_frame_time_drives_fixed_ticks() {
    let mut map = TestMap::with_roster(TrainRoster {
        trains: vec![TrainSpec::new(SHEPPARD, 1.0, TravelDirection::Forward)],
    });
    map.run_for(Duration::from_millis(1000));
    // 50 ticks per second, give or take the first frame's rounding.
    let distance = map.trains()[0].distance;
    assert!((49.0..=51.0).contains(&distance), "distance = {distance}");
}
