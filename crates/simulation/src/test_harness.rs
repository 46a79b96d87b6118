//! # TestMap: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` without a window or renderer.
//! Time only moves when a test says so: [`TestMap::tick`] runs the fixed
//! train schedule directly and [`TestMap::run_for`] advances frame time in
//! small steps, so results never depend on wall-clock speed.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::geolocation::{LocateRequest, LocationSource};
use crate::navigator::Direction;
use crate::routes::StationKey;
use crate::selection::{SelectStation, SelectedStation, SelectionSource};
use crate::stats::{DataConfig, Datasets, Table};
use crate::trains::{Train, TrainRoster, TrainState};
use crate::viewport::{NavigateRequest, ViewportSize, ViewportState};
use crate::SimulationPlugin;

/// Frame length used by [`TestMap::run_for`].
const FRAME: Duration = Duration::from_millis(50);

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestMap {
    app: App,
}

impl Default for TestMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMap {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// The built-in Toronto map with the default trains, empty datasets and
    /// no location source.
    pub fn new() -> Self {
        Self::build(|_| {})
    }

    /// Like [`TestMap::new`] but spawning `roster` instead of the default
    /// trains.
    pub fn with_roster(roster: TrainRoster) -> Self {
        Self::build(move |app| {
            app.insert_resource(roster);
        })
    }

    fn build(configure: impl FnOnce(&mut App)) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));

        // Provided up front so nothing reads the filesystem or environment.
        app.insert_resource(Datasets::default());
        app.insert_resource(DataConfig::default());
        app.insert_resource(LocationSource::default());
        configure(&mut app);

        app.add_plugins(SimulationPlugin);
        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern)
    // -----------------------------------------------------------------------

    pub fn with_datasets(mut self, datasets: Datasets) -> Self {
        self.app.insert_resource(datasets);
        self
    }

    pub fn with_location(mut self, source: LocationSource) -> Self {
        self.app.insert_resource(source);
        self
    }

    /// Resize the viewport and let the resize handling run.
    pub fn with_viewport_size(mut self, size: Vec2) -> Self {
        self.app.insert_resource(ViewportSize(size));
        self.update();
        self
    }

    // -----------------------------------------------------------------------
    // Driving time
    // -----------------------------------------------------------------------

    /// Run `n` fixed train ticks.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// One frame with no time passing.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Let `duration` of frame time pass in 50 ms frames. Fixed train ticks
    /// fire as the time accumulates.
    pub fn run_for(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() {
            let step = remaining.min(FRAME);
            self.app
                .insert_resource(TimeUpdateStrategy::ManualDuration(step));
            self.app.update();
            remaining -= step;
        }
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    }

    /// Run frames until the viewport animation settles (at most ten seconds).
    pub fn settle_viewport(&mut self) {
        for _ in 0..200 {
            if !self.viewport().is_animating() {
                return;
            }
            self.run_for(FRAME);
        }
        panic!("viewport animation did not settle");
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub fn send_event<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Select a station through the selector and apply it.
    pub fn select(&mut self, line: &str, name: &str) {
        self.send_event(SelectStation::station(
            StationKey::new(line, name),
            SelectionSource::Selector,
        ));
        self.update();
    }

    pub fn deselect(&mut self) {
        self.send_event(SelectStation::clear(SelectionSource::Dismiss));
        self.update();
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.send_event(NavigateRequest { direction });
        self.update();
    }

    pub fn locate(&mut self) {
        self.send_event(LocateRequest);
        self.update();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    /// Access the ECS world mutably (needed for queries in Bevy).
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn selected(&self) -> Option<StationKey> {
        self.resource::<SelectedStation>().0.clone()
    }

    pub fn viewport(&self) -> ViewportState {
        *self.resource::<ViewportState>()
    }

    /// Every train state, ordered by entity spawn order.
    pub fn trains(&mut self) -> Vec<TrainState> {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Train)>();
        let mut trains: Vec<(Entity, TrainState)> = query
            .iter(world)
            .map(|(entity, train)| (entity, train.state.clone()))
            .collect();
        trains.sort_by_key(|(entity, _)| *entity);
        trains.into_iter().map(|(_, state)| state).collect()
    }

    pub fn train_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query::<&Train>().iter(world).count()
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const SAMPLE_DELAYS: &str = r#"[
    ["line","standard_name","Hour","Days_With_Delays","Average_Delay_Minutes","Delay_Likelihood_Percent"],
    ["Yonge-University","Union",8,310,5.5,42.0],
    ["Yonge-University","Union",17,280,6.0,38.5],
    ["Sheppard","Bayview",7,12,3.0,2.5]
]"#;

const SAMPLE_INCIDENTS: &str = r#"[
    ["Year","Date","Time","standard_name","line","Description","Min Delay"],
    [2019,"2019-02-03","08:12","Union","Yonge-University","Passenger Assistance Alarm",5],
    [2024,"2024-02-14","17:40","Union","Yonge-University","Disorderly Patron",9],
    [2024,"2024-07-01","12:00","Union","Yonge-University",null,14],
    [2023,"2023-11-20","06:30","Bayview","Sheppard","Signal Problem",4]
]"#;

const SAMPLE_RANKING: &str = r#"[
    ["danger_rank","standard_name","line","Incident_Count","Average_Danger","Combined_Score","Usage","usage_rank","latitude","longitude"],
    [2,"Union","Yonge-University",402,2.0,201.0,136600.0,2.0,43.6453,-79.3806],
    [60,"Bayview","Sheppard",35,1.1,19.0,6500.0,64.0,43.7669,-79.3866],
    [70,"Nowhere","Eglinton Crosstown",1,1.0,1.0,10.0,75.0,43.7000,-79.4000]
]"#;

/// Small datasets covering Union and Bayview, plus one ranked station that
/// is not on the map.
pub fn sample_datasets() -> Datasets {
    let parse = |name: &str, json: &str| {
        Table::parse(name, json).unwrap_or_else(|e| panic!("bad fixture: {e}"))
    };
    Datasets::from_tables(
        &parse("delay_likelihood.json", SAMPLE_DELAYS),
        &parse("incidents.json", SAMPLE_INCIDENTS),
        &parse("station_ranking_with_latlon.json", SAMPLE_RANKING),
    )
    .unwrap_or_else(|e| panic!("bad fixture: {e}"))
}
