use std::time::Duration;

/// Fixed simulation step for trains (50 Hz). One tick moves a train one map unit.
pub const TRAIN_TICK: Duration = Duration::from_millis(20);
/// Distance a running train covers per tick, in map units.
pub const TRAIN_STEP: f32 = 1.0;
/// Dwell at a station or terminus: 1000 ms = 50 ticks.
pub const DWELL_TICKS: u32 = 50;
/// Reverse-running trains turn around here rather than at exactly 0.
pub const ROUTE_ORIGIN_DISTANCE: f32 = 1.0;

/// Cars drawn per train.
pub const CARS_PER_TRAIN: usize = 6;
/// Distance between consecutive car centers.
pub const CAR_SPACING: f32 = 2.5;
/// Car rectangle size in map units (length along the track, width across).
pub const CAR_LENGTH: f32 = 4.0;
pub const CAR_WIDTH: f32 = 3.0;

/// Viewport scale bounds (map units to logical pixels).
pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 5.0;
/// Fraction of the remaining delta covered per animation frame.
pub const ANIMATION_RATE: f32 = 0.2;
/// Animation snaps to target once every remaining delta is below this.
pub const ANIMATION_EPSILON: f32 = 0.001;
/// Animation frames per second.
pub const ANIMATION_FPS: f32 = 60.0;
/// Screen margin kept around the whole map in the initial overview, in pixels.
pub const FIT_PADDING: f32 = 24.0;
/// Directional navigation is ignored for this long after a successful step.
pub const NAVIGATION_COOLDOWN: Duration = Duration::from_millis(900);

/// Map units around a station dot that still count as a click on it.
pub const STATION_HIT_RADIUS: f32 = 6.0;

/// How long a status line stays visible.
pub const STATUS_DURATION: Duration = Duration::from_secs(6);

/// Mean Earth radius used for haversine distances, in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "SUBWAY_DELAYS_DATA_DIR";
/// Dataset directory used when `DATA_DIR_ENV` is unset.
pub const DEFAULT_DATA_DIR: &str = "assets/data";
/// Environment variable providing a fixed `"lat,lon"` location reading.
pub const LOCATION_ENV: &str = "SUBWAY_DELAYS_LOCATION";

/// The two years compared in the monthly chart.
pub const COMPARISON_YEARS: (i32, i32) = (2019, 2024);
/// Incidents listed on a station card.
pub const TOP_INCIDENT_COUNT: usize = 10;
/// Incident descriptions shown individually before the rest fold into "Other".
pub const INCIDENT_GROUP_COUNT: usize = 5;
