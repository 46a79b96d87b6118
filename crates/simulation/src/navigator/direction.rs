use std::cmp::Ordering;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::routes::{RouteRegistry, StationKey, StationRef};

/// Screen direction in map space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Whether `delta` (candidate minus origin) lies strictly on this side.
    pub fn contains(self, delta: Vec2) -> bool {
        match self {
            Direction::Up => delta.y < 0.0,
            Direction::Down => delta.y > 0.0,
            Direction::Left => delta.x < 0.0,
            Direction::Right => delta.x > 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Order two candidates by distance, then station name, then line id.
fn closer(a: &(f32, StationRef<'_>), b: &(f32, StationRef<'_>)) -> Ordering {
    a.0.total_cmp(&b.0)
        .then_with(|| a.1.name().cmp(b.1.name()))
        .then_with(|| a.1.line_id().cmp(b.1.line_id()))
}

/// The Euclidean-nearest station strictly on the `direction` side of `origin`.
///
/// Candidates span every line. The origin itself never qualifies, and an
/// origin unknown to the registry yields `None`.
pub fn nearest_station_in_direction(
    registry: &RouteRegistry,
    origin: &StationKey,
    direction: Direction,
) -> Option<StationKey> {
    let from = registry.station_position(origin)?;
    registry
        .iter_stations()
        .filter(|s| !s.is(origin))
        .filter_map(|s| {
            let delta = s.position() - from;
            direction.contains(delta).then(|| (delta.length(), s))
        })
        .min_by(closer)
        .map(|(_, s)| s.key())
}

/// The station closest to `point` within `radius` map units, if any.
pub fn station_at_point(registry: &RouteRegistry, point: Vec2, radius: f32) -> Option<StationKey> {
    registry
        .iter_stations()
        .filter_map(|s| {
            let d = s.position().distance(point);
            (d <= radius).then_some((d, s))
        })
        .min_by(closer)
        .map(|(_, s)| s.key())
}
