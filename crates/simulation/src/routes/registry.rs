//! `RouteRegistry`: the validated, read-only table of lines.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use bevy::prelude::*;

use super::types::{Line, StationKey, StationRef};

/// Problems found while validating route data.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    /// Two lines share an id.
    DuplicateLine(String),
    /// A line has no geometry to walk.
    NoSegments(String),
    /// A line has no stations, so trains have nowhere to turn around.
    NoStations(String),
    /// Station names key lookups, so they must be unique within a line.
    DuplicateStation { line: String, station: String },
    /// A station distance is NaN or infinite.
    NonFiniteDistance { line: String, station: String },
    /// A station sits before the start of its line.
    NegativeDistance { line: String, station: String },
    /// Station distances must strictly increase along a line.
    NotIncreasing {
        line: String,
        station: String,
        previous: f32,
        distance: f32,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::DuplicateLine(id) => write!(f, "line '{id}' is defined twice"),
            RouteError::NoSegments(id) => write!(f, "line '{id}' has no segments"),
            RouteError::NoStations(id) => write!(f, "line '{id}' has no stations"),
            RouteError::DuplicateStation { line, station } => {
                write!(f, "station '{station}' appears twice on '{line}'")
            }
            RouteError::NonFiniteDistance { line, station } => {
                write!(f, "station '{station}' on '{line}' has a non-finite distance")
            }
            RouteError::NegativeDistance { line, station } => {
                write!(f, "station '{station}' on '{line}' has a negative distance")
            }
            RouteError::NotIncreasing {
                line,
                station,
                previous,
                distance,
            } => write!(
                f,
                "station '{station}' on '{line}' is at {distance}, not after the previous station at {previous}"
            ),
        }
    }
}

impl std::error::Error for RouteError {}

/// Process-wide immutable line table.
///
/// Built once at startup and inserted as a resource; systems only ever see
/// `Res<RouteRegistry>`.
#[derive(Resource, Debug, Clone)]
pub struct RouteRegistry {
    lines: BTreeMap<String, Line>,
}

impl RouteRegistry {
    /// Validate `lines` and build the registry.
    ///
    /// Stations placed past the end of the geometry are accepted with a
    /// warning: they saturate to the last point of the route.
    pub fn new(lines: Vec<Line>) -> Result<Self, RouteError> {
        let mut table = BTreeMap::new();
        for line in lines {
            validate_line(&line)?;
            if line.end_distance() > line.length() + 1.0 {
                warn!(
                    "Line '{}': last station at {} is past the route end ({:.1}); it will be drawn at the end point",
                    line.id,
                    line.end_distance(),
                    line.length()
                );
            }
            if table.contains_key(&line.id) {
                return Err(RouteError::DuplicateLine(line.id));
            }
            table.insert(line.id.clone(), line);
        }
        Ok(Self { lines: table })
    }

    pub fn lines_by_name(&self) -> &BTreeMap<String, Line> {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Every station on every line, tagged with its line.
    pub fn all_stations(&self) -> Vec<StationRef<'_>> {
        self.iter_stations().collect()
    }

    pub fn iter_stations(&self) -> impl Iterator<Item = StationRef<'_>> {
        self.lines.values().flat_map(|line| {
            line.stations
                .iter()
                .enumerate()
                .map(move |(index, station)| StationRef {
                    line,
                    station,
                    index,
                })
        })
    }

    pub fn station(&self, key: &StationKey) -> Option<StationRef<'_>> {
        let line = self.lines.get(&key.line)?;
        let index = line.station_index(&key.name)?;
        Some(StationRef {
            line,
            station: &line.stations[index],
            index,
        })
    }

    pub fn station_position(&self, key: &StationKey) -> Option<Vec2> {
        self.station(key).map(|s| s.position())
    }

    pub fn station_count(&self) -> usize {
        self.lines.values().map(|l| l.stations.len()).sum()
    }

    /// Axis-aligned bounds of all line geometry as `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for point in self.lines.values().flat_map(|l| l.points().iter()) {
            min = min.min(*point);
            max = max.max(*point);
        }
        if min.x > max.x {
            return (Vec2::ZERO, Vec2::ZERO);
        }
        (min, max)
    }
}

fn validate_line(line: &Line) -> Result<(), RouteError> {
    if line.segments.is_empty() {
        return Err(RouteError::NoSegments(line.id.clone()));
    }
    if line.stations.is_empty() {
        return Err(RouteError::NoStations(line.id.clone()));
    }
    let mut previous: Option<f32> = None;
    let mut names = HashSet::new();
    for station in &line.stations {
        if !names.insert(station.name.as_str()) {
            return Err(RouteError::DuplicateStation {
                line: line.id.clone(),
                station: station.name.clone(),
            });
        }
        if !station.distance.is_finite() {
            return Err(RouteError::NonFiniteDistance {
                line: line.id.clone(),
                station: station.name.clone(),
            });
        }
        if station.distance < 0.0 {
            return Err(RouteError::NegativeDistance {
                line: line.id.clone(),
                station: station.name.clone(),
            });
        }
        if let Some(prev) = previous {
            if station.distance <= prev {
                return Err(RouteError::NotIncreasing {
                    line: line.id.clone(),
                    station: station.name.clone(),
                    previous: prev,
                    distance: station.distance,
                });
            }
        }
        previous = Some(station.distance);
    }
    Ok(())
}
