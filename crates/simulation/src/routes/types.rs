//! Line and station types for the route table.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::{self, Projection};

/// Owned identity of a station. Names repeat across lines ("Spadina",
/// "St. George", "Bloor-Yonge"), so lookups always key on both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationKey {
    pub line: String,
    pub name: String,
}

impl StationKey {
    pub fn new(line: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            name: name.into(),
        }
    }
}

/// A station as authored: a name and a distance along its line.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    /// Cumulative path length from the line's start point, in map units.
    pub distance: f32,
}

/// A named subway line.
///
/// `points` and `length` are derived once from `start` and `segments` when
/// the line is built and never recomputed.
#[derive(Debug, Clone)]
pub struct Line {
    pub id: String,
    /// sRGB color as authored.
    pub color: [u8; 3],
    pub start: Vec2,
    pub segments: Vec<Vec2>,
    /// Stations in strictly increasing distance order.
    pub stations: Vec<Station>,
    points: Vec<Vec2>,
    length: f32,
}

impl Line {
    pub fn new(
        id: impl Into<String>,
        color: [u8; 3],
        start: Vec2,
        segments: Vec<Vec2>,
        stations: Vec<Station>,
    ) -> Self {
        let points = geometry::absolute_points(start, &segments);
        let length = geometry::polyline_length(&points);
        Self {
            id: id.into(),
            color,
            start,
            segments,
            stations,
            points,
            length,
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Total geometric length of the line.
    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb_u8(r, g, b)
    }

    pub fn project(&self, distance: f32) -> Projection {
        geometry::point_at_distance(&self.points, distance)
    }

    pub fn position_at(&self, distance: f32) -> Vec2 {
        self.project(distance).point()
    }

    pub fn angle_at(&self, distance: f32) -> f32 {
        geometry::angle_at_distance(&self.points, distance)
    }

    pub fn station_index(&self, name: &str) -> Option<usize> {
        self.stations.iter().position(|s| s.name == name)
    }

    /// Distance of the final station (where forward trains turn around).
    pub fn end_distance(&self) -> f32 {
        self.stations.last().map_or(0.0, |s| s.distance)
    }
}

/// Borrowed view of one station together with its line.
#[derive(Debug, Clone, Copy)]
pub struct StationRef<'a> {
    pub line: &'a Line,
    pub station: &'a Station,
    pub index: usize,
}

impl StationRef<'_> {
    pub fn key(&self) -> StationKey {
        StationKey::new(self.line.id.as_str(), self.station.name.as_str())
    }

    pub fn name(&self) -> &str {
        &self.station.name
    }

    pub fn line_id(&self) -> &str {
        &self.line.id
    }

    pub fn position(&self) -> Vec2 {
        self.line.position_at(self.station.distance)
    }

    pub fn is(&self, key: &StationKey) -> bool {
        self.line.id == key.line && self.station.name == key.name
    }
}
