//! Data types for the animated trains.

use bevy::prelude::*;

use crate::routes::toronto::{BLOOR_DANFORTH, SHEPPARD, YONGE_UNIVERSITY};

/// Direction of travel along a line's distance axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDirection {
    /// Increasing distance (towards the last station).
    Forward,
    /// Decreasing distance (towards the first station).
    Reverse,
}

impl TravelDirection {
    pub fn sign(self) -> f32 {
        match self {
            TravelDirection::Forward => 1.0,
            TravelDirection::Reverse => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            TravelDirection::Forward => TravelDirection::Reverse,
            TravelDirection::Reverse => TravelDirection::Forward,
        }
    }
}

/// What the train is doing this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainPhase {
    Running,
    /// Holding at an intermediate station; `remaining` ticks of dwell left.
    PausedAtStation { remaining: u32 },
    /// Holding at the end of the line before reversing.
    PausedAtTerminus { remaining: u32 },
}

/// Position and heading of one car, ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarPose {
    /// Map-space center of the car.
    pub position: Vec2,
    /// Heading in degrees, map space (y down).
    pub angle_degrees: f32,
}

/// How to spawn one train.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSpec {
    pub line: String,
    pub start_distance: f32,
    pub direction: TravelDirection,
}

impl TrainSpec {
    pub fn new(line: &str, start_distance: f32, direction: TravelDirection) -> Self {
        Self {
            line: line.to_string(),
            start_distance,
            direction,
        }
    }
}

/// Trains spawned at startup.
#[derive(Resource, Debug, Clone)]
pub struct TrainRoster {
    pub trains: Vec<TrainSpec>,
}

impl Default for TrainRoster {
    fn default() -> Self {
        use TravelDirection::{Forward, Reverse};
        Self {
            trains: vec![
                TrainSpec::new(BLOOR_DANFORTH, 1.0, Forward),
                TrainSpec::new(BLOOR_DANFORTH, 500.0, Reverse),
                TrainSpec::new(YONGE_UNIVERSITY, 1.0, Forward),
                TrainSpec::new(YONGE_UNIVERSITY, 200.0, Forward),
                TrainSpec::new(YONGE_UNIVERSITY, 400.0, Forward),
                TrainSpec::new(YONGE_UNIVERSITY, 600.0, Forward),
                TrainSpec::new(YONGE_UNIVERSITY, 700.0, Reverse),
                TrainSpec::new(SHEPPARD, 1.0, Forward),
                TrainSpec::new(SHEPPARD, 225.0, Reverse),
            ],
        }
    }
}
