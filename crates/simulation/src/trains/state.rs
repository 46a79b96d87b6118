//! `TrainState`: the per-train state machine.

use bevy::prelude::*;

use crate::config::{CARS_PER_TRAIN, CAR_SPACING, DWELL_TICKS, ROUTE_ORIGIN_DISTANCE, TRAIN_STEP};
use crate::routes::Line;

use super::types::*;

/// One train shuttling back and forth along a line.
///
/// Advanced only through [`TrainState::tick`], one fixed step at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainState {
    pub line: String,
    /// Canonical distance along the line (the middle of the train).
    pub distance: f32,
    pub direction: TravelDirection,
    /// Last station the train passed in its direction of travel.
    pub current_station_index: usize,
    pub phase: TrainPhase,
}

impl TrainState {
    /// Place a train on `line` according to `spec`.
    ///
    /// The start distance is clamped to the served part of the line and the
    /// current station is the last one already behind the train, so a train
    /// spawned mid-line only stops at stations ahead of it.
    pub fn new(spec: &TrainSpec, line: &Line) -> Self {
        let end = line.end_distance().max(ROUTE_ORIGIN_DISTANCE);
        let distance = spec.start_distance.clamp(ROUTE_ORIGIN_DISTANCE, end);
        let last = line.stations.len().saturating_sub(1);
        let current_station_index = match spec.direction {
            TravelDirection::Forward => line
                .stations
                .iter()
                .rposition(|s| s.distance <= distance)
                .unwrap_or(0),
            TravelDirection::Reverse => line
                .stations
                .iter()
                .position(|s| s.distance >= distance)
                .unwrap_or(last),
        };
        Self {
            line: line.id.clone(),
            distance,
            direction: spec.direction,
            current_station_index,
            phase: TrainPhase::Running,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase != TrainPhase::Running
    }

    /// Advance one fixed tick.
    pub fn tick(&mut self, line: &Line) {
        match self.phase {
            TrainPhase::Running => self.run(line),
            TrainPhase::PausedAtStation { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining > 0 {
                    self.phase = TrainPhase::PausedAtStation { remaining };
                    return;
                }
                self.current_station_index = match self.direction {
                    TravelDirection::Forward => self.current_station_index + 1,
                    TravelDirection::Reverse => self.current_station_index.saturating_sub(1),
                };
                self.phase = TrainPhase::Running;
            }
            TrainPhase::PausedAtTerminus { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining > 0 {
                    self.phase = TrainPhase::PausedAtTerminus { remaining };
                    return;
                }
                self.direction = self.direction.flipped();
                self.current_station_index = match self.direction {
                    TravelDirection::Forward => 0,
                    TravelDirection::Reverse => line.stations.len().saturating_sub(1),
                };
                self.phase = TrainPhase::Running;
            }
        }
    }

    fn run(&mut self, line: &Line) {
        if line.stations.is_empty() {
            return;
        }
        let end = line.end_distance();
        let next = self.distance + TRAIN_STEP * self.direction.sign();

        // Termini take precedence over intermediate stations.
        match self.direction {
            TravelDirection::Forward if next >= end => {
                self.distance = end;
                self.phase = TrainPhase::PausedAtTerminus {
                    remaining: DWELL_TICKS,
                };
                return;
            }
            TravelDirection::Reverse if next <= ROUTE_ORIGIN_DISTANCE => {
                self.distance = ROUTE_ORIGIN_DISTANCE;
                self.phase = TrainPhase::PausedAtTerminus {
                    remaining: DWELL_TICKS,
                };
                return;
            }
            _ => {}
        }

        let upcoming = match self.direction {
            TravelDirection::Forward => line.stations.get(self.current_station_index + 1),
            TravelDirection::Reverse => self
                .current_station_index
                .checked_sub(1)
                .and_then(|i| line.stations.get(i)),
        };

        self.distance = next;
        if let Some(station) = upcoming {
            let arrived = match self.direction {
                TravelDirection::Forward => next >= station.distance,
                TravelDirection::Reverse => next <= station.distance,
            };
            if arrived {
                self.phase = TrainPhase::PausedAtStation {
                    remaining: DWELL_TICKS,
                };
            }
        }
    }

    /// Map-space position of the train's center.
    pub fn position(&self, line: &Line) -> Vec2 {
        line.position_at(self.distance)
    }

    /// Poses of every car, spaced evenly around the canonical distance and
    /// each rotated to the heading of its own segment.
    pub fn car_poses(&self, line: &Line) -> [CarPose; CARS_PER_TRAIN] {
        let middle = (CARS_PER_TRAIN as f32 - 1.0) / 2.0;
        std::array::from_fn(|i| {
            let distance = self.distance + (i as f32 - middle) * CAR_SPACING;
            CarPose {
                position: line.position_at(distance),
                angle_degrees: line.angle_at(distance),
            }
        })
    }
}
