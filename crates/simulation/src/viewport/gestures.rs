//! Gesture interpretation: pinch zoom, swipe direction and the navigation
//! cooldown.

use std::time::Duration;

use bevy::prelude::*;

use crate::navigator::Direction;

/// Follows a two-finger pinch across successive touch moves.
#[derive(Resource, Debug, Default, Clone)]
pub struct PinchTracker {
    previous: Option<f32>,
}

impl PinchTracker {
    /// Feed the current finger positions. Returns the zoom factor relative to
    /// the previous move, or `None` on the first move of a pinch.
    pub fn update(&mut self, a: Vec2, b: Vec2) -> Option<f32> {
        let distance = a.distance(b);
        let factor = self
            .previous
            .filter(|previous| *previous > f32::EPSILON)
            .map(|previous| distance / previous);
        self.previous = Some(distance);
        factor
    }

    /// Forget the last pinch, e.g. when a finger lifts.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn is_active(&self) -> bool {
        self.previous.is_some()
    }
}

/// The cardinal direction of a screen-space motion (y down), by dominant axis.
///
/// Ties go to the vertical axis. A zero motion has no direction.
pub fn dominant_direction(dx: f32, dy: f32) -> Option<Direction> {
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    let direction = if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}

/// Cooldown between directional station steps.
#[derive(Resource, Debug, Clone, Default)]
pub struct NavigationGate {
    remaining: Duration,
}

impl NavigationGate {
    pub fn is_open(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Close the gate for `cooldown` after a successful step.
    pub fn close(&mut self, cooldown: Duration) {
        self.remaining = cooldown;
    }

    pub fn tick(&mut self, delta: Duration) {
        self.remaining = self.remaining.saturating_sub(delta);
    }
}
