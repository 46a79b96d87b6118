//! Polyline kernel shared by every map consumer.
//!
//! A route is a start point plus relative vectors. Everything drawn on the map
//! (station dots, train cars, the point the viewport centers on) is derived
//! from a scalar distance along such a polyline through the functions here.
//!
//! All functions are total. Out-of-range distances saturate to the route ends;
//! [`Projection`] records which case happened so callers can tell a clamp from
//! a real interpolation.

use bevy::math::Vec2;

/// Result of projecting a distance onto a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// The distance lies on the polyline.
    Interpolated(Vec2),
    /// The distance was negative; the first point is returned.
    ClampedToStart(Vec2),
    /// The distance exceeded the polyline length; the last point is returned.
    ClampedToEnd(Vec2),
}

impl Projection {
    pub fn point(self) -> Vec2 {
        match self {
            Projection::Interpolated(p)
            | Projection::ClampedToStart(p)
            | Projection::ClampedToEnd(p) => p,
        }
    }

    pub fn is_clamped(self) -> bool {
        !matches!(self, Projection::Interpolated(_))
    }
}

/// Prefix-sum `segments` from `start`. Returns `segments.len() + 1` points.
pub fn absolute_points(start: Vec2, segments: &[Vec2]) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(segments.len() + 1);
    let mut current = start;
    points.push(current);
    for segment in segments {
        current += *segment;
        points.push(current);
    }
    points
}

/// Total Euclidean length of the polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Position at `target` distance along the polyline from `points[0]`.
///
/// Walks consecutive pairs accumulating segment lengths and interpolates
/// inside the first segment whose cumulative length reaches `target`.
/// Zero-length segments are skipped. An empty slice projects to the origin.
pub fn point_at_distance(points: &[Vec2], target: f32) -> Projection {
    let Some(&first) = points.first() else {
        return Projection::ClampedToStart(Vec2::ZERO);
    };
    if target < 0.0 {
        return Projection::ClampedToStart(first);
    }
    if target == 0.0 {
        return Projection::Interpolated(first);
    }

    let mut accumulated = 0.0;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = a.distance(b);
        if length <= 0.0 {
            continue;
        }
        if accumulated + length >= target {
            let t = (target - accumulated) / length;
            return Projection::Interpolated(a + (b - a) * t);
        }
        accumulated += length;
    }

    // Saturate at the end of the route.
    let last = points[points.len() - 1];
    Projection::ClampedToEnd(last)
}

/// Heading in degrees (`atan2(dy, dx)`, map space, y down) of the segment
/// containing `distance`.
///
/// Negative distances report the first segment's heading. Distances past the
/// end of the route return `0.0`, which is a different fallback than
/// [`point_at_distance`] uses.
pub fn angle_at_distance(points: &[Vec2], distance: f32) -> f32 {
    let mut accumulated = 0.0;
    for pair in points.windows(2) {
        let delta = pair[1] - pair[0];
        let length = delta.length();
        if length <= 0.0 {
            continue;
        }
        if accumulated + length >= distance {
            return delta.y.atan2(delta.x).to_degrees();
        }
        accumulated += length;
    }
    0.0
}
