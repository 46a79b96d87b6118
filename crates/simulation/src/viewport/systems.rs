use bevy::prelude::*;

use crate::navigator::{nearest_station_in_direction, Direction};
use crate::routes::RouteRegistry;
use crate::selection::{apply_selection, SelectStation, SelectedStation, SelectionSource};

use super::gestures::NavigationGate;
use super::state::{ViewportAnimator, ViewportConfig, ViewportSize, ViewportState};

/// Step the selection one station towards `direction` (arrow key, wheel or
/// swipe).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateRequest {
    pub direction: Direction,
}

/// Multiply the zoom around a screen anchor (wheel with Ctrl, pinch).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ZoomRequest {
    pub factor: f32,
    pub anchor: Vec2,
}

/// Frame the whole map when the viewport first gets a size, and keep the
/// selected station centered when it is resized.
pub fn fit_viewport_to_size(
    size: Res<ViewportSize>,
    registry: Res<RouteRegistry>,
    selected: Res<SelectedStation>,
    config: Res<ViewportConfig>,
    mut viewport: ResMut<ViewportState>,
) {
    if !size.is_changed() {
        return;
    }
    match selected.key().and_then(|key| registry.station_position(key)) {
        Some(position) => viewport.center_on(position, size.0),
        None => viewport.fit(registry.bounds(), size.0, &config),
    }
}

pub fn tick_navigation_gate(time: Res<Time>, mut gate: ResMut<NavigationGate>) {
    if !gate.is_open() {
        gate.tick(time.delta());
    }
}

/// Resolve directional requests against the selected station.
///
/// Requests are dropped while nothing is selected or during the cooldown
/// that follows a successful step. A step that finds no station leaves the
/// gate open.
pub fn handle_navigation(
    mut requests: EventReader<NavigateRequest>,
    registry: Res<RouteRegistry>,
    selected: Res<SelectedStation>,
    config: Res<ViewportConfig>,
    mut gate: ResMut<NavigationGate>,
    mut select: EventWriter<SelectStation>,
) {
    for request in requests.read() {
        let Some(origin) = selected.key() else {
            continue;
        };
        if !gate.is_open() {
            continue;
        }
        match nearest_station_in_direction(&registry, origin, request.direction) {
            Some(next) => {
                select.send(SelectStation::station(next, SelectionSource::Navigation));
                gate.close(config.navigation_cooldown);
            }
            None => debug!(
                "No station {} of {} ({})",
                request.direction.label(),
                origin.name,
                origin.line
            ),
        }
    }
}

pub fn handle_zoom(
    mut requests: EventReader<ZoomRequest>,
    config: Res<ViewportConfig>,
    mut viewport: ResMut<ViewportState>,
) {
    for request in requests.read() {
        viewport.zoom_by(request.factor, request.anchor, &config);
    }
}

/// Advance the pan/zoom animation in fixed 60 Hz frames.
pub fn animate_viewport(
    time: Res<Time>,
    config: Res<ViewportConfig>,
    mut animator: ResMut<ViewportAnimator>,
    mut viewport: ResMut<ViewportState>,
) {
    if !viewport.is_animating() {
        return;
    }
    animator.advance(time.delta_secs(), &mut viewport, &config);
}

pub(crate) fn register(app: &mut App) {
    app.add_systems(
        Update,
        (
            (tick_navigation_gate, handle_navigation)
                .chain()
                .before(apply_selection),
            (fit_viewport_to_size, handle_zoom, animate_viewport)
                .chain()
                .after(apply_selection),
        ),
    );
}
