//! Map input: clicks and taps select stations, wheel and swipes step between
//! stations, Ctrl+wheel and pinches zoom, arrow keys navigate and Escape
//! dismisses the station card.
//!
//! These systems only translate raw input into simulation events
//! ([`SelectStation`], [`NavigateRequest`], [`ZoomRequest`]); the simulation
//! decides what actually happens.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use simulation::config::STATION_HIT_RADIUS;
use simulation::navigator::{station_at_point, Direction};
use simulation::routes::RouteRegistry;
use simulation::viewport::{
    dominant_direction, NavigateRequest, PinchTracker, ViewportSize, ViewportState, ZoomRequest,
};
use simulation::{SelectStation, SelectionSource};

use crate::egui_input_guard::{egui_wants_keyboard, egui_wants_pointer};

/// Zoom multiplier per wheel line with Ctrl held.
const WHEEL_ZOOM_STEP: f32 = 1.1;
/// Pixel-unit wheel deltas (trackpads, browsers) per line.
const PIXELS_PER_LINE: f32 = 100.0;
/// Zoom multiplier per `+`/`-` key press.
const KEY_ZOOM_STEP: f32 = 1.25;
/// Finger travel before a one-finger touch counts as a swipe.
const SWIPE_THRESHOLD: f32 = 30.0;

/// Wheel delta in lines. Winit reports positive values when the content
/// should move right and down, the opposite sign of a browser wheel delta.
fn wheel_lines(event: &MouseWheel) -> Vec2 {
    let delta = Vec2::new(event.x, event.y);
    match event.unit {
        MouseScrollUnit::Line => delta,
        MouseScrollUnit::Pixel => delta / PIXELS_PER_LINE,
    }
}

/// Direction to step for an accumulated wheel delta in lines.
pub fn wheel_direction(lines: Vec2) -> Option<Direction> {
    dominant_direction(-lines.x, -lines.y)
}

/// Direction to step for a finished one-finger gesture, or `None` for a tap.
/// Dragging the map towards the top reveals what lies below it.
pub fn swipe_direction(delta: Vec2) -> Option<Direction> {
    if delta.length() < SWIPE_THRESHOLD {
        return None;
    }
    dominant_direction(-delta.x, -delta.y)
}

fn select_at(
    screen: Vec2,
    viewport: &ViewportState,
    registry: &RouteRegistry,
    select: &mut EventWriter<SelectStation>,
) {
    let point = viewport.screen_to_map(screen);
    if let Some(key) = station_at_point(registry, point, STATION_HIT_RADIUS) {
        select.send(SelectStation::station(key, SelectionSource::MapClick));
    }
}

pub fn handle_map_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    viewport: Res<ViewportState>,
    registry: Res<RouteRegistry>,
    mut contexts: EguiContexts,
    mut select: EventWriter<SelectStation>,
) {
    if !buttons.just_pressed(MouseButton::Left) || egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        select_at(cursor, &viewport, &registry, &mut select);
    }
}

/// Plain wheel steps between stations; Ctrl+wheel zooms around the cursor.
#[allow(clippy::too_many_arguments)]
pub fn handle_mouse_wheel(
    mut wheel: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    size: Res<ViewportSize>,
    mut contexts: EguiContexts,
    mut navigate: EventWriter<NavigateRequest>,
    mut zoom: EventWriter<ZoomRequest>,
) {
    let lines: Vec2 = wheel.read().map(wheel_lines).sum();
    if lines == Vec2::ZERO || egui_wants_pointer(&mut contexts) {
        return;
    }

    if keys.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) {
        let anchor = windows
            .get_single()
            .ok()
            .and_then(Window::cursor_position)
            .unwrap_or(size.0 / 2.0);
        zoom.send(ZoomRequest {
            factor: WHEEL_ZOOM_STEP.powf(lines.y),
            anchor,
        });
        return;
    }

    if let Some(direction) = wheel_direction(lines) {
        navigate.send(NavigateRequest { direction });
    }
}

pub fn handle_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    size: Res<ViewportSize>,
    mut contexts: EguiContexts,
    mut navigate: EventWriter<NavigateRequest>,
    mut zoom: EventWriter<ZoomRequest>,
    mut select: EventWriter<SelectStation>,
) {
    if egui_wants_keyboard(&mut contexts) {
        return;
    }

    let arrows = [
        (KeyCode::ArrowUp, Direction::Up),
        (KeyCode::ArrowDown, Direction::Down),
        (KeyCode::ArrowLeft, Direction::Left),
        (KeyCode::ArrowRight, Direction::Right),
    ];
    for (key, direction) in arrows {
        if keys.just_pressed(key) {
            navigate.send(NavigateRequest { direction });
        }
    }

    let center = size.0 / 2.0;
    if keys.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        zoom.send(ZoomRequest {
            factor: KEY_ZOOM_STEP,
            anchor: center,
        });
    }
    if keys.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        zoom.send(ZoomRequest {
            factor: 1.0 / KEY_ZOOM_STEP,
            anchor: center,
        });
    }

    if keys.just_pressed(KeyCode::Escape) {
        select.send(SelectStation::clear(SelectionSource::Dismiss));
    }
}

/// Two fingers pinch-zoom around their midpoint. A single finger swipes to
/// the next station, or selects on a tap. Lifting from a pinch never counts
/// as a swipe.
#[allow(clippy::too_many_arguments)]
pub fn handle_touch(
    touches: Res<Touches>,
    viewport: Res<ViewportState>,
    registry: Res<RouteRegistry>,
    mut pinch: ResMut<PinchTracker>,
    mut was_pinching: Local<bool>,
    mut contexts: EguiContexts,
    mut navigate: EventWriter<NavigateRequest>,
    mut zoom: EventWriter<ZoomRequest>,
    mut select: EventWriter<SelectStation>,
) {
    let active: Vec<Vec2> = touches.iter().map(|t| t.position()).collect();

    if let &[a, b] = active.as_slice() {
        *was_pinching = true;
        if let Some(factor) = pinch.update(a, b) {
            zoom.send(ZoomRequest {
                factor,
                anchor: (a + b) / 2.0,
            });
        }
        return;
    }
    pinch.reset();

    if !*was_pinching && !egui_wants_pointer(&mut contexts) {
        for touch in touches.iter_just_released() {
            let delta = touch.position() - touch.start_position();
            match swipe_direction(delta) {
                Some(direction) => {
                    navigate.send(NavigateRequest { direction });
                }
                None => select_at(touch.position(), &viewport, &registry, &mut select),
            }
        }
    }
    if active.is_empty() {
        *was_pinching = false;
    }
}
