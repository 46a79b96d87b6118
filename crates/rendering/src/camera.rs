//! 2D map camera driven by the simulation's [`ViewportState`].
//!
//! Map space has y pointing down and the viewport maps it to window pixels as
//! `screen = map * scale + translate`. World space is map space with y
//! negated, and the camera sits on the map point under the window center.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::viewport::{ViewportSize, ViewportState};

/// Convert a map-space point to a world-space position at depth `z`.
pub fn map_to_world(point: Vec2, z: f32) -> Vec3 {
    Vec3::new(point.x, -point.y, z)
}

/// Map-space point shown at the center of a `size` window.
pub fn view_center(viewport: &ViewportState, size: Vec2) -> Vec2 {
    (size / 2.0 - viewport.translate) / viewport.scale
}

#[derive(Component)]
pub struct MapCamera;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MapCamera, Msaa::Sample4));
}

/// Keep [`ViewportSize`] in step with the primary window's logical size.
pub fn track_window_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut size: ResMut<ViewportSize>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let logical = Vec2::new(window.width(), window.height());
    if logical.x <= 0.0 || logical.y <= 0.0 {
        return;
    }
    // Only write on change so `fit_viewport_to_size` sees real resizes.
    if size.0 != logical {
        size.0 = logical;
    }
}

/// System: apply the animated viewport to the camera transform and zoom.
pub fn apply_viewport_camera(
    viewport: Res<ViewportState>,
    size: Res<ViewportSize>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<MapCamera>>,
) {
    if !viewport.is_changed() && !size.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };
    let center = view_center(&viewport, size.0);
    transform.translation = map_to_world(center, transform.translation.z);
    projection.scale = 1.0 / viewport.scale.max(f32::EPSILON);
}
