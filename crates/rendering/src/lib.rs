use bevy::prelude::*;

use simulation::viewport::{animate_viewport, fit_viewport_to_size, handle_navigation};

pub mod camera;
pub mod egui_input_guard;
pub mod input;
pub mod map_render;
pub mod train_render;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(map_render::BACKGROUND))
            .add_systems(
                Startup,
                (camera::setup_camera, map_render::spawn_route_meshes).chain(),
            )
            .add_systems(
                Update,
                (
                    input::handle_map_click,
                    input::handle_mouse_wheel,
                    input::handle_keyboard,
                    input::handle_touch,
                )
                    .before(handle_navigation),
            )
            .add_systems(
                Update,
                camera::track_window_size.before(fit_viewport_to_size),
            )
            .add_systems(
                Update,
                (
                    camera::apply_viewport_camera.after(animate_viewport),
                    map_render::draw_selection_ring,
                ),
            )
            .add_systems(
                Update,
                (
                    train_render::spawn_train_cars,
                    train_render::update_train_cars,
                    train_render::despawn_orphaned_cars,
                )
                    .chain(),
            );
    }
}
