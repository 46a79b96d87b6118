//! Viewport controller: pan/zoom targets and their animation.
//!
//! Everything that moves the view writes a target (`target_scale`,
//! `target_translate`) on [`ViewportState`]; `animate_viewport` then covers
//! 20% of the remaining distance per 60 Hz frame and snaps once every delta
//! is below the epsilon. The renderer copies the current state onto the
//! camera.

mod gestures;
mod state;
mod systems;


pub use gestures::{dominant_direction, NavigationGate, PinchTracker};
pub use state::{ViewportAnimator, ViewportConfig, ViewportSize, ViewportState};
pub use systems::{
    animate_viewport, fit_viewport_to_size, handle_navigation, handle_zoom, tick_navigation_gate,
    NavigateRequest, ZoomRequest,
};

use bevy::prelude::*;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportConfig>()
            .init_resource::<ViewportSize>()
            .init_resource::<ViewportState>()
            .init_resource::<ViewportAnimator>()
            .init_resource::<NavigationGate>()
            .init_resource::<PinchTracker>()
            .add_event::<NavigateRequest>()
            .add_event::<ZoomRequest>();
        systems::register(app);
    }
}
