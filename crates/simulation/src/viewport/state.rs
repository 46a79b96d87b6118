//! `ViewportState` and its animation arithmetic.

use bevy::prelude::*;

use crate::config::{
    ANIMATION_EPSILON, ANIMATION_FPS, ANIMATION_RATE, FIT_PADDING, MAX_SCALE, MIN_SCALE,
    NAVIGATION_COOLDOWN,
};

use std::time::Duration;

/// Tunables for the viewport controller.
#[derive(Resource, Debug, Clone)]
pub struct ViewportConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Fraction of the remaining delta covered per animation frame.
    pub rate: f32,
    pub epsilon: f32,
    pub frames_per_second: f32,
    pub fit_padding: f32,
    pub navigation_cooldown: Duration,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            rate: ANIMATION_RATE,
            epsilon: ANIMATION_EPSILON,
            frames_per_second: ANIMATION_FPS,
            fit_padding: FIT_PADDING,
            navigation_cooldown: NAVIGATION_COOLDOWN,
        }
    }
}

/// Logical size of the area the map is drawn into, in pixels.
///
/// Kept up to date by the renderer from the primary window.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize(pub Vec2);

impl Default for ViewportSize {
    fn default() -> Self {
        Self(Vec2::new(1280.0, 720.0))
    }
}

/// Current and target pan/zoom of the map.
///
/// `screen = map * scale + translate`. Input writes only the `target_*`
/// fields; [`ViewportState::step`] pulls the current fields towards them.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scale: f32,
    pub translate: Vec2,
    pub target_scale: f32,
    pub target_translate: Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            translate: Vec2::ZERO,
            target_scale: MIN_SCALE,
            target_translate: Vec2::ZERO,
        }
    }
}

impl ViewportState {
    pub fn map_to_screen(&self, point: Vec2) -> Vec2 {
        point * self.scale + self.translate
    }

    pub fn screen_to_map(&self, screen: Vec2) -> Vec2 {
        (screen - self.translate) / self.scale
    }

    /// Set the target scale, clamped to the configured range.
    pub fn set_target_scale(&mut self, scale: f32, config: &ViewportConfig) {
        self.target_scale = scale.clamp(config.min_scale, config.max_scale);
    }

    /// Aim the view so `point` ends up in the middle of a `size` viewport at
    /// the current target scale.
    pub fn center_on(&mut self, point: Vec2, size: Vec2) {
        self.target_translate = size / 2.0 - point * self.target_scale;
    }

    /// Multiply the target scale by `factor` while keeping the map point
    /// under the `anchor` screen position where it is.
    pub fn zoom_by(&mut self, factor: f32, anchor: Vec2, config: &ViewportConfig) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let anchored = (anchor - self.target_translate) / self.target_scale;
        self.set_target_scale(self.target_scale * factor, config);
        self.target_translate = anchor - anchored * self.target_scale;
    }

    /// Frame the rectangle `(min, max)` inside `size` and jump there without
    /// animating.
    pub fn fit(&mut self, bounds: (Vec2, Vec2), size: Vec2, config: &ViewportConfig) {
        let (min, max) = bounds;
        let extent = (max - min).max(Vec2::ONE);
        let room = (size - Vec2::splat(config.fit_padding * 2.0)).max(Vec2::ONE);
        let fitted = (room / extent).min_element();
        self.set_target_scale(fitted, config);
        self.center_on((min + max) / 2.0, size);
        self.snap();
    }

    pub fn is_animating(&self) -> bool {
        self.target_scale != self.scale || self.target_translate != self.translate
    }

    /// Jump straight to the target.
    pub fn snap(&mut self) {
        self.scale = self.target_scale;
        self.translate = self.target_translate;
    }

    /// One animation frame. Returns whether the view is still moving.
    pub fn step(&mut self, config: &ViewportConfig) -> bool {
        let d_scale = self.target_scale - self.scale;
        let d_translate = self.target_translate - self.translate;
        if d_scale.abs() < config.epsilon
            && d_translate.x.abs() < config.epsilon
            && d_translate.y.abs() < config.epsilon
        {
            self.snap();
            return false;
        }
        self.scale += d_scale * config.rate;
        self.translate += d_translate * config.rate;
        true
    }
}

/// Turns variable frame times into fixed-rate animation frames.
#[derive(Resource, Debug, Default, Clone)]
pub struct ViewportAnimator {
    accumulated: f32,
}

impl ViewportAnimator {
    /// Most frames replayed in one call, so a long stall does not freeze
    /// the app catching up.
    const MAX_FRAMES_PER_ADVANCE: u32 = 8;

    /// Run as many animation frames as `dt` seconds cover. Returns the
    /// number of frames run.
    pub fn advance(&mut self, dt: f32, state: &mut ViewportState, config: &ViewportConfig) -> u32 {
        if !state.is_animating() {
            self.accumulated = 0.0;
            return 0;
        }
        let frame = 1.0 / config.frames_per_second;
        self.accumulated += dt.max(0.0);
        let mut frames = 0;
        while self.accumulated >= frame && frames < Self::MAX_FRAMES_PER_ADVANCE {
            self.accumulated -= frame;
            frames += 1;
            if !state.step(config) {
                self.accumulated = 0.0;
                break;
            }
        }
        if frames == Self::MAX_FRAMES_PER_ADVANCE {
            self.accumulated = self.accumulated.min(frame);
        }
        frames
    }
}
