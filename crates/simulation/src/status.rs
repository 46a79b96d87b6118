//! Short-lived status line shown under the map (locate results, errors).

use bevy::prelude::*;

use crate::config::STATUS_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Resource, Debug, Default)]
pub struct StatusMessage {
    current: Option<(StatusKind, String)>,
    timer: Timer,
}

impl StatusMessage {
    pub fn post(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.current = Some((kind, text.into()));
        self.timer = Timer::new(STATUS_DURATION, TimerMode::Once);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.post(StatusKind::Info, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.post(StatusKind::Error, text);
    }

    pub fn current(&self) -> Option<(StatusKind, &str)> {
        self.current.as_ref().map(|(kind, text)| (*kind, text.as_str()))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

pub fn expire_status(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.current.is_none() {
        return;
    }
    if status.timer.tick(time.delta()).finished() {
        status.clear();
    }
}

pub struct StatusPlugin;

impl Plugin for StatusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatusMessage>()
            .add_systems(Update, expire_status);
    }
}
