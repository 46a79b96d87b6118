//! The selected station and the single path by which it changes.
//!
//! Map clicks, the station selector, geolocation and directional navigation
//! all send [`SelectStation`]; only [`apply_selection`] writes
//! [`SelectedStation`] and re-aims the viewport.

use bevy::prelude::*;

use crate::routes::{RouteRegistry, StationKey};
use crate::viewport::{ViewportSize, ViewportState};

/// Where a selection request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    MapClick,
    Selector,
    Geolocation,
    Navigation,
    /// Card close button or Escape.
    Dismiss,
}

/// Request to change the selection. `None` clears it.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SelectStation {
    pub station: Option<StationKey>,
    pub source: SelectionSource,
}

impl SelectStation {
    pub fn station(key: StationKey, source: SelectionSource) -> Self {
        Self {
            station: Some(key),
            source,
        }
    }

    pub fn clear(source: SelectionSource) -> Self {
        Self {
            station: None,
            source,
        }
    }
}

/// The currently focused station, if any.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct SelectedStation(pub Option<StationKey>);

impl SelectedStation {
    pub fn key(&self) -> Option<&StationKey> {
        self.0.as_ref()
    }

    pub fn is(&self, key: &StationKey) -> bool {
        self.0.as_ref() == Some(key)
    }
}

/// Apply selection requests in order; the last one in a frame wins.
pub fn apply_selection(
    mut events: EventReader<SelectStation>,
    registry: Res<RouteRegistry>,
    size: Res<ViewportSize>,
    mut selected: ResMut<SelectedStation>,
    mut viewport: ResMut<ViewportState>,
) {
    for event in events.read() {
        let Some(key) = &event.station else {
            if selected.0.is_some() {
                selected.0 = None;
            }
            continue;
        };
        let Some(position) = registry.station_position(key) else {
            warn!(
                "Ignoring {:?} selection of unknown station '{}' on '{}'",
                event.source, key.name, key.line
            );
            continue;
        };
        if !selected.is(key) {
            info!("Selected {} ({}) via {:?}", key.name, key.line, event.source);
            selected.0 = Some(key.clone());
        }
        viewport.center_on(position, size.0);
    }
}

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedStation>()
            .add_event::<SelectStation>()
            .add_systems(Update, apply_selection);
    }
}
