use bevy::math::Vec2;

use crate::routes::{RouteRegistry, StationKey};
use crate::selection::{SelectStation, SelectionSource};
use crate::test_harness::TestMap;
use crate::viewport::{ViewportSize, ViewportState};

// ====================================================================
// Selection and viewport targeting
// ====================================================================

fn bayview() -> StationKey {
    StationKey::new("Sheppard", "Bayview")
}

#[test]
fn test_selection_centers_station() {
    let mut map = TestMap::new().with_viewport_size(Vec2::new(1000.0, 800.0));
    map.select("Sheppard", "Bayview");
    assert_eq!(map.selected(), Some(bayview()));

    let viewport = map.viewport();
    let position = map.resource::<RouteRegistry>().station_position(&bayview()).unwrap();
    let expected = Vec2::new(500.0, 400.0) - position * viewport.target_scale;
    assert!((viewport.target_translate - expected).length() < 1e-3);

    map.settle_viewport();
    let on_screen = map.viewport().map_to_screen(position);
    assert!((on_screen - Vec2::new(500.0, 400.0)).length() < 1e-2);
}

#[test]
fn test_reselecting_same_station_keeps_targets() {
    let mut map = TestMap::new();
    map.select("Sheppard", "Bayview");
    map.settle_viewport();
    let settled = map.viewport();

    map.select("Sheppard", "Bayview");
    let again = map.viewport();
    assert_eq!(again.target_scale, settled.target_scale);
    assert_eq!(again.target_translate, settled.target_translate);
    assert!(!again.is_animating());
}

#[test]
fn test_unknown_station_is_ignored() {
    let mut map = TestMap::new();
    map.select("Sheppard", "Bayview");
    let before = map.viewport();
    map.select("Sheppard", "Sheppard West");
    assert_eq!(map.selected(), Some(bayview()));
    assert_eq!(map.viewport().target_translate, before.target_translate);
}

#[test]
fn test_deselect_keeps_view() {
    let mut map = TestMap::new();
    map.select("Sheppard", "Bayview");
    let before = map.viewport();
    map.deselect();
    assert!(map.selected().is_none());
    assert_eq!(map.viewport().target_translate, before.target_translate);
}

#[test]
fn test_last_request_in_a_frame_wins() {
    let mut map = TestMap::new();
    map.send_event(SelectStation::station(bayview(), SelectionSource::MapClick));
    map.send_event(SelectStation::station(
        StationKey::new("Yonge-University", "Union"),
        SelectionSource::Selector,
    ));
    map.update();
    assert_eq!(map.selected(), Some(StationKey::new("Yonge-University", "Union")));
}

#[test]
fn test_startup_fits_whole_map() {
    let map = TestMap::new();
    let size = map.resource::<ViewportSize>().0;
    let viewport: ViewportState = map.viewport();
    let (min, max) = map.resource::<RouteRegistry>().bounds();
    assert!(!viewport.is_animating());
    let top_left = viewport.map_to_screen(min);
    let bottom_right = viewport.map_to_screen(max);
    assert!(top_left.x >= -1e-3 && top_left.y >= -1e-3);
    assert!(bottom_right.x <= size.x + 1e-3 && bottom_right.y <= size.y + 1e-3);
}

#[test]
fn test_resize_recenters_selection() {
    let mut map = TestMap::new();
    map.select("Sheppard", "Bayview");
    let map_with_new_size = map.with_viewport_size(Vec2::new(600.0, 400.0));
    let viewport = map_with_new_size.viewport();
    let position = map_with_new_size
        .resource::<RouteRegistry>()
        .station_position(&bayview())
        .unwrap();
    let expected = Vec2::new(300.0, 200.0) - position * viewport.target_scale;
    assert!((viewport.target_translate - expected).length() < 1e-3);
}
