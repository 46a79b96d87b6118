use crate::geolocation::{Coordinate, GeolocationError, LocationSource, PendingLocation};
use crate::routes::StationKey;
use crate::status::{StatusKind, StatusMessage};
use crate::test_harness::{sample_datasets, TestMap};

// ====================================================================
// Locate me
// ====================================================================

#[test]
fn test_locate_selects_nearest_station() {
    let mut map = TestMap::new()
        .with_datasets(sample_datasets())
        .with_location(LocationSource::Fixed(Coordinate {
            latitude: 43.6450,
            longitude: -79.3810,
        }));
    map.locate();
    assert_eq!(map.selected(), Some(StationKey::new("Yonge-University", "Union")));
    let (kind, text) = map.resource::<StatusMessage>().current().unwrap();
    assert_eq!(kind, StatusKind::Info);
    assert!(text.contains("Union"), "{text}");
}

#[test]
fn test_stations_off_the_map_are_not_candidates() {
    // Right on top of the ranked station that has no map position.
    let mut map = TestMap::new()
        .with_datasets(sample_datasets())
        .with_location(LocationSource::Fixed(Coordinate {
            latitude: 43.7000,
            longitude: -79.4000,
        }));
    map.locate();
    let selected = map.selected().unwrap();
    assert_ne!(selected.name, "Nowhere");
}

#[test]
fn test_failure_leaves_selection_alone() {
    let mut map = TestMap::new()
        .with_datasets(sample_datasets())
        .with_location(LocationSource::Unavailable(GeolocationError::PermissionDenied));
    map.select("Sheppard", "Bayview");
    map.locate();
    assert_eq!(map.selected(), Some(StationKey::new("Sheppard", "Bayview")));
    let (kind, text) = map.resource::<StatusMessage>().current().unwrap();
    assert_eq!(kind, StatusKind::Error);
    assert_eq!(text, GeolocationError::PermissionDenied.to_string());
}

#[test]
fn test_no_locations_reports_error() {
    let mut map = TestMap::new().with_location(LocationSource::Fixed(Coordinate {
        latitude: 43.6450,
        longitude: -79.3810,
    }));
    map.locate();
    assert!(map.selected().is_none());
    let (kind, _) = map.resource::<StatusMessage>().current().unwrap();
    assert_eq!(kind, StatusKind::Error);
}

#[test]
fn test_browser_source_is_unsupported_natively() {
    let mut map = TestMap::new()
        .with_datasets(sample_datasets())
        .with_location(LocationSource::Browser);
    map.locate();
    assert!(map.selected().is_none());
    let (kind, text) = map.resource::<StatusMessage>().current().unwrap();
    assert_eq!(kind, StatusKind::Error);
    assert_eq!(text, GeolocationError::Unsupported.to_string());
    assert!(!map.resource::<PendingLocation>().is_waiting());
}

#[test]
fn test_late_reading_selects_nearest_station() {
    let mut map = TestMap::new().with_datasets(sample_datasets());
    assert!(map.world_mut().resource_mut::<PendingLocation>().begin());
    map.update();
    assert!(map.selected().is_none());

    // Filled from outside the schedule, as a browser callback would.
    let slot = map.resource::<PendingLocation>().slot().clone();
    slot.fill(Coordinate::new(43.6450, -79.3810).ok_or(GeolocationError::PositionUnavailable));
    map.update();
    assert_eq!(map.selected(), Some(StationKey::new("Yonge-University", "Union")));
    assert!(!map.resource::<PendingLocation>().is_waiting());
}

#[test]
fn test_request_while_waiting_is_ignored() {
    let mut map = TestMap::new()
        .with_datasets(sample_datasets())
        .with_location(LocationSource::Unavailable(GeolocationError::Timeout));
    assert!(map.world_mut().resource_mut::<PendingLocation>().begin());
    map.locate();
    // The in-flight reading is still outstanding, so nothing was posted.
    assert!(map.resource::<StatusMessage>().current().is_none());
    assert!(map.resource::<PendingLocation>().is_waiting());
}
