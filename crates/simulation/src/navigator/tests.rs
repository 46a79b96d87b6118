use bevy::math::Vec2;

use crate::routes::{Line, RouteRegistry, Station, StationKey};

use super::*;

fn station(name: &str, distance: f32) -> Station {
    Station {
        name: name.to_string(),
        distance,
    }
}

/// Two lines crossing at (50, 50): "H" runs west-east, "V" north-south.
fn cross() -> RouteRegistry {
    RouteRegistry::new(vec![
        Line::new(
            "H",
            [0, 0, 0],
            Vec2::new(0.0, 50.0),
            vec![Vec2::new(100.0, 0.0)],
            vec![station("W", 0.0), station("C", 50.0), station("E", 100.0)],
        ),
        Line::new(
            "V",
            [0, 0, 0],
            Vec2::new(50.0, 0.0),
            vec![Vec2::new(0.0, 100.0)],
            vec![station("N", 0.0), station("X", 50.0), station("S", 100.0)],
        ),
    ])
    .unwrap()
}

// ====================================================================
// Directional navigation
// ====================================================================

#[test]
fn test_up_finds_station_above() {
    let registry = cross();
    let next = nearest_station_in_direction(&registry, &StationKey::new("H", "C"), Direction::Up);
    assert_eq!(next, Some(StationKey::new("V", "N")));
}

#[test]
fn test_station_at_same_point_is_not_on_any_side() {
    let registry = cross();
    let origin = StationKey::new("H", "C");
    let right = nearest_station_in_direction(&registry, &origin, Direction::Right);
    assert_eq!(right, Some(StationKey::new("H", "E")));
    let down = nearest_station_in_direction(&registry, &origin, Direction::Down);
    assert_eq!(down, Some(StationKey::new("V", "S")));
}

#[test]
fn test_equal_distance_breaks_on_station_name() {
    let registry = cross();
    // C on "H" and X on "V" are both 50 units right of W.
    let next = nearest_station_in_direction(&registry, &StationKey::new("H", "W"), Direction::Right);
    assert_eq!(next, Some(StationKey::new("H", "C")));
}

#[test]
fn test_nothing_beyond_the_edge() {
    let registry = cross();
    let origin = StationKey::new("V", "N");
    assert_eq!(nearest_station_in_direction(&registry, &origin, Direction::Up), None);
}

#[test]
fn test_unknown_origin_yields_none() {
    let registry = cross();
    let origin = StationKey::new("H", "Nowhere");
    assert_eq!(nearest_station_in_direction(&registry, &origin, Direction::Left), None);
}

#[test]
fn test_navigation_never_returns_origin_on_toronto_map() {
    let registry = RouteRegistry::toronto().unwrap();
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
    for origin in registry.iter_stations() {
        let key = origin.key();
        for direction in directions {
            let Some(next) = nearest_station_in_direction(&registry, &key, direction) else {
                continue;
            };
            assert_ne!(next, key);
            let delta = registry.station_position(&next).unwrap() - origin.position();
            assert!(
                direction.contains(delta),
                "{} -> {} is not {}",
                key.name,
                next.name,
                direction.label()
            );
        }
    }
}

#[test]
fn test_right_from_interchange_follows_sheppard() {
    let registry = RouteRegistry::toronto().unwrap();
    let origin = StationKey::new("Sheppard", "Sheppard-Yonge");
    let next = nearest_station_in_direction(&registry, &origin, Direction::Right).unwrap();
    assert_eq!(next, StationKey::new("Sheppard", "Bayview"));
}

// ====================================================================
// Hit testing
// ====================================================================

#[test]
fn test_station_at_point_within_radius() {
    let registry = cross();
    assert_eq!(
        station_at_point(&registry, Vec2::new(98.0, 51.0), 6.0),
        Some(StationKey::new("H", "E"))
    );
    // Both C and X sit at (50, 50).
    assert_eq!(
        station_at_point(&registry, Vec2::new(52.0, 50.0), 6.0),
        Some(StationKey::new("H", "C"))
    );
}

#[test]
fn test_station_at_point_misses() {
    let registry = cross();
    assert_eq!(station_at_point(&registry, Vec2::new(25.0, 25.0), 6.0), None);
}

// ====================================================================
// Geographic lookup
// ====================================================================

fn location(line: &str, name: &str, latitude: f64, longitude: f64) -> StationLocation {
    StationLocation {
        key: StationKey::new(line, name),
        latitude,
        longitude,
    }
}

#[test]
fn test_haversine_one_degree_of_latitude() {
    let km = haversine_km(0.0, 0.0, 1.0, 0.0);
    assert!((km - 111.195).abs() < 1e-2, "got {km}");
}

#[test]
fn test_haversine_is_symmetric() {
    let a = haversine_km(43.6453, -79.3806, 43.7615, -79.4111);
    let b = haversine_km(43.7615, -79.4111, 43.6453, -79.3806);
    assert!((a - b).abs() < 1e-9);
    assert!(a > 12.0 && a < 14.0, "got {a}");
}

#[test]
fn test_exact_location_match_returns_zero_distance() {
    let locations = vec![
        location("Yonge-University", "Union", 43.6453, -79.3806),
        location("Yonge-University", "Finch", 43.7806, -79.4160),
    ];
    let (key, km) = nearest_station_to_coordinate(43.6453, -79.3806, &locations).unwrap();
    assert_eq!(key, StationKey::new("Yonge-University", "Union"));
    assert_eq!(km, 0.0);
}

#[test]
fn test_nearest_location_wins() {
    let locations = vec![
        location("Yonge-University", "Union", 43.6453, -79.3806),
        location("Yonge-University", "Finch", 43.7806, -79.4160),
    ];
    let (key, km) = nearest_station_to_coordinate(43.77, -79.41, &locations).unwrap();
    assert_eq!(key.name, "Finch");
    assert!(km < 2.0);
}

#[test]
fn test_colocated_locations_break_on_line() {
    let locations = vec![
        location("Yonge-University", "Spadina", 43.6672, -79.4037),
        location("Bloor-Danforth", "Spadina", 43.6672, -79.4037),
    ];
    let (key, _) = nearest_station_to_coordinate(43.6, -79.4, &locations).unwrap();
    assert_eq!(key, StationKey::new("Bloor-Danforth", "Spadina"));
}

#[test]
fn test_no_locations() {
    assert_eq!(nearest_station_to_coordinate(43.6, -79.4, &[]), None);
}
