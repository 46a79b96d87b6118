//! Unit tests for the route registry.

use bevy::math::Vec2;

use super::toronto::{BLOOR_DANFORTH, SHEPPARD, YONGE_UNIVERSITY};
use super::*;

fn line(id: &str, stations: &[(f32, &str)]) -> Line {
    Line::new(
        id,
        [10, 20, 30],
        Vec2::ZERO,
        vec![Vec2::new(100.0, 0.0)],
        stations
            .iter()
            .map(|&(distance, name)| Station {
                name: name.to_string(),
                distance,
            })
            .collect(),
    )
}

#[test]
fn test_toronto_registry_is_valid() {
    let registry = RouteRegistry::toronto().expect("built-in table should validate");
    assert_eq!(registry.lines_by_name().len(), 3);
    assert_eq!(registry.line(BLOOR_DANFORTH).unwrap().stations.len(), 31);
    assert_eq!(registry.line(YONGE_UNIVERSITY).unwrap().stations.len(), 38);
    assert_eq!(registry.line(SHEPPARD).unwrap().stations.len(), 5);
    assert_eq!(registry.station_count(), 74);
}

#[test]
fn test_all_stations_tagged_with_line() {
    let registry = RouteRegistry::toronto().unwrap();
    let all = registry.all_stations();
    assert_eq!(all.len(), registry.station_count());

    let spadinas: Vec<_> = all.iter().filter(|s| s.name() == "Spadina").collect();
    assert_eq!(spadinas.len(), 2, "Spadina is on two lines");
    assert_ne!(spadinas[0].line_id(), spadinas[1].line_id());
}

#[test]
fn test_station_lookup_keys_on_line_and_name() {
    let registry = RouteRegistry::toronto().unwrap();
    let bd = registry
        .station(&StationKey::new(BLOOR_DANFORTH, "Spadina"))
        .unwrap();
    let yu = registry
        .station(&StationKey::new(YONGE_UNIVERSITY, "Spadina"))
        .unwrap();
    assert_eq!(bd.station.distance, 387.0);
    assert_eq!(yu.station.distance, 792.0);
    assert!(registry
        .station(&StationKey::new(SHEPPARD, "Spadina"))
        .is_none());
    assert!(registry
        .station(&StationKey::new("Scarborough", "Kennedy"))
        .is_none());
}

#[test]
fn test_station_position_sheppard() {
    let registry = RouteRegistry::toronto().unwrap();
    let pos = registry
        .station_position(&StationKey::new(SHEPPARD, "Bayview"))
        .unwrap();
    assert!((pos - Vec2::new(800.0, 266.0)).length() < 1e-3);
}

#[test]
fn test_kennedy_saturates_to_route_end() {
    let registry = RouteRegistry::toronto().unwrap();
    let bd = registry.line(BLOOR_DANFORTH).unwrap();
    assert!(bd.end_distance() > bd.length());
    let kennedy = bd.project(bd.end_distance());
    assert!(kennedy.is_clamped());
    assert_eq!(kennedy.point(), *bd.points().last().unwrap());
}

#[test]
fn test_station_ref_key_roundtrip() {
    let registry = RouteRegistry::toronto().unwrap();
    for station in registry.iter_stations() {
        let key = station.key();
        assert!(station.is(&key));
        let found = registry.station(&key).unwrap();
        assert_eq!(found.index, station.index);
    }
}

#[test]
fn test_rejects_non_increasing_distances() {
    let err = RouteRegistry::new(vec![line("L", &[(1.0, "A"), (50.0, "B"), (50.0, "C")])])
        .unwrap_err();
    assert!(matches!(err, RouteError::NotIncreasing { ref station, .. } if station == "C"));
    assert!(err.to_string().contains("'C'"), "got: {err}");
}

#[test]
fn test_rejects_empty_stations_and_segments() {
    let err = RouteRegistry::new(vec![line("Empty", &[])]).unwrap_err();
    assert_eq!(err, RouteError::NoStations("Empty".to_string()));

    let no_geometry = Line::new(
        "Stub",
        [0, 0, 0],
        Vec2::ZERO,
        vec![],
        vec![Station {
            name: "A".to_string(),
            distance: 0.0,
        }],
    );
    let err = RouteRegistry::new(vec![no_geometry]).unwrap_err();
    assert_eq!(err, RouteError::NoSegments("Stub".to_string()));
}

#[test]
fn test_rejects_negative_distance() {
    let err = RouteRegistry::new(vec![line("L", &[(-1.0, "A"), (5.0, "B")])]).unwrap_err();
    assert!(matches!(err, RouteError::NegativeDistance { .. }));
}

#[test]
fn test_rejects_duplicate_station_name() {
    let err = RouteRegistry::new(vec![line("L", &[(1.0, "A"), (5.0, "B"), (9.0, "A")])])
        .unwrap_err();
    assert_eq!(
        err,
        RouteError::DuplicateStation {
            line: "L".to_string(),
            station: "A".to_string(),
        }
    );
}

#[test]
fn test_rejects_non_finite_distance() {
    for bad in [f32::NAN, f32::INFINITY] {
        let err = RouteRegistry::new(vec![line("L", &[(1.0, "A"), (bad, "B")])]).unwrap_err();
        assert!(
            matches!(err, RouteError::NonFiniteDistance { ref station, .. } if station == "B"),
            "got: {err}"
        );
    }
}

#[test]
fn test_rejects_duplicate_line() {
    let err = RouteRegistry::new(vec![
        line("L", &[(1.0, "A")]),
        line("L", &[(1.0, "B")]),
    ])
    .unwrap_err();
    assert_eq!(err, RouteError::DuplicateLine("L".to_string()));
}

#[test]
fn test_bounds_cover_all_lines() {
    let registry = RouteRegistry::toronto().unwrap();
    let (min, max) = registry.bounds();
    for line in registry.lines_by_name().values() {
        for p in line.points() {
            assert!(p.x >= min.x && p.y >= min.y && p.x <= max.x && p.y <= max.y);
        }
    }
    assert_eq!(min, Vec2::new(250.0, 101.0));
}

#[test]
fn test_line_color() {
    let registry = RouteRegistry::toronto().unwrap();
    let sheppard = registry.line(SHEPPARD).unwrap();
    assert_eq!(sheppard.color, [0xA8, 0x51, 0x8A]);
    assert_eq!(sheppard.color(), bevy::color::Color::srgb_u8(0xA8, 0x51, 0x8A));
}
