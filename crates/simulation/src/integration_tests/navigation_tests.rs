use std::time::Duration;

use crate::navigator::Direction;
use crate::routes::StationKey;
use crate::test_harness::TestMap;
use crate::viewport::NavigationGate;

// ====================================================================
// Directional navigation with cooldown
// ====================================================================

#[test]
fn test_navigation_needs_a_selection() {
    let mut map = TestMap::new();
    map.navigate(Direction::Right);
    assert!(map.selected().is_none());
    assert!(map.resource::<NavigationGate>().is_open());
}

#[test]
fn test_step_then_cooldown() {
    let mut map = TestMap::new();
    map.select("Sheppard", "Sheppard-Yonge");

    map.navigate(Direction::Right);
    assert_eq!(map.selected(), Some(StationKey::new("Sheppard", "Bayview")));
    assert!(!map.resource::<NavigationGate>().is_open());

    // Ignored during the cooldown.
    map.navigate(Direction::Right);
    assert_eq!(map.selected(), Some(StationKey::new("Sheppard", "Bayview")));

    map.run_for(Duration::from_millis(500));
    map.navigate(Direction::Right);
    assert_eq!(map.selected(), Some(StationKey::new("Sheppard", "Bayview")));

    map.run_for(Duration::from_millis(400));
    map.navigate(Direction::Right);
    assert_eq!(map.selected(), Some(StationKey::new("Sheppard", "Bessarion")));
}

#[test]
fn test_miss_leaves_gate_open() {
    let mut map = TestMap::new();
    map.select("Yonge-University", "Union");

    // Nothing on the map sits below Union.
    map.navigate(Direction::Down);
    assert_eq!(map.selected(), Some(StationKey::new("Yonge-University", "Union")));
    assert!(map.resource::<NavigationGate>().is_open());

    map.navigate(Direction::Up);
    let next = map.selected().unwrap();
    assert_ne!(next, StationKey::new("Yonge-University", "Union"));
}

#[test]
fn test_one_burst_moves_one_station() {
    let mut map = TestMap::new();
    map.select("Sheppard", "Sheppard-Yonge");
    for _ in 0..5 {
        map.send_event(crate::viewport::NavigateRequest {
            direction: Direction::Right,
        });
    }
    map.update();
    assert_eq!(map.selected(), Some(StationKey::new("Sheppard", "Bayview")));
}
