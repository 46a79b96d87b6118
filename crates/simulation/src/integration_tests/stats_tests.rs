use crate::routes::StationKey;
use crate::stats::SelectedStationStats;
use crate::test_harness::{sample_datasets, TestMap};

// ====================================================================
// Station card series follow the selection
// ====================================================================

#[test]
fn test_stats_follow_selection() {
    let mut map = TestMap::new().with_datasets(sample_datasets());
    assert!(map.resource::<SelectedStationStats>().0.is_none());

    map.select("Yonge-University", "Union");
    let stats = map.resource::<SelectedStationStats>().0.clone().unwrap();
    assert_eq!(stats.station, StationKey::new("Yonge-University", "Union"));
    assert_eq!(stats.hourly[8].percent, 42.0);
    assert_eq!(stats.top_incidents[0].min_delay, 14.0);
    assert_eq!(stats.ranks.as_ref().map(|r| r.danger_rank), Some(2));
    assert_eq!(stats.monthly[1].first.incidents, 1);
    assert_eq!(stats.monthly[1].second.incidents, 1);

    map.select("Sheppard", "Bayview");
    let stats = map.resource::<SelectedStationStats>().0.clone().unwrap();
    assert_eq!(stats.station.name, "Bayview");
    assert_eq!(stats.yearly.len(), 1);

    map.deselect();
    assert!(map.resource::<SelectedStationStats>().0.is_none());
}

#[test]
fn test_station_without_data() {
    let mut map = TestMap::new().with_datasets(sample_datasets());
    map.select("Sheppard", "Leslie");
    let stats = map.resource::<SelectedStationStats>().0.clone().unwrap();
    assert!(!stats.has_data());
    assert!(stats.ranks.is_none());
}
