use serde::{Deserialize, Serialize};

use crate::config::EARTH_RADIUS_KM;
use crate::routes::StationKey;

/// Geographic position of one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationLocation {
    pub key: StationKey,
    pub latitude: f64,
    pub longitude: f64,
}

/// Great-circle distance in kilometres between two WGS84 coordinates.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Nearest station to `(latitude, longitude)` and its distance in km.
///
/// `None` when `locations` is empty.
pub fn nearest_station_to_coordinate(
    latitude: f64,
    longitude: f64,
    locations: &[StationLocation],
) -> Option<(StationKey, f64)> {
    locations
        .iter()
        .map(|loc| {
            let km = haversine_km(latitude, longitude, loc.latitude, loc.longitude);
            (km, loc)
        })
        .min_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then_with(|| a.1.key.name.cmp(&b.1.key.name))
                .then_with(|| a.1.key.line.cmp(&b.1.key.line))
        })
        .map(|(km, loc)| (loc.key.clone(), km))
}
