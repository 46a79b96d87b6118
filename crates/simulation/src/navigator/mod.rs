//! Station navigator: proximity queries over the route registry.
//!
//! - [`nearest_station_in_direction`] steps the selection across the map with
//!   arrow keys, wheel or swipe
//! - [`nearest_station_to_coordinate`] resolves a geographic reading to a station
//! - [`station_at_point`] hit-tests map clicks
//!
//! All queries are pure and break distance ties by station name, then line id,
//! so results never depend on iteration order.

mod direction;
mod geo;

#[cfg(test)]
mod tests;

pub use direction::{nearest_station_in_direction, station_at_point, Direction};
pub use geo::{haversine_km, nearest_station_to_coordinate, StationLocation};
