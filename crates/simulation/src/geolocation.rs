//! One-shot "find the station nearest to me".
//!
//! A [`LocateRequest`] starts one reading from the configured
//! [`LocationSource`]. Fixed and unavailable sources answer at once; the
//! browser answers later through a callback. Either way the result lands in
//! the shared [`LocationSlot`] and [`resolve_location_reading`] picks it up.
//! On success the nearest station (haversine over the ranking table's
//! coordinates) gets selected; on failure the selection is left alone and
//! the classified error is shown in the status line. There is no retry.

use std::fmt;
use std::sync::{Arc, Mutex};

use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use crate::config::LOCATION_ENV;
use crate::navigator::nearest_station_to_coordinate;
use crate::routes::RouteRegistry;
use crate::selection::{SelectStation, SelectionSource};
use crate::stats::Datasets;
use crate::status::StatusMessage;

#[cfg(target_arch = "wasm32")]
mod browser;

/// Why no location reading could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unsupported,
}

impl GeolocationError {
    /// Classify a W3C `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::PositionUnavailable,
        }
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            GeolocationError::PermissionDenied => "Location access was denied",
            GeolocationError::PositionUnavailable => "Your location is unavailable",
            GeolocationError::Timeout => "Timed out while getting your location",
            GeolocationError::Unsupported => "Location is not supported on this device",
        };
        f.write_str(message)
    }
}

impl std::error::Error for GeolocationError {}

/// A single location reading in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Rejects out-of-range and non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    /// Parse `"lat,lon"`, rejecting out-of-range values.
    pub fn parse(value: &str) -> Option<Self> {
        let (lat, lon) = value.split_once(',')?;
        let latitude: f64 = lat.trim().parse().ok()?;
        let longitude: f64 = lon.trim().parse().ok()?;
        Self::new(latitude, longitude)
    }
}

pub type LocationReading = Result<Coordinate, GeolocationError>;

/// Where location readings come from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum LocationSource {
    Fixed(Coordinate),
    Unavailable(GeolocationError),
    /// The browser Geolocation API. Outside wasm it reads as `Unsupported`.
    Browser,
}

impl Default for LocationSource {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            LocationSource::Browser
        } else {
            LocationSource::Unavailable(GeolocationError::Unsupported)
        }
    }
}

impl LocationSource {
    /// A fixed reading from `SUBWAY_DELAYS_LOCATION`, or `Unsupported` when
    /// unset. A malformed value reads as an unavailable position.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let Ok(value) = std::env::var(LOCATION_ENV) else {
            return Self::default();
        };
        match Coordinate::parse(&value) {
            Some(coordinate) => LocationSource::Fixed(coordinate),
            None => {
                warn!("{LOCATION_ENV}='{value}' is not a 'lat,lon' pair");
                LocationSource::Unavailable(GeolocationError::PositionUnavailable)
            }
        }
    }

    /// The browser has no process environment.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Start one reading. The result is written to `slot`, possibly later.
    pub fn begin_reading(&self, slot: &LocationSlot) {
        match self {
            LocationSource::Fixed(coordinate) => slot.fill(Ok(*coordinate)),
            LocationSource::Unavailable(error) => slot.fill(Err(*error)),
            LocationSource::Browser => {
                if let Err(e) = request_browser_position(slot) {
                    slot.fill(Err(e));
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn request_browser_position(slot: &LocationSlot) -> Result<(), GeolocationError> {
    browser::request_position(slot.clone())
}

#[cfg(not(target_arch = "wasm32"))]
fn request_browser_position(_slot: &LocationSlot) -> Result<(), GeolocationError> {
    Err(GeolocationError::Unsupported)
}

/// Single-reading mailbox shared with asynchronous callbacks.
#[derive(Debug, Clone, Default)]
pub struct LocationSlot(Arc<Mutex<Option<LocationReading>>>);

impl LocationSlot {
    pub fn fill(&self, reading: LocationReading) {
        match self.0.lock() {
            Ok(mut slot) => *slot = Some(reading),
            Err(_) => error!("Location slot is poisoned; dropping reading"),
        }
    }

    pub fn take(&self) -> Option<LocationReading> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// The reading in flight, if any.
#[derive(Resource, Debug, Default)]
pub struct PendingLocation {
    slot: LocationSlot,
    waiting: bool,
}

impl PendingLocation {
    pub fn slot(&self) -> &LocationSlot {
        &self.slot
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Mark a reading as started. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.waiting, true)
    }

    /// The finished reading, clearing the in-flight flag.
    pub fn take(&mut self) -> Option<LocationReading> {
        let reading = self.slot.take()?;
        self.waiting = false;
        Some(reading)
    }
}

/// Ask for one location reading.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LocateRequest;

pub fn handle_locate_requests(
    mut requests: EventReader<LocateRequest>,
    source: Res<LocationSource>,
    mut pending: ResMut<PendingLocation>,
    mut status: ResMut<StatusMessage>,
) {
    // Several clicks in one frame still make a single reading.
    if requests.read().count() == 0 {
        return;
    }
    if !pending.begin() {
        debug!("Location reading already in flight");
        return;
    }
    if *source == LocationSource::Browser {
        status.info("Finding your location...");
    }
    source.begin_reading(pending.slot());
}

pub fn resolve_location_reading(
    mut pending: ResMut<PendingLocation>,
    registry: Res<RouteRegistry>,
    datasets: Option<Res<Datasets>>,
    mut select: EventWriter<SelectStation>,
    mut status: ResMut<StatusMessage>,
) {
    let Some(reading) = pending.take() else {
        return;
    };
    let coordinate = match reading {
        Ok(coordinate) => coordinate,
        Err(e) => {
            warn!("Geolocation failed: {e:?}");
            status.error(e.to_string());
            return;
        }
    };
    let locations: Vec<_> = datasets
        .map(|d| d.station_locations())
        .unwrap_or_default()
        .into_iter()
        .filter(|l| registry.station(&l.key).is_some())
        .collect();
    match nearest_station_to_coordinate(coordinate.latitude, coordinate.longitude, &locations) {
        Some((key, km)) => {
            info!(
                "Nearest station to ({:.5}, {:.5}) is {} ({}), {:.2} km",
                coordinate.latitude, coordinate.longitude, key.name, key.line, km
            );
            status.info(format!("Nearest station: {} ({}), {:.1} km away", key.name, key.line, km));
            select.send(SelectStation::station(key, SelectionSource::Geolocation));
        }
        None => status.error("No station locations are available"),
    }
}

pub struct GeolocationPlugin;

impl Plugin for GeolocationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<LocationSource>() {
            app.insert_resource(LocationSource::from_env());
        }
        app.add_event::<LocateRequest>()
            .init_resource::<PendingLocation>()
            .add_systems(
                Update,
                (handle_locate_requests, resolve_location_reading)
                    .chain()
                    .before(crate::selection::apply_selection),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        let c = Coordinate::parse(" 43.6453, -79.3806 ").unwrap();
        assert_eq!(c.latitude, 43.6453);
        assert_eq!(c.longitude, -79.3806);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Coordinate::parse("43.6").is_none());
        assert!(Coordinate::parse("north,west").is_none());
        assert!(Coordinate::parse("95.0,10.0").is_none());
        assert!(Coordinate::parse("45.0,-190.0").is_none());
        assert!(Coordinate::parse("NaN,10.0").is_none());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, -79.0).is_none());
        assert!(Coordinate::new(43.0, f64::INFINITY).is_none());
        assert!(Coordinate::new(43.0, -79.0).is_some());
    }

    #[test]
    fn test_default_source_is_unsupported() {
        let slot = LocationSlot::default();
        LocationSource::default().begin_reading(&slot);
        assert_eq!(slot.take(), Some(Err(GeolocationError::Unsupported)));
    }

    #[test]
    fn test_browser_source_outside_wasm_is_unsupported() {
        let slot = LocationSlot::default();
        LocationSource::Browser.begin_reading(&slot);
        assert_eq!(slot.take(), Some(Err(GeolocationError::Unsupported)));
    }

    #[test]
    fn test_position_error_codes() {
        assert_eq!(GeolocationError::from_code(1), GeolocationError::PermissionDenied);
        assert_eq!(GeolocationError::from_code(2), GeolocationError::PositionUnavailable);
        assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
        assert_eq!(GeolocationError::from_code(0), GeolocationError::PositionUnavailable);
    }

    #[test]
    fn test_pending_waits_until_slot_is_filled() {
        let mut pending = PendingLocation::default();
        assert!(pending.begin());
        assert!(!pending.begin());
        assert_eq!(pending.take(), None);
        assert!(pending.is_waiting());

        // A callback holds its own handle to the slot.
        let handle = pending.slot().clone();
        handle.fill(Err(GeolocationError::Timeout));
        assert_eq!(pending.take(), Some(Err(GeolocationError::Timeout)));
        assert!(!pending.is_waiting());
        assert!(pending.begin());
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let messages: Vec<String> = [
            GeolocationError::PermissionDenied,
            GeolocationError::PositionUnavailable,
            GeolocationError::Timeout,
            GeolocationError::Unsupported,
        ]
        .iter()
        .map(|e| e.to_string())
        .collect();
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
