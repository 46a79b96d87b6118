//! `navigator.geolocation` for the web build.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};

use super::{Coordinate, GeolocationError, LocationSlot};

const TIMEOUT_MS: u32 = 10_000;

/// Ask the browser for one position. The callbacks fill `slot`; an error
/// here means the request was never made.
pub(super) fn request_position(slot: LocationSlot) -> Result<(), GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let on_success = {
        let slot = slot.clone();
        Closure::once_into_js(move |position: GeolocationPosition| {
            let coords = position.coords();
            let reading = Coordinate::new(coords.latitude(), coords.longitude())
                .ok_or(GeolocationError::PositionUnavailable);
            slot.fill(reading);
        })
    };
    let on_error = Closure::once_into_js(move |error: GeolocationPositionError| {
        slot.fill(Err(GeolocationError::from_code(error.code())));
    });

    let options = PositionOptions::new();
    options.set_timeout(TIMEOUT_MS);
    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &options,
        )
        .map_err(|e| {
            bevy::log::warn!("getCurrentPosition failed: {e:?}");
            GeolocationError::Unsupported
        })
}
