//! Great-circle distance and distance ranking

use std::cmp::Ordering;

use crate::place::{Coordinates, Place};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine distance between two coordinates, in meters
pub fn haversine_distance(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Populate `distance` for every candidate and stable-sort ascending
///
/// NaN distances compare as equal, so candidates with malformed
/// coordinates keep their source order instead of crashing the sort.
/// Result capping is the handler layer's job, not the ranker's.
pub fn rank_by_distance(places: &mut [Place], origin: Coordinates) {
    for place in places.iter_mut() {
        place.distance = Some(haversine_distance(origin, place.coordinates()));
    }

    places.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
    });
}
