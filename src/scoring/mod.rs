use crate::map::models::LatLng;
use crate::scoring::consts::{MAX_POINTS, METERS_PER_DEGREE, MIN_POINTS, SCORE_HALF_DECAY_METERS};

pub mod consts;
#[cfg(test)]
pub mod tests;

/// Approximate distance in meters between two points on the map.
///
/// The distance is Euclidean in degree-space, rescaled with a flat 111 km
/// per degree. It neither wraps at the antimeridian nor corrects for
/// latitude, which is fine for a guessing game and wrong for navigation.
/// Callers are expected to pass finite coordinates.
pub fn distance(a: LatLng, b: LatLng) -> f64 {
    let degrees = ((a.lat - b.lat).powi(2) + (a.lng - b.lng).powi(2)).sqrt();
    degrees * METERS_PER_DEGREE
}

/// Renders a distance for display: meters under one kilometer, kilometers
/// otherwise, two decimal places either way.
pub fn format_distance(meters: f64) -> String {
    if meters < 1_000.0 {
        format!("{meters:.2} meters")
    } else {
        format!("{:.2} km", meters / 1_000.0)
    }
}

/// Converts a guess distance into points.
///
/// A perfect guess is worth 5000 points. The value follows a reciprocal
/// decay curve that halves around the 2000 km mark and never drops below
/// one point, no matter how far off the guess is.
pub fn distance_to_points(meters: f64) -> u64 {
    if meters <= 0.0 {
        return MAX_POINTS;
    }
    let points = (MAX_POINTS as f64 / (1.0 + meters / SCORE_HALF_DECAY_METERS)).round() as u64;
    points.max(MIN_POINTS)
}
