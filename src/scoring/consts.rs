pub const MAX_POINTS: u64 = 5000;

pub const MIN_POINTS: u64 = 1;

/// Flat conversion factor from degree-space distance to meters. Exact at
/// the equator, increasingly generous towards the poles.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Distance at which the score decays to half of the maximum.
pub const SCORE_HALF_DECAY_METERS: f64 = 2_000_000.0;
