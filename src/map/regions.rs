use crate::map::models::BoundingBox;
use rand::Rng;

pub const NORTH_AMERICA: BoundingBox = BoundingBox {
    west: -125.0,
    south: 24.0,
    east: -66.0,
    north: 50.0,
};

pub const EUROPE: BoundingBox = BoundingBox {
    west: -10.0,
    south: 36.0,
    east: 30.0,
    north: 70.0,
};

pub const ASIA: BoundingBox = BoundingBox {
    west: 30.0,
    south: 0.0,
    east: 180.0,
    north: 70.0,
};

pub const AUSTRALIA: BoundingBox = BoundingBox {
    west: 110.0,
    south: -45.0,
    east: 160.0,
    north: -10.0,
};

pub const SOUTH_AMERICA: BoundingBox = BoundingBox {
    west: -80.0,
    south: -60.0,
    east: -35.0,
    north: 15.0,
};

pub const AFRICA: BoundingBox = BoundingBox {
    west: -20.0,
    south: -35.0,
    east: 50.0,
    north: 40.0,
};

pub const ALL: [BoundingBox; 6] = [
    NORTH_AMERICA,
    EUROPE,
    ASIA,
    AUSTRALIA,
    SOUTH_AMERICA,
    AFRICA,
];

/// Picks the continent-sized region the next game post samples its street
/// view image from.
pub fn random() -> BoundingBox {
    let mut rng = rand::thread_rng();
    ALL[rng.gen_range(0..ALL.len())]
}
