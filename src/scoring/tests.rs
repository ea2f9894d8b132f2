use crate::map::models::LatLng;
use crate::scoring::{distance, distance_to_points, format_distance};

#[test]
fn perfect_guess_is_worth_the_maximum() {
    assert_eq!(distance_to_points(0.0), 5000);
}

#[test]
fn negative_distance_is_treated_as_perfect() {
    // Floating point noise at zero distance must not cost the player points.
    assert_eq!(distance_to_points(-3.5), 5000);
}

#[test]
fn points_stay_inside_the_allowed_range() {
    let samples = [
        0.0,
        1.0,
        999.99,
        1_110.0,
        157_000.0,
        2_000_000.0,
        20_000_000.0,
        1e12,
    ];
    for meters in samples {
        let points = distance_to_points(meters);
        assert!(
            (1..=5000).contains(&points),
            "{meters} meters scored {points} points",
        );
    }
}

#[test]
fn points_never_increase_with_distance() {
    let samples = [
        0.0,
        1.0,
        10.0,
        999.99,
        1_000.0,
        1_110.0,
        5_000.0,
        157_000.0,
        2_000_000.0,
        10_000_000.0,
        2e10,
        1e12,
    ];
    for pair in samples.windows(2) {
        assert!(
            distance_to_points(pair[0]) >= distance_to_points(pair[1]),
            "score went up between {} and {} meters",
            pair[0],
            pair[1],
        );
    }
}

#[test]
fn half_decay_distance_halves_the_score() {
    assert_eq!(distance_to_points(2_000_000.0), 2500);
}

#[test]
fn twenty_thousand_km_miss_still_scores() {
    assert_eq!(distance_to_points(20_000_000.0), 455);
}

#[test]
fn absurdly_large_distance_bottoms_out_at_one_point() {
    assert_eq!(distance_to_points(1e12), 1);
    assert_eq!(distance_to_points(f64::MAX), 1);
}

#[test]
fn distance_between_identical_points_is_zero() {
    let riga = LatLng {
        lat: 56.95,
        lng: 24.11,
    };
    assert_eq!(distance(riga, riga), 0.0);
}

#[test]
fn distance_is_symmetric() {
    let a = LatLng {
        lat: 40.0,
        lng: -74.0,
    };
    let b = LatLng {
        lat: 41.0,
        lng: -73.0,
    };
    assert_eq!(distance(a, b), distance(b, a));
}

#[test]
fn spot_on_guess_scenario() {
    let origin = LatLng { lat: 0.0, lng: 0.0 };
    let meters = distance(origin, origin);
    assert_eq!(meters, 0.0);
    assert_eq!(distance_to_points(meters), 5000);
    assert_eq!(format_distance(meters), String::from("0.00 meters"));
}

#[test]
fn nearby_guess_scenario() {
    let actual = LatLng { lat: 0.0, lng: 0.0 };
    let guess = LatLng {
        lat: 0.0,
        lng: 0.01,
    };
    let meters = distance(actual, guess);
    assert!((meters - 1_110.0).abs() < 1e-6);
    assert_eq!(distance_to_points(meters), 4997);
    assert_eq!(format_distance(meters), String::from("1.11 km"));
}

#[test]
fn cross_state_guess_scenario() {
    let actual = LatLng {
        lat: 40.0,
        lng: -74.0,
    };
    let guess = LatLng {
        lat: 41.0,
        lng: -73.0,
    };
    let meters = distance(actual, guess);
    assert!((meters - 156_977.705).abs() < 1e-2);
    assert_eq!(distance_to_points(meters), 4636);
    assert_eq!(format_distance(meters), String::from("156.98 km"));
}

#[test]
fn sub_kilometer_distances_format_as_meters() {
    assert_eq!(format_distance(999.994), String::from("999.99 meters"));
    assert_eq!(format_distance(42.5), String::from("42.50 meters"));
}

#[test]
fn kilometer_distances_format_as_km() {
    assert_eq!(format_distance(1_000.0), String::from("1.00 km"));
    assert_eq!(format_distance(1_234_567.0), String::from("1234.57 km"));
}
