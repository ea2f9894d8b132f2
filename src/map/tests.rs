use crate::map::models::LatLng;
use crate::map::regions;

#[test]
fn random_region_is_one_of_the_known_continents() {
    for _ in 0..100 {
        let region = regions::random();
        assert!(regions::ALL.contains(&region));
    }
}

#[test]
fn known_cities_fall_into_their_continents() {
    let denver = LatLng {
        lat: 39.74,
        lng: -104.99,
    };
    let paris = LatLng {
        lat: 48.86,
        lng: 2.35,
    };
    let sydney = LatLng {
        lat: -33.87,
        lng: 151.21,
    };
    assert!(regions::NORTH_AMERICA.contains(denver));
    assert!(regions::EUROPE.contains(paris));
    assert!(regions::AUSTRALIA.contains(sydney));
    assert!(!regions::AFRICA.contains(denver));
}

#[test]
fn bounding_box_renders_in_graph_api_edge_order() {
    assert_eq!(
        regions::EUROPE.as_query_value(),
        String::from("-10,36,30,70"),
    );
}
