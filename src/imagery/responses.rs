use crate::imagery::models::StreetViewImage;
use crate::map::models::LatLng;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StreetViewImagesResponse {
    pub data: Vec<StreetViewImage>,
}

#[derive(Debug, Deserialize)]
pub struct ImageGeometryResponse {
    pub geometry: PointGeometry,
}

/// GeoJSON point. Coordinates come as `[lng, lat]`, in that order.
#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn as_lat_lng(&self) -> LatLng {
        LatLng {
            lat: self.coordinates[1],
            lng: self.coordinates[0],
        }
    }
}
