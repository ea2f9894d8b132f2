use crate::imagery::models::StreetViewImage;
use crate::imagery::responses::{ImageGeometryResponse, StreetViewImagesResponse};
use crate::map::models::{BoundingBox, LatLng};
use crate::map::regions;
use rand::Rng;
use url::Url;

pub mod consts;
pub mod img;
pub mod media;
pub mod models;
pub mod responses;

/// Everything the imagery graph API client needs, resolved once at startup
/// and passed in explicitly.
#[derive(Clone, Debug)]
pub struct ImageryConfig {
    pub base_url: Url,
    pub access_token: String,
}

/// Client for a Mapillary-style street imagery graph API.
#[derive(Clone, Debug)]
pub struct ImageryClient {
    http: reqwest::Client,
    config: ImageryConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageryError {
    #[error("imagery graph API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no usable street view image found in the sampled region")]
    NoImages,
}

impl ImageryClient {
    const IMAGES_PER_LOOKUP: usize = 10;
    const IMAGE_FIELDS: &'static str = "id,thumb_1024_url,width,height,is_pano";

    pub fn new(config: ImageryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Lists geotagged street-level images within the bounding box.
    pub async fn street_view_images(
        &self,
        bbox: BoundingBox,
        limit: usize,
    ) -> Result<Vec<StreetViewImage>, ImageryError> {
        let bbox_value = bbox.as_query_value();
        let limit_value = limit.to_string();
        let response = self
            .http
            .get(self.endpoint("images"))
            .query(&[
                ("access_token", self.config.access_token.as_str()),
                ("fields", Self::IMAGE_FIELDS),
                ("bbox", bbox_value.as_str()),
                ("limit", limit_value.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let body: StreetViewImagesResponse = response.json().await?;
        Ok(body.data)
    }

    /// Where the image with the given id was taken.
    pub async fn image_location(&self, image_id: &str) -> Result<LatLng, ImageryError> {
        let response = self
            .http
            .get(self.endpoint(image_id))
            .query(&[
                ("access_token", self.config.access_token.as_str()),
                ("fields", "geometry"),
            ])
            .send()
            .await?
            .error_for_status()?;
        let body: ImageGeometryResponse = response.json().await?;
        Ok(body.geometry.as_lat_lng())
    }

    /// Samples a random continent-sized region and picks a random
    /// non-panoramic image from it.
    pub async fn random_street_view_image(&self) -> Result<StreetViewImage, ImageryError> {
        let bbox = regions::random();
        let images = self
            .street_view_images(bbox, Self::IMAGES_PER_LOOKUP)
            .await?;
        let mut flat_images: Vec<StreetViewImage> =
            images.into_iter().filter(|image| !image.is_pano).collect();
        if flat_images.is_empty() {
            return Err(ImageryError::NoImages);
        }
        let index = rand::thread_rng().gen_range(0..flat_images.len());
        Ok(flat_images.swap_remove(index))
    }

    /// Downloads the image contents themselves.
    pub async fn download(&self, image_url: &str) -> Result<Vec<u8>, ImageryError> {
        let response = self
            .http
            .get(image_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path,
        )
    }
}
