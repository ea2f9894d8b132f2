use crate::imagery::consts::{PREVIEW_IMAGE_HEIGHT, PREVIEW_IMAGE_WIDTH};
use crate::imagery::img;
use aws_config::environment::EnvironmentVariableCredentialsProvider;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::{Client, Config};
use std::env;
use std::time::Duration;
use uuid::Uuid;

/// S3 connection settings, read from the standard AWS environment variables
/// once at startup and passed in explicitly.
#[derive(Clone, Debug, Default)]
pub struct MediaStoreConfig {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: Option<bool>,
}

impl MediaStoreConfig {
    pub fn from_env() -> Self {
        Self {
            region: env::var("AWS_REGION").ok(),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            force_path_style: env::var("S3_FORCE_PATH_STYLE").ok().map(|v| v == "true"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("failed to decode the post image: {0}")]
    Image(#[from] image::ImageError),
    #[error("media store request failed: {0}")]
    Sdk(#[from] aws_sdk_s3::Error),
}

/// Stores post images in an S3 bucket: the original next to a smaller
/// preview rendition, both under a random key.
#[derive(Clone, Debug)]
pub struct MediaStore {
    client: Client,
    bucket: String,
}

impl MediaStore {
    /// S3 caps presigned URLs at seven days.
    const PRESIGNED_URL_DURATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    pub fn new(config: MediaStoreConfig, bucket: String) -> Self {
        let mut config_builder = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(
                config.region.unwrap_or_else(|| String::from("us-east-1")),
            ))
            .credentials_provider(EnvironmentVariableCredentialsProvider::new());
        if let Some(endpoint_url) = config.endpoint_url {
            // Custom endpoint URL for local development (used when connecting
            // to LocalStack instead of AWS S3).
            config_builder = config_builder.endpoint_url(endpoint_url);
        }
        if let Some(force_path_style) = config.force_path_style {
            // LocalStack uses a different URL structure than AWS S3.
            config_builder = config_builder.force_path_style(force_path_style);
        }
        Self {
            client: Client::from_conf(config_builder.build()),
            bucket,
        }
    }

    /// Uploads the post image plus its preview rendition and returns a
    /// presigned URL for the original.
    pub async fn store_post_image(&self, image_bytes: Vec<u8>) -> Result<String, MediaStoreError> {
        let key = Uuid::new_v4().to_string();
        let preview_bytes = img::resize(&image_bytes, PREVIEW_IMAGE_WIDTH, PREVIEW_IMAGE_HEIGHT)?;
        self.put_object(&format!("{key}-preview"), preview_bytes, "image/png")
            .await?;
        self.put_object(&key, image_bytes, "image/jpeg").await?;
        self.presigned_url(&key).await
    }

    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), MediaStoreError> {
        let size = bytes.len() as i64;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .content_length(size)
            .send()
            .await
            .map_err(aws_sdk_s3::Error::from)?;
        Ok(())
    }

    async fn presigned_url(&self, key: &str) -> Result<String, MediaStoreError> {
        let presigning_config = PresigningConfig::expires_in(Self::PRESIGNED_URL_DURATION)
            .expect("Failed to create a presigning config.");
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(aws_sdk_s3::Error::from)?;
        Ok(request.uri().to_string())
    }
}
