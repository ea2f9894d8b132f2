use clap::Parser;
use std::net::SocketAddr;
use url::Url;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "https://graph.mapillary.com")]
    pub imagery_base_url: Url,
    #[arg(long)]
    pub imagery_access_token: String,
    #[arg(long)]
    pub jwt_signing_key: String,
    #[arg(long)]
    #[arg(default_value = "streetspot-post-images")]
    pub media_bucket: String,
}
