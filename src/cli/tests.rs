use crate::cli::Args;
use std::{net::SocketAddr, str::FromStr};
use url::Url;

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        imagery_base_url: Url::from_str("https://graph.example.com")
            .expect("Failed to construct fake imagery base URL."),
        imagery_access_token: String::from("testToken"),
        jwt_signing_key: String::from("testKey"),
        media_bucket: String::from("test-post-images"),
    }
}
