use serde::Deserialize;

/// One record from the imagery graph API listing. Field names follow the
/// wire format.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StreetViewImage {
    pub id: String,
    pub thumb_1024_url: String,
    pub width: u32,
    pub height: u32,
    pub is_pano: bool,
}
