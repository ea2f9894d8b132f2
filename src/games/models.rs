use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

/// One instance of the puzzle, tied to a single post. Created when the post
/// is authored and never destroyed; guesses accumulate next to it for as
/// long as the post lives.
#[derive(Clone, Debug)]
pub struct Game {
    pub post_id: String,
    pub community_id: String,
    /// Ordinal of the game within its community, used for post titles.
    pub game_number: u64,
    pub media_url: String,
    pub image_width: u32,
    pub image_height: u32,
    /// Where the photo was actually taken. Never serialized towards a
    /// player who has not guessed yet.
    pub location: LatLng,
}

/// A player's one and only answer for a game. Immutable once stored; the
/// score and the display string are derived from the pin at submission time
/// and never recomputed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    pub lat: f64,
    pub lng: f64,
    pub username: String,
    pub avatar_url: String,
    pub points: u64,
    pub distance_string: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u64,
}
