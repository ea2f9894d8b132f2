use crate::games::models::{Game, Guess, LeaderboardEntry};
use std::collections::HashMap;

pub trait IGameStorage: GameRepo + GuessRepo + LeaderboardRepo + AvatarRepo + GameCounterRepo {}

pub trait GameRepo {
    async fn exists(&self, post_id: &str) -> bool;

    async fn insert(&self, game: Game);

    async fn game(&self, post_id: &str) -> Option<Game>;
}

pub trait GuessRepo {
    /// Stores the guess unless the user already has one for this post.
    /// Returns whether the guess was inserted; an existing guess is never
    /// overwritten.
    async fn insert_guess(&self, post_id: &str, guess: Guess) -> bool;

    async fn guess(&self, post_id: &str, username: &str) -> Option<Guess>;

    async fn all_guesses(&self, post_id: &str) -> HashMap<String, Guess>;
}

pub trait LeaderboardRepo {
    /// Adds `amount` to the user's cumulative community score and returns
    /// the new total.
    async fn increment_score(&self, community_id: &str, username: &str, amount: u64) -> u64;

    /// The highest cumulative scores of the community, descending, at most
    /// `limit` rows.
    async fn top_scores(&self, community_id: &str, limit: usize) -> Vec<LeaderboardEntry>;
}

pub trait AvatarRepo {
    async fn set_avatar_url(&self, username: &str, avatar_url: &str);

    /// Batch lookup; users without a cached avatar map to `None`.
    async fn avatar_urls(&self, usernames: &[String]) -> HashMap<String, Option<String>>;
}

pub trait GameCounterRepo {
    async fn increment_game_count(&self, community_id: &str) -> u64;
}
