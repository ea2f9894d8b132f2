use crate::games::models::{Game, Guess, LeaderboardEntry};
use crate::storage::interface::{
    AvatarRepo, GameCounterRepo, GameRepo, GuessRepo, IGameStorage, LeaderboardRepo,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process game store. The maps mirror the key layout a key-value
/// backend would use: games by post id, a guess hash per post, a score
/// board per community, one avatar cache and one game counter map.
#[derive(Clone, Default)]
pub struct HashMapGameStorage {
    games: Arc<RwLock<HashMap<String, Game>>>,
    guesses: Arc<RwLock<HashMap<String, HashMap<String, Guess>>>>,
    leaderboards: Arc<RwLock<HashMap<String, HashMap<String, u64>>>>,
    avatars: Arc<RwLock<HashMap<String, String>>>,
    game_counts: Arc<RwLock<HashMap<String, u64>>>,
}

impl IGameStorage for HashMapGameStorage {}

impl GameRepo for HashMapGameStorage {
    async fn exists(&self, post_id: &str) -> bool {
        self.games.read().await.contains_key(post_id)
    }

    async fn insert(&self, game: Game) {
        self.games.write().await.insert(game.post_id.clone(), game);
    }

    async fn game(&self, post_id: &str) -> Option<Game> {
        self.games.read().await.get(post_id).cloned()
    }
}

impl GuessRepo for HashMapGameStorage {
    async fn insert_guess(&self, post_id: &str, guess: Guess) -> bool {
        let mut guesses = self.guesses.write().await;
        let post_guesses = guesses.entry(post_id.to_string()).or_default();
        match post_guesses.entry(guess.username.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(guess);
                true
            }
        }
    }

    async fn guess(&self, post_id: &str, username: &str) -> Option<Guess> {
        self.guesses
            .read()
            .await
            .get(post_id)
            .and_then(|post_guesses| post_guesses.get(username))
            .cloned()
    }

    async fn all_guesses(&self, post_id: &str) -> HashMap<String, Guess> {
        self.guesses
            .read()
            .await
            .get(post_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl LeaderboardRepo for HashMapGameStorage {
    async fn increment_score(&self, community_id: &str, username: &str, amount: u64) -> u64 {
        let mut leaderboards = self.leaderboards.write().await;
        let board = leaderboards.entry(community_id.to_string()).or_default();
        let total = board.entry(username.to_string()).or_insert(0);
        *total += amount;
        *total
    }

    async fn top_scores(&self, community_id: &str, limit: usize) -> Vec<LeaderboardEntry> {
        let leaderboards = self.leaderboards.read().await;
        let Some(board) = leaderboards.get(community_id) else {
            return vec![];
        };
        let mut entries: Vec<LeaderboardEntry> = board
            .iter()
            .map(|(username, score)| LeaderboardEntry {
                username: username.clone(),
                score: *score,
            })
            .collect();
        // Ties are broken by username so repeated reads stay stable.
        entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.username.cmp(&b.username)));
        entries.truncate(limit);
        entries
    }
}

impl AvatarRepo for HashMapGameStorage {
    async fn set_avatar_url(&self, username: &str, avatar_url: &str) {
        self.avatars
            .write()
            .await
            .insert(username.to_string(), avatar_url.to_string());
    }

    async fn avatar_urls(&self, usernames: &[String]) -> HashMap<String, Option<String>> {
        let avatars = self.avatars.read().await;
        usernames
            .iter()
            .map(|username| (username.clone(), avatars.get(username).cloned()))
            .collect()
    }
}

impl GameCounterRepo for HashMapGameStorage {
    async fn increment_game_count(&self, community_id: &str) -> u64 {
        let mut game_counts = self.game_counts.write().await;
        let count = game_counts.entry(community_id.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}
