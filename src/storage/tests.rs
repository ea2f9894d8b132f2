use crate::games::models::{Guess, LeaderboardEntry};
use crate::storage::games::HashMapGameStorage;
use crate::storage::interface::{AvatarRepo, GameCounterRepo, GuessRepo, LeaderboardRepo};

fn guess_by(username: &str, points: u64) -> Guess {
    Guess {
        lat: 12.34,
        lng: 56.78,
        username: username.to_string(),
        avatar_url: format!("https://example.com/avatars/{username}.png"),
        points,
        distance_string: String::from("1.11 km"),
    }
}

#[tokio::test]
async fn first_guess_is_stored_and_the_second_one_is_rejected() {
    let storage = HashMapGameStorage::default();

    let first = guess_by("cartographer", 4997);
    let second = guess_by("cartographer", 100);

    assert!(storage.insert_guess("post1", first.clone()).await);
    assert!(!storage.insert_guess("post1", second).await);
    assert_eq!(storage.guess("post1", "cartographer").await, Some(first));
}

#[tokio::test]
async fn guesses_are_scoped_to_their_post() {
    let storage = HashMapGameStorage::default();

    storage.insert_guess("post1", guess_by("wanderer", 2500)).await;

    assert_eq!(storage.guess("post2", "wanderer").await, None);
    assert!(storage.all_guesses("post2").await.is_empty());
    assert_eq!(storage.all_guesses("post1").await.len(), 1);
}

#[tokio::test]
async fn leaderboard_accumulates_and_orders_scores() {
    let storage = HashMapGameStorage::default();

    storage.increment_score("community1", "alice", 1000).await;
    storage.increment_score("community1", "bob", 4000).await;
    let alices_total = storage.increment_score("community1", "alice", 4000).await;
    storage.increment_score("community1", "carol", 4000).await;

    assert_eq!(alices_total, 5000);
    let top = storage.top_scores("community1", 10).await;
    assert_eq!(
        top,
        vec![
            LeaderboardEntry {
                username: String::from("alice"),
                score: 5000,
            },
            LeaderboardEntry {
                username: String::from("bob"),
                score: 4000,
            },
            LeaderboardEntry {
                username: String::from("carol"),
                score: 4000,
            },
        ],
    );
}

#[tokio::test]
async fn leaderboard_respects_the_row_limit() {
    let storage = HashMapGameStorage::default();

    for index in 0..5 {
        storage
            .increment_score("community1", &format!("player{index}"), 100 + index)
            .await;
    }

    let top = storage.top_scores("community1", 2).await;
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].score, 104);
    assert_eq!(top[1].score, 103);
}

#[tokio::test]
async fn unknown_community_has_an_empty_leaderboard() {
    let storage = HashMapGameStorage::default();
    assert!(storage.top_scores("nowhere", 10).await.is_empty());
}

#[tokio::test]
async fn avatar_lookup_reports_missing_users_as_none() {
    let storage = HashMapGameStorage::default();

    storage
        .set_avatar_url("alice", "https://example.com/avatars/alice.png")
        .await;

    let usernames = vec![String::from("alice"), String::from("bob")];
    let avatars = storage.avatar_urls(&usernames).await;
    assert_eq!(
        avatars.get("alice"),
        Some(&Some(String::from("https://example.com/avatars/alice.png"))),
    );
    assert_eq!(avatars.get("bob"), Some(&None));
}

#[tokio::test]
async fn game_counts_are_tracked_per_community() {
    let storage = HashMapGameStorage::default();

    assert_eq!(storage.increment_game_count("community1").await, 1);
    assert_eq!(storage.increment_game_count("community1").await, 2);
    assert_eq!(storage.increment_game_count("community2").await, 1);
}
