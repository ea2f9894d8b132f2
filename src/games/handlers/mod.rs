pub mod game;
pub mod http;
pub mod leaderboard;
pub mod player_actions;
pub mod requests;
pub mod responses;
