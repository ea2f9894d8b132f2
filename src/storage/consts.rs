/// How many rows a community leaderboard read returns at most.
pub const LEADERBOARD_SIZE: usize = 100;
