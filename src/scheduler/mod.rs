use crate::app_context::AppContext;
use crate::games::handlers::http::CreateGameHttpHandler;
use crate::storage::games::HashMapGameStorage;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

pub mod handlers;
pub mod models;
pub mod responses;
#[cfg(test)]
pub mod tests;

pub const POSTING_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Spawns the daily posting loop for a community. The first post goes out a
/// full period after the job is started.
pub fn spawn_daily_post_job(
    app_context: AppContext<HashMapGameStorage>,
    community_id: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = time::interval_at(Instant::now() + POSTING_PERIOD, POSTING_PERIOD);
        loop {
            ticks.tick().await;
            let response = CreateGameHttpHandler::new(app_context.clone())
                .create(&community_id)
                .await;
            if response.error {
                tracing::error!(
                    task = "daily_post_job",
                    community_id = %community_id,
                    "Failed to create the daily game post."
                );
            }
        }
    })
}
