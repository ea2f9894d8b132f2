use crate::app_context::AppContext;
use crate::auth::extractors::Player;
use crate::scheduler::responses::{
    DailyPostsError, StartDailyPostsResponse, StopDailyPostsResponse,
};
use crate::storage::games::HashMapGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn start(
    _player: Player,
    Path(community_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<StartDailyPostsResponse> {
    if app_context.daily_posts.is_running(&community_id).await {
        return Json(StartDailyPostsResponse {
            error: true,
            error_code: Some(DailyPostsError::AlreadyRunning),
        });
    }
    let handle = crate::scheduler::spawn_daily_post_job(app_context.clone(), community_id.clone());
    if !app_context.daily_posts.register(&community_id, handle).await {
        // Lost a race against a concurrent start; the fresh handle has
        // already been aborted.
        return Json(StartDailyPostsResponse {
            error: true,
            error_code: Some(DailyPostsError::AlreadyRunning),
        });
    }
    tracing::info!(
        task = "daily_post_job",
        community_id = %community_id,
        "Started daily game posts."
    );
    Json(StartDailyPostsResponse {
        error: false,
        error_code: None,
    })
}

#[axum::debug_handler]
pub async fn stop(
    _player: Player,
    Path(community_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<StopDailyPostsResponse> {
    if !app_context.daily_posts.cancel(&community_id).await {
        return Json(StopDailyPostsResponse {
            error: true,
            error_code: Some(DailyPostsError::NotRunning),
        });
    }
    tracing::info!(
        task = "daily_post_job",
        community_id = %community_id,
        "Stopped daily game posts."
    );
    Json(StopDailyPostsResponse {
        error: false,
        error_code: None,
    })
}
