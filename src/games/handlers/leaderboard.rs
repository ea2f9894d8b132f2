use crate::app_context::AppContext;
use crate::auth::extractors::Player;
use crate::games::handlers::http::LeaderboardHttpHandler;
use crate::games::handlers::responses::LeaderboardResponse;
use crate::storage::games::HashMapGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn top(
    _player: Player,
    Path(community_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<LeaderboardResponse> {
    let response = LeaderboardHttpHandler::new(app_context)
        .top(&community_id)
        .await;
    Json(response)
}
