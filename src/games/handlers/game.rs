use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::Player;
use crate::games::handlers::http::{CreateGameHttpHandler, GameHttpHandler};
use crate::games::handlers::requests::CreateGameRequest;
use crate::games::handlers::responses::{CreateGameResponse, GameResponse};
use crate::storage::games::HashMapGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    _player: Player,
    State(app_context): State<AppContext<HashMapGameStorage>>,
    Json(request): Json<CreateGameRequest>,
) -> Json<CreateGameResponse> {
    let response = CreateGameHttpHandler::new(app_context)
        .create(&request.community_id)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn game(
    player: Player,
    Path(post_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<GameResponse> {
    let request_context = RequestContext {
        username: player.username,
        avatar_url: player.avatar_url,
        post_id,
    };
    let response = GameHttpHandler::new(app_context, &request_context)
        .game()
        .await;
    Json(response)
}
