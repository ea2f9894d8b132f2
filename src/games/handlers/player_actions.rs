use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::Player;
use crate::games::handlers::http::GameHttpHandler;
use crate::games::handlers::responses::WebViewExchangeResponse;
use crate::games::message_types::WebViewSentMessage;
use crate::storage::games::HashMapGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn exchange(
    player: Player,
    Path(post_id): Path<String>,
    State(app_context): State<AppContext<HashMapGameStorage>>,
    Json(message): Json<WebViewSentMessage>,
) -> Json<WebViewExchangeResponse> {
    let request_context = RequestContext {
        username: player.username,
        avatar_url: player.avatar_url,
        post_id,
    };
    let response = GameHttpHandler::new(app_context, &request_context)
        .exchange(message)
        .await;
    Json(response)
}
