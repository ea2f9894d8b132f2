use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::cors;
use crate::storage::games::HashMapGameStorage;
use crate::{auth, games, health, scheduler};
use axum::routing::{get, post};
use axum::Router;

pub fn new(args: &Args, app_context: AppContext<HashMapGameStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let auth_routes = Router::new().route("/passcode/decode", get(auth::handlers::decode_passcode));
    let games_routes = Router::new()
        .route("/", post(games::handlers::game::create))
        .route("/:post-id", get(games::handlers::game::game))
        .route(
            "/:post-id/webview",
            post(games::handlers::player_actions::exchange),
        );
    let communities_routes = Router::new()
        .route(
            "/:community-id/leaderboard",
            get(games::handlers::leaderboard::top),
        )
        .route(
            "/:community-id/daily-posts",
            post(scheduler::handlers::start).delete(scheduler::handlers::stop),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/games", games_routes)
        .nest("/communities", communities_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
