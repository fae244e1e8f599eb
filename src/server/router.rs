use axum::{
    Json, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{handlers, state::AppState};

/// Create the application router.
pub fn create_router(state: AppState, cors_origin: &str) -> anyhow::Result<Router> {
    let cors = if cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(cors_origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    };

    let app = Router::new()
        .route("/live/{channel}", get(handlers::handle_live))
        .route("/live/{channel}/qualities", get(handlers::handle_live_qualities))
        .route("/vod/{id}", get(handlers::handle_vod))
        .route("/vod/{id}/qualities", get(handlers::handle_vod_qualities))
        .route(
            "/preferences/{channel}",
            get(handlers::handle_get_preference)
                .put(handlers::handle_put_preference)
                .delete(handlers::handle_delete_preference),
        )
        .route("/streams", get(handlers::handle_streams))
        .route("/streams/featured", get(handlers::handle_featured))
        .route("/games", get(handlers::handle_games))
        .route("/games/{name}/streams", get(handlers::handle_game_streams))
        .route("/search", get(handlers::handle_search))
        .route("/users/{name}/following", get(handlers::handle_following))
        .route(
            "/users/{name}/following/games",
            get(handlers::handle_followed_games),
        )
        .route("/channels/{name}/videos", get(handlers::handle_channel_videos))
        .route("/videos/{id}/parts", get(handlers::handle_video_parts))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
