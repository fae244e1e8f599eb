use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    Error, Result,
    server::{
        params::{PageParams, SearchParams, VideoListParams},
        state::AppState,
    },
    twitch::{
        VideoKind,
        models::{ArchivePart, Following, Game, Stream, TopGame, VideoPage},
    },
};

/// Handle GET /streams/featured.
pub async fn handle_featured(State(state): State<AppState>) -> Result<Json<Vec<Stream>>> {
    Ok(Json(state.catalog.featured_streams().await?))
}

/// Handle GET /streams.
pub async fn handle_streams(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<Stream>>> {
    Ok(Json(state.catalog.streams(page.offset, page.limit).await?))
}

/// Handle GET /games.
pub async fn handle_games(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<TopGame>>> {
    Ok(Json(state.catalog.top_games(page.offset, page.limit).await?))
}

/// Handle GET /games/{name}/streams.
pub async fn handle_game_streams(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<Stream>>> {
    let streams = state
        .catalog
        .game_streams(&name, page.offset, page.limit)
        .await?;
    Ok(Json(streams))
}

/// Handle GET /search.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Stream>>> {
    let streams = state
        .catalog
        .search_streams(&params.q, params.offset, params.limit)
        .await?;
    Ok(Json(streams))
}

/// Handle GET /users/{name}/following.
pub async fn handle_following(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Following>> {
    Ok(Json(state.catalog.following(&name.to_lowercase()).await?))
}

/// Handle GET /users/{name}/following/games.
pub async fn handle_followed_games(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Game>>> {
    Ok(Json(state.catalog.followed_games(&name.to_lowercase()).await?))
}

/// Handle GET /channels/{name}/videos.
pub async fn handle_channel_videos(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<VideoListParams>,
) -> Result<Json<VideoPage>> {
    let page = state
        .catalog
        .channel_videos(&name, params.offset, params.limit, params.broadcast_type)
        .await?;
    Ok(Json(page))
}

/// Handle GET /videos/{id}/parts.
pub async fn handle_video_parts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ArchivePart>>> {
    match VideoKind::from_id(&id)? {
        VideoKind::Archive => Ok(Json(state.catalog.archive_parts(&id).await?)),
        VideoKind::Vod => Err(Error::InvalidVideoId(format!(
            "{id} is a VOD, resolve it through /vod/{id}"
        ))),
    }
}
