use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    Result,
    hls::{Playlist, StreamInfo},
    logging::{ResolutionKind, ResolutionRecord},
    playback::NoPrompt,
    server::{params::QualityParams, state::AppState},
};

#[derive(Serialize)]
struct ResolvedUrl {
    url: String,
}

#[derive(Serialize)]
struct QualityOption<'a> {
    quality: &'a str,
    #[serde(flatten)]
    stream_info: &'a StreamInfo,
}

#[derive(Serialize)]
struct SelectionRequired {
    error: &'static str,
    code: &'static str,
}

fn quality_options(playlist: &Playlist) -> Response {
    let options: Vec<QualityOption<'_>> = playlist
        .ranked()
        .into_iter()
        .map(|e| QualityOption {
            quality: &e.quality,
            stream_info: &e.stream_info,
        })
        .collect();
    Json(options).into_response()
}

/// The bridge cannot prompt, so "ask" surfaces as a conflict the host
/// answers by listing qualities and retrying with one.
fn resolved(record: ResolutionRecord, result: Result<Option<String>>) -> Result<Response> {
    let outcome = match &result {
        Ok(Some(_)) => "OK",
        Ok(None) => "SELECTION_REQUIRED",
        Err(e) => e.error_code(),
    };
    record.finish(outcome).emit();

    match result? {
        Some(url) => Ok(Json(ResolvedUrl { url }).into_response()),
        None => Ok((
            StatusCode::CONFLICT,
            Json(SelectionRequired {
                error: "quality selection required",
                code: "SELECTION_REQUIRED",
            }),
        )
            .into_response()),
    }
}

/// Handle GET /live/{channel}.
pub async fn handle_live(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Query(params): Query<QualityParams>,
) -> Result<Response> {
    let record = ResolutionRecord::start(ResolutionKind::Live, &channel)
        .with_quality(params.quality.as_deref());
    let result = state
        .playback
        .live_url(&channel, params.quality.as_deref(), &NoPrompt)
        .await;
    resolved(record, result)
}

/// Handle GET /live/{channel}/qualities.
pub async fn handle_live_qualities(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<Response> {
    let playlist = state.playback.resolver().live_playlist(&channel).await?;
    Ok(quality_options(&playlist))
}

/// Handle GET /vod/{id}.
pub async fn handle_vod(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<QualityParams>,
) -> Result<Response> {
    let record = ResolutionRecord::start(ResolutionKind::Vod, &id)
        .with_quality(params.quality.as_deref());
    let result = state
        .playback
        .vod_url(&id, params.quality.as_deref(), &NoPrompt)
        .await;
    resolved(record, result)
}

/// Handle GET /vod/{id}/qualities.
pub async fn handle_vod_qualities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let playlist = state.playback.resolver().vod_playlist(&id).await?;
    Ok(quality_options(&playlist))
}
