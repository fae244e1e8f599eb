use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{Result, preferences::QualityPreference, server::state::AppState};

/// Handle GET /preferences/{channel}.
pub async fn handle_get_preference(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<Json<QualityPreference>> {
    Ok(Json(state.playback.preferences().load(&channel)?))
}

/// Handle PUT /preferences/{channel}.
pub async fn handle_put_preference(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(preference): Json<QualityPreference>,
) -> Result<StatusCode> {
    state.playback.preferences().save(&channel, &preference)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handle DELETE /preferences/{channel}.
pub async fn handle_delete_preference(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<StatusCode> {
    state
        .playback
        .preferences()
        .save(&channel, &QualityPreference::Default)?;
    Ok(StatusCode::NO_CONTENT)
}
