use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Access forbidden: {0}")]
    AccessForbidden(String),

    #[error("HTTP request failed after {attempts} attempts: {url}")]
    HttpError { url: String, attempts: u32 },

    #[error("Invalid JSON response: {0}")]
    JsonError(String),

    #[error("Invalid playlist: {0}")]
    PlaylistError(String),

    #[error("Stream offline: {0}")]
    StreamOffline(String),

    /// Raised by transports; the fetcher retries it and never surfaces it.
    #[error("Failed to fetch URL: {url} - {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid video id: {0}")]
    InvalidVideoId(String),

    #[error("Preference store error: {0}")]
    Store(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

impl Error {
    /// Stable code the host maps to a localized notification.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AccessForbidden(_) => "ACCESS_FORBIDDEN",
            Self::HttpError { .. } => "HTTP_ERROR",
            Self::JsonError(_) => "JSON_ERROR",
            Self::PlaylistError(_) => "PLAYLIST_ERROR",
            Self::StreamOffline(_) => "STREAM_OFFLINE",
            Self::FetchFailed { .. } => "FETCH_FAILED",
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::InvalidVideoId(_) => "INVALID_VIDEO_ID",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::AccessForbidden(_) => StatusCode::FORBIDDEN,
            Self::StreamOffline(_) => StatusCode::NOT_FOUND,
            Self::HttpError { .. }
            | Self::JsonError(_)
            | Self::PlaylistError(_)
            | Self::FetchFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::InvalidUrl(_) | Self::InvalidVideoId(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP-level failures the live resolver reinterprets as an offline channel.
    pub fn is_http_failure(&self) -> bool {
        matches!(self, Self::AccessForbidden(_) | Self::HttpError { .. })
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::FetchFailed {
            url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_failures_are_distinguished() {
        assert!(Error::AccessForbidden("x".into()).is_http_failure());
        assert!(
            Error::HttpError {
                url: "x".into(),
                attempts: 5
            }
            .is_http_failure()
        );
        assert!(!Error::JsonError("x".into()).is_http_failure());
        assert!(!Error::PlaylistError("x".into()).is_http_failure());
    }

    #[test]
    fn test_offline_maps_to_not_found() {
        let response = Error::StreamOffline("chan".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
