use super::{ClientHeaders, HttpResponse, Transport};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, sync::Arc};

/// Attempts per request before giving up with [`Error::HttpError`].
pub const MAX_ATTEMPTS: u32 = 5;

/// Platform API fetcher with a bounded retry loop.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    headers: ClientHeaders,
    max_attempts: u32,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, headers: ClientHeaders) -> Self {
        Self {
            transport,
            headers,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn headers(&self) -> &ClientHeaders {
        &self.headers
    }

    /// GET `url` and return the body as text.
    ///
    /// Transport failures and non-403 error statuses are retried up to
    /// [`MAX_ATTEMPTS`] times. A 403 aborts at once.
    pub async fn fetch_text(
        &self,
        url: &str,
        extra_headers: Option<&HashMap<String, String>>,
    ) -> Result<String> {
        let headers = self.headers.apply(extra_headers);

        for attempt in 1..=self.max_attempts {
            match self.transport.get(url, &headers).await {
                Ok(response) if response.is_success() => {
                    tracing::debug!(url, attempt, "HTTP request succeeded");
                    return Ok(response.body);
                }
                Ok(HttpResponse { status: 403, .. }) => {
                    tracing::debug!(url, attempt, "HTTP 403, not retrying");
                    return Err(Error::AccessForbidden(url.to_string()));
                }
                Ok(response) => {
                    tracing::warn!(url, attempt, status = response.status, "HTTP error status");
                }
                Err(e) => {
                    tracing::warn!(url, attempt, error = %e, "transport failure");
                }
            }
        }

        Err(Error::HttpError {
            url: url.to_string(),
            attempts: self.max_attempts,
        })
    }

    /// GET `url` and decode the body as JSON into `T`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        extra_headers: Option<&HashMap<String, String>>,
    ) -> Result<T> {
        let body = self.fetch_text(url, extra_headers).await?;
        let value = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(url, error = %e, "response body is not valid JSON");
            Error::JsonError(format!("{url}: {e}"))
        })?;
        Ok(value)
    }
}
