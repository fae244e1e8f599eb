use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single-shot HTTP GET. Implementations must not retry on their own.
///
/// An error means the exchange never produced a status (DNS, connect,
/// TLS, body read); HTTP error statuses are returned as responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<HttpResponse>;
}

/// Transport backed by a reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<HttpResponse> {
        let mut request = self.client.get(url);

        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_reqwest_transport_returns_error_statuses_as_responses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .get(&format!("{}/gone", server.uri()), &HashMap::new())
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, "nope");
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_reqwest_transport_sends_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/token"))
            .and(header("Client-ID", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let mut headers = HashMap::new();
        headers.insert("Client-ID".to_string(), "abc".to_string());

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .get(&format!("{}/token", server.uri()), &headers)
            .await
            .unwrap();

        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_refused_is_fetch_failure() {
        let transport = ReqwestTransport::new().unwrap();
        let err = transport
            .get("http://127.0.0.1:1/unreachable", &HashMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, crate::Error::FetchFailed { .. }));
    }
}
