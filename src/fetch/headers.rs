use base64::{Engine, engine::general_purpose::STANDARD};
use std::collections::HashMap;

pub const USER_AGENT: &str = "User-Agent";
pub const USER_AGENT_STRING: &str =
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:6.0) Gecko/20100101 Firefox/6.0";
pub const CLIENT_ID_HEADER: &str = "Client-ID";

/// Built-in client id, base64 encoded.
const DEFAULT_CLIENT_ID: &str = "a2ltbmU3OGt4M25jeDZicmdvNG12NndraTVoMWtv";

/// Fixed headers attached to every platform request.
#[derive(Debug, Clone)]
pub struct ClientHeaders {
    client_id: String,
}

impl ClientHeaders {
    /// Use the configured client id, or the built-in one when unset or blank.
    pub fn new(configured_client_id: Option<&str>) -> Self {
        let client_id = match configured_client_id {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => Self::decode_default(DEFAULT_CLIENT_ID),
        };
        Self { client_id }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Merge caller headers over the fixed set. Caller values win.
    pub fn apply(&self, extra: Option<&HashMap<String, String>>) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(USER_AGENT.to_string(), USER_AGENT_STRING.to_string());
        headers.insert(CLIENT_ID_HEADER.to_string(), self.client_id.clone());

        if let Some(extra) = extra {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        headers
    }

    fn decode_default(encoded: &str) -> String {
        STANDARD
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_default()
    }
}

impl Default for ClientHeaders {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_id_is_decoded() {
        let headers = ClientHeaders::new(None);
        assert_eq!(headers.client_id(), "kimne78kx3ncx6brgo4mv6wki5h1ko");
    }

    #[test]
    fn test_blank_configured_id_falls_back() {
        let headers = ClientHeaders::new(Some("   "));
        assert_eq!(headers.client_id(), ClientHeaders::default().client_id());
    }

    #[test]
    fn test_undecodable_default_is_empty() {
        assert_eq!(ClientHeaders::decode_default("!!not base64!!"), "");
    }

    #[test]
    fn test_apply_caller_headers_win() {
        let headers = ClientHeaders::new(Some("configured"));
        let mut extra = HashMap::new();
        extra.insert(CLIENT_ID_HEADER.to_string(), "override".to_string());
        extra.insert("Authorization".to_string(), "OAuth abc".to_string());

        let merged = headers.apply(Some(&extra));
        assert_eq!(merged[CLIENT_ID_HEADER], "override");
        assert_eq!(merged[USER_AGENT], USER_AGENT_STRING);
        assert_eq!(merged["Authorization"], "OAuth abc");
    }

    #[test]
    fn test_apply_without_extra() {
        let merged = ClientHeaders::new(Some("configured")).apply(None);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[CLIENT_ID_HEADER], "configured");
    }
}
