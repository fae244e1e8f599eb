use crate::preferences::QualityPreference;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.twitch.tv";
pub const DEFAULT_USHER_BASE: &str = "https://usher.twitch.tv";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: String,
    /// Overrides the built-in client id when set.
    pub client_id: Option<String>,
    /// Opaque session token forwarded to VOD token requests.
    pub oauth_token: Option<String>,
    /// Used when a channel has no stored preference, and for VODs.
    pub default_quality: QualityPreference,
    pub preferences_path: PathBuf,
    pub api_base: String,
    pub usher_base: String,
    pub cors_origin: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: non_empty("PORT").unwrap_or_else(|| "8080".to_string()),
            client_id: non_empty("TWITCHPLAY_CLIENT_ID"),
            oauth_token: non_empty("TWITCHPLAY_OAUTH_TOKEN"),
            default_quality: QualityPreference::from_setting(
                non_empty("TWITCHPLAY_DEFAULT_QUALITY").as_deref(),
            ),
            preferences_path: non_empty("TWITCHPLAY_PREFERENCES")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("preferences.json")),
            api_base: non_empty("TWITCHPLAY_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            usher_base: non_empty("TWITCHPLAY_USHER_BASE")
                .unwrap_or_else(|| DEFAULT_USHER_BASE.to_string()),
            cors_origin: non_empty("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| "*".to_string()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080");
        assert_eq!(settings.client_id, None);
        assert_eq!(settings.default_quality, QualityPreference::Default);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.preferences_path, PathBuf::from("preferences.json"));
        assert_eq!(settings.cors_origin, "*");
    }

    #[test]
    fn test_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            ("PORT", "9000"),
            ("TWITCHPLAY_CLIENT_ID", "my-client"),
            ("TWITCHPLAY_OAUTH_TOKEN", ""),
            ("TWITCHPLAY_DEFAULT_QUALITY", "ask"),
            ("TWITCHPLAY_USHER_BASE", "http://localhost:1234"),
        ]
        .into_iter()
        .collect();

        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.port, "9000");
        assert_eq!(settings.client_id.as_deref(), Some("my-client"));
        assert_eq!(settings.oauth_token, None);
        assert_eq!(settings.default_quality, QualityPreference::Ask);
        assert_eq!(settings.usher_base, "http://localhost:1234");
    }
}
