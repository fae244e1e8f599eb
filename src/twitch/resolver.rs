use super::{Endpoints, VideoKind, models::AccessToken};
use crate::{Error, Result, fetch::Fetcher, hls::Playlist};

/// Turns a channel name or VOD id into a playable media URL.
///
/// Each call runs token request, playlist fetch, parse and selection in
/// sequence. Nothing is cached, so callers may retry a whole resolution.
#[derive(Clone)]
pub struct Resolver {
    fetcher: Fetcher,
    endpoints: Endpoints,
    oauth_token: Option<String>,
}

impl Resolver {
    pub fn new(fetcher: Fetcher, endpoints: Endpoints) -> Self {
        Self {
            fetcher,
            endpoints,
            oauth_token: None,
        }
    }

    pub fn with_oauth_token(mut self, token: Option<String>) -> Self {
        self.oauth_token = token;
        self
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn oauth_token(&self) -> Option<&str> {
        self.oauth_token.as_deref()
    }

    /// Fetch and parse the multivariant playlist of a live channel.
    ///
    /// A failed playlist download means the channel is offline.
    pub async fn live_playlist(&self, channel: &str) -> Result<Playlist> {
        let token_url = self.endpoints.channel_token(channel)?;
        let token: AccessToken = self.fetcher.fetch_json(token_url.as_str(), None).await?;

        let playlist_url = self
            .endpoints
            .hls_playlist(channel, &token.token, &token.sig)?;
        let text = match self.fetcher.fetch_text(playlist_url.as_str(), None).await {
            Ok(text) => text,
            Err(e) if e.is_http_failure() => {
                tracing::info!(channel, error = %e, "live playlist unavailable, channel offline");
                return Err(Error::StreamOffline(channel.to_string()));
            }
            Err(e) => return Err(e),
        };

        Playlist::parse(&text)
    }

    pub async fn live_qualities(&self, channel: &str) -> Result<Vec<String>> {
        Ok(self.live_playlist(channel).await?.qualities())
    }

    pub async fn resolve_live_url(&self, channel: &str, quality: Option<&str>) -> Result<String> {
        let playlist = self.live_playlist(channel).await?;
        let url = playlist.select_url(quality).to_string();
        tracing::info!(channel, ?quality, "resolved live stream");
        Ok(url)
    }

    /// Fetch and parse the multivariant playlist of a VOD.
    ///
    /// `id` must carry the VOD prefix (`v123`), dropped here. Archive ids
    /// (`a…`/`c…`) are played as parts and rejected.
    pub async fn vod_playlist(&self, id: &str) -> Result<Playlist> {
        let vod_id = strip_vod_prefix(id)?;

        let token_url = self.endpoints.vod_token(vod_id, self.oauth_token())?;
        let token: AccessToken = self.fetcher.fetch_json(token_url.as_str(), None).await?;

        let playlist_url = self
            .endpoints
            .vod_playlist(vod_id, &token.token, &token.sig)?;
        let text = self.fetcher.fetch_text(playlist_url.as_str(), None).await?;

        Playlist::parse(&text)
    }

    pub async fn vod_qualities(&self, id: &str) -> Result<Vec<String>> {
        Ok(self.vod_playlist(id).await?.qualities())
    }

    pub async fn resolve_vod_url(&self, id: &str, quality: Option<&str>) -> Result<String> {
        let playlist = self.vod_playlist(id).await?;
        let url = playlist.select_url(quality).to_string();
        tracing::info!(id, ?quality, "resolved vod");
        Ok(url)
    }
}

fn strip_vod_prefix(id: &str) -> Result<&str> {
    if VideoKind::from_id(id)? != VideoKind::Vod {
        return Err(Error::InvalidVideoId(id.to_string()));
    }
    match &id[1..] {
        "" => Err(Error::InvalidVideoId(id.to_string())),
        rest => Ok(rest),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::fetch::{ClientHeaders, testing::ScriptedTransport};
    use std::sync::Arc;

    pub const TOKEN_JSON: &str = r#"{"token":"T","sig":"S"}"#;

    pub fn two_entry_playlist() -> &'static str {
        "#EXTM3U\n\
         #EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID=\"chunked\",NAME=\"Source\",AUTOSELECT=YES,DEFAULT=YES\n\
         #EXT-X-STREAM-INF:PROGRAM-ID=1,BANDWIDTH=6000000,VIDEO=\"chunked\"\n\
         urlA\n\
         #EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID=\"720p\",NAME=\"720p\",AUTOSELECT=YES,DEFAULT=YES\n\
         #EXT-X-STREAM-INF:PROGRAM-ID=1,BANDWIDTH=3000000,VIDEO=\"720p\"\n\
         urlB\n"
    }

    pub fn resolver(transport: &Arc<ScriptedTransport>) -> Resolver {
        Resolver::new(
            Fetcher::new(transport.clone(), ClientHeaders::new(Some("test"))),
            Endpoints::new("https://api.test", "https://usher.test"),
        )
    }

    fn live_transport() -> Arc<ScriptedTransport> {
        Arc::new(
            ScriptedTransport::new()
                .respond(200, TOKEN_JSON)
                .respond(200, two_entry_playlist()),
        )
    }

    #[tokio::test]
    async fn test_resolve_live_requested_quality() {
        let transport = live_transport();
        let url = resolver(&transport)
            .resolve_live_url("chan", Some("720p"))
            .await
            .unwrap();
        assert_eq!(url, "urlB");

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://api.test/api/channels/chan/access_token");
        assert_eq!(
            requests[1].url,
            "https://usher.test/api/channel/hls/chan.m3u8?sig=S&token=T&allow_source=true"
        );
    }

    #[tokio::test]
    async fn test_resolve_live_without_quality_is_top_ranked() {
        let transport = live_transport();
        let url = resolver(&transport).resolve_live_url("chan", None).await.unwrap();
        assert_eq!(url, "urlA");
    }

    #[tokio::test]
    async fn test_live_qualities_ranked() {
        let transport = live_transport();
        let qualities = resolver(&transport).live_qualities("chan").await.unwrap();
        assert_eq!(qualities, vec!["Source", "720p"]);
    }

    #[tokio::test]
    async fn test_playlist_http_failure_is_offline() {
        let transport = Arc::new(
            (0..5).fold(ScriptedTransport::new().respond(200, TOKEN_JSON), |t, _| {
                t.respond(404, "")
            }),
        );
        let err = resolver(&transport).resolve_live_url("chan", None).await.unwrap_err();

        assert!(matches!(err, Error::StreamOffline(ref c) if c == "chan"));
        assert_eq!(transport.request_count(), 6);
    }

    #[tokio::test]
    async fn test_playlist_forbidden_is_offline() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(200, TOKEN_JSON)
                .respond(403, ""),
        );
        let err = resolver(&transport).live_playlist("chan").await.unwrap_err();
        assert!(matches!(err, Error::StreamOffline(_)));
    }

    #[tokio::test]
    async fn test_token_forbidden_passes_through() {
        let transport = Arc::new(ScriptedTransport::new().respond(403, ""));
        let err = resolver(&transport).live_playlist("chan").await.unwrap_err();

        assert!(matches!(err, Error::AccessForbidden(_)));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_token_json_error_passes_through() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, "not json"));
        let err = resolver(&transport).live_playlist("chan").await.unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }

    #[tokio::test]
    async fn test_empty_live_playlist_is_playlist_error() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(200, TOKEN_JSON)
                .respond(200, "#EXTM3U\n"),
        );
        let err = resolver(&transport).live_playlist("chan").await.unwrap_err();
        assert!(matches!(err, Error::PlaylistError(_)));
    }

    #[tokio::test]
    async fn test_resolve_vod_strips_prefix() {
        let transport = live_transport();
        let url = resolver(&transport)
            .with_oauth_token(Some("session".to_string()))
            .resolve_vod_url("v123", Some("720p"))
            .await
            .unwrap();
        assert_eq!(url, "urlB");

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "https://api.test/api/vods/123/access_token?oauth_token=session"
        );
        assert_eq!(
            requests[1].url,
            "https://usher.test/vod/123?nauth=T&nauthsig=S&allow_source=true"
        );
    }

    #[tokio::test]
    async fn test_vod_playlist_failure_is_not_offline() {
        let transport = Arc::new(
            (0..5).fold(ScriptedTransport::new().respond(200, TOKEN_JSON), |t, _| {
                t.respond(500, "")
            }),
        );
        let err = resolver(&transport).vod_playlist("v123").await.unwrap_err();
        assert!(matches!(err, Error::HttpError { .. }));
    }

    #[tokio::test]
    async fn test_vod_id_too_short() {
        let transport = Arc::new(ScriptedTransport::new());
        let err = resolver(&transport).vod_playlist("v").await.unwrap_err();

        assert!(matches!(err, Error::InvalidVideoId(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_vod_unknown_prefix_rejected() {
        let transport = Arc::new(ScriptedTransport::new());
        let err = resolver(&transport)
            .resolve_vod_url("x123", None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidVideoId(ref id) if id == "x123"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_vod_archive_id_rejected() {
        let transport = Arc::new(ScriptedTransport::new());
        for id in ["a123", "c123"] {
            let err = resolver(&transport).resolve_vod_url(id, None).await.unwrap_err();
            assert!(matches!(err, Error::InvalidVideoId(_)));
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_strip_vod_prefix() {
        assert_eq!(strip_vod_prefix("v42").unwrap(), "42");
        assert!(strip_vod_prefix("a42").is_err());
        assert!(strip_vod_prefix("").is_err());
    }
}
