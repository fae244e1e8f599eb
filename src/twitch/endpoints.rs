use crate::{
    Result,
    config::{DEFAULT_API_BASE, DEFAULT_USHER_BASE},
};
use url::Url;
use urlencoding::encode;

/// URL builders for the platform API and the usher playlist service.
#[derive(Debug, Clone)]
pub struct Endpoints {
    api_base: String,
    usher_base: String,
}

impl Endpoints {
    pub fn new(api_base: &str, usher_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            usher_base: usher_base.trim_end_matches('/').to_string(),
        }
    }

    fn api(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        Self::build(&self.api_base, path, params)
    }

    fn usher(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        Self::build(&self.usher_base, path, params)
    }

    fn build(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let url = format!("{base}{path}");
        // parse_with_params leaves a dangling '?' when there are no pairs.
        if params.is_empty() {
            Ok(Url::parse(&url)?)
        } else {
            Ok(Url::parse_with_params(&url, params)?)
        }
    }

    pub fn channel_token(&self, channel: &str) -> Result<Url> {
        self.api(&format!("/api/channels/{}/access_token", encode(channel)), &[])
    }

    pub fn hls_playlist(&self, channel: &str, token: &str, sig: &str) -> Result<Url> {
        self.usher(
            &format!("/api/channel/hls/{}.m3u8", encode(channel)),
            &[("sig", sig), ("token", token), ("allow_source", "true")],
        )
    }

    pub fn vod_token(&self, vod_id: &str, oauth_token: Option<&str>) -> Result<Url> {
        let path = format!("/api/vods/{}/access_token", encode(vod_id));
        match oauth_token {
            Some(t) => self.api(&path, &[("oauth_token", t)]),
            None => self.api(&path, &[]),
        }
    }

    pub fn vod_playlist(&self, vod_id: &str, token: &str, sig: &str) -> Result<Url> {
        self.usher(
            &format!("/vod/{}", encode(vod_id)),
            &[("nauth", token), ("nauthsig", sig), ("allow_source", "true")],
        )
    }

    pub fn featured_streams(&self) -> Result<Url> {
        self.api("/kraken/streams/featured", &[])
    }

    pub fn top_games(&self, offset: u32, limit: u32) -> Result<Url> {
        let (offset, limit) = (offset.to_string(), limit.to_string());
        self.api("/kraken/games/top", &[("offset", offset.as_str()), ("limit", limit.as_str())])
    }

    pub fn streams(&self, offset: u32, limit: u32) -> Result<Url> {
        let (offset, limit) = (offset.to_string(), limit.to_string());
        self.api("/kraken/streams", &[("offset", offset.as_str()), ("limit", limit.as_str())])
    }

    pub fn game_streams(&self, game: &str, offset: u32, limit: u32) -> Result<Url> {
        let (offset, limit) = (offset.to_string(), limit.to_string());
        self.api(
            "/kraken/streams",
            &[("offset", offset.as_str()), ("limit", limit.as_str()), ("game", game)],
        )
    }

    pub fn search_streams(&self, query: &str, offset: u32, limit: u32) -> Result<Url> {
        let (offset, limit) = (offset.to_string(), limit.to_string());
        self.api(
            "/kraken/search/streams",
            &[("offset", offset.as_str()), ("limit", limit.as_str()), ("q", query)],
        )
    }

    pub fn streams_for_channels(&self, channels: &[&str], limit: u32) -> Result<Url> {
        let (channels, limit) = (channels.join(","), limit.to_string());
        self.api("/kraken/streams", &[("channel", channels.as_str()), ("limit", limit.as_str())])
    }

    pub fn followed_channels(&self, user: &str, offset: u32, limit: u32) -> Result<Url> {
        let (offset, limit) = (offset.to_string(), limit.to_string());
        self.api(
            &format!("/kraken/users/{}/follows/channels", encode(user)),
            &[("offset", offset.as_str()), ("limit", limit.as_str())],
        )
    }

    pub fn followed_games(&self, user: &str, offset: u32, limit: u32) -> Result<Url> {
        let (offset, limit) = (offset.to_string(), limit.to_string());
        self.api(
            &format!("/api/users/{}/follows/games", encode(user)),
            &[("offset", offset.as_str()), ("limit", limit.as_str())],
        )
    }

    pub fn channel_videos(
        &self,
        channel: &str,
        offset: u32,
        limit: u32,
        broadcast_type: &str,
    ) -> Result<Url> {
        let (offset, limit) = (offset.to_string(), limit.to_string());
        self.api(
            &format!("/kraken/channels/{}/videos", encode(channel)),
            &[
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
                ("broadcast_type", broadcast_type),
            ],
        )
    }

    pub fn chunked_video(&self, video_id: &str) -> Result<Url> {
        self.api(&format!("/api/videos/{}", encode(video_id)), &[])
    }

    pub fn video_info(&self, video_id: &str, oauth_token: Option<&str>) -> Result<Url> {
        let path = format!("/kraken/videos/{}", encode(video_id));
        match oauth_token {
            Some(t) => self.api(&path, &[("oauth_token", t)]),
            None => self.api(&path, &[]),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_USHER_BASE)
    }
}
