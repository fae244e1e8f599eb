use super::{
    Endpoints,
    models::{
        ArchivePart, Channel, ChunkedVideo, FeaturedResponse, FollowedChannel, FollowsResponse,
        Following, Game, Stream, StreamsResponse, TopGame, TopGamesResponse, VideoInfo, VideoPage,
    },
};
use crate::{Error, Result, fetch::Fetcher};
use serde::{Deserialize, de::DeserializeOwned};

/// Page size for follow listings and batched stream lookups.
pub const FOLLOW_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastType {
    /// Past broadcasts.
    #[default]
    Archive,
    Highlight,
}

impl BroadcastType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Highlight => "highlight",
        }
    }
}

/// How a video id is played, by its type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    /// `v…`: signed VOD playlist.
    Vod,
    /// `a…` / `c…`: chunked archive played as consecutive parts.
    Archive,
}

impl VideoKind {
    pub fn from_id(id: &str) -> Result<Self> {
        match id.chars().next() {
            Some('v') => Ok(Self::Vod),
            Some('a' | 'c') => Ok(Self::Archive),
            _ => Err(Error::InvalidVideoId(id.to_string())),
        }
    }
}

/// Listing endpoints of the platform API.
#[derive(Clone)]
pub struct Catalog {
    fetcher: Fetcher,
    endpoints: Endpoints,
    oauth_token: Option<String>,
}

impl Catalog {
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

    async fn get<T: DeserializeOwned>(&self, url: url::Url) -> Result<T> {
        self.fetcher.fetch_json(url.as_str(), None).await
    }

    pub async fn featured_streams(&self) -> Result<Vec<Stream>> {
        let response: FeaturedResponse = self.get(self.endpoints.featured_streams()?).await?;
        Ok(response.featured.into_iter().map(|f| f.stream).collect())
    }

    pub async fn top_games(&self, offset: u32, limit: u32) -> Result<Vec<TopGame>> {
        let response: TopGamesResponse = self.get(self.endpoints.top_games(offset, limit)?).await?;
        Ok(response.top)
    }

    pub async fn streams(&self, offset: u32, limit: u32) -> Result<Vec<Stream>> {
        let response: StreamsResponse = self.get(self.endpoints.streams(offset, limit)?).await?;
        Ok(response.streams)
    }

    pub async fn game_streams(&self, game: &str, offset: u32, limit: u32) -> Result<Vec<Stream>> {
        let url = self.endpoints.game_streams(game, offset, limit)?;
        let response: StreamsResponse = self.get(url).await?;
        Ok(response.streams)
    }

    pub async fn search_streams(&self, query: &str, offset: u32, limit: u32) -> Result<Vec<Stream>> {
        let url = self.endpoints.search_streams(query, offset, limit)?;
        let response: StreamsResponse = self.get(url).await?;
        Ok(response.streams)
    }

    /// Every channel `user` follows, sorted by display name (case-insensitive).
    pub async fn followed_channels(&self, user: &str) -> Result<Vec<Channel>> {
        let mut channels = Vec::new();
        let mut offset = 0;

        loop {
            let url = self.endpoints.followed_channels(user, offset, FOLLOW_PAGE_SIZE)?;
            let page: FollowsResponse<FollowedChannel> = self.get(url).await?;
            if page.follows.is_empty() {
                break;
            }
            channels.extend(page.follows.into_iter().map(|f| f.channel));
            offset += FOLLOW_PAGE_SIZE;
        }

        channels.sort_by_key(|c| c.label().to_lowercase());
        Ok(channels)
    }

    /// Live streams among followed channels, most viewers first.
    pub async fn following(&self, user: &str) -> Result<Following> {
        let others = self.followed_channels(user).await?;
        let names: Vec<&str> = others.iter().map(|c| c.name.as_str()).collect();

        let mut live = Vec::new();
        for chunk in names.chunks(FOLLOW_PAGE_SIZE as usize) {
            let url = self.endpoints.streams_for_channels(chunk, FOLLOW_PAGE_SIZE)?;
            let response: StreamsResponse = self.get(url).await?;
            live.extend(response.streams);
        }

        live.sort_by(|a, b| b.viewers.cmp(&a.viewers));
        tracing::debug!(user, live = live.len(), followed = others.len(), "loaded following");
        Ok(Following { live, others })
    }

    pub async fn followed_games(&self, user: &str) -> Result<Vec<Game>> {
        let mut games = Vec::new();
        let mut offset = 0;

        loop {
            let url = self.endpoints.followed_games(user, offset, FOLLOW_PAGE_SIZE)?;
            let page: FollowsResponse<Game> = self.get(url).await?;
            if page.follows.is_empty() {
                break;
            }
            games.extend(page.follows);
            offset += FOLLOW_PAGE_SIZE;
        }

        Ok(games)
    }

    pub async fn channel_videos(
        &self,
        channel: &str,
        offset: u32,
        limit: u32,
        broadcast_type: BroadcastType,
    ) -> Result<VideoPage> {
        let url = self
            .endpoints
            .channel_videos(channel, offset, limit, broadcast_type.as_str())?;
        self.get(url).await
    }

    pub async fn video_title(&self, id: &str) -> Result<Option<String>> {
        let url = self.endpoints.video_info(id, self.oauth_token.as_deref())?;
        let info: VideoInfo = self.get(url).await?;
        Ok(info.title)
    }

    /// Parts of an archived broadcast, titled `"<title> - Part n of N"`.
    pub async fn archive_parts(&self, id: &str) -> Result<Vec<ArchivePart>> {
        let video: ChunkedVideo = self.get(self.endpoints.chunked_video(id)?).await?;
        let title = self.video_title(id).await?.unwrap_or_else(|| id.to_string());
        let total = video.chunks.live.len();

        Ok(video
            .chunks
            .live
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| ArchivePart {
                url: chunk.url,
                title: format!("{} - Part {} of {}", title, i + 1, total),
                preview: video.preview.clone(),
            })
            .collect())
    }
}
