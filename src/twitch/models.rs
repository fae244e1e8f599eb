use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signed access token for a channel or VOD playlist.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub token: String,
    pub sig: String,
}

/// Sized image URLs (box art, stream previews).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Images {
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Game {
    pub name: String,
    #[serde(default, rename = "box")]
    pub box_art: Option<Images>,
    #[serde(default, rename = "_id")]
    pub id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopGame {
    pub game: Game,
    #[serde(default)]
    pub viewers: u64,
    #[serde(default)]
    pub channels: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Channel {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub video_banner: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
}

impl Channel {
    /// Display name, falling back to the login name.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Stream {
    pub channel: Channel,
    #[serde(default)]
    pub viewers: u64,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub preview: Option<Images>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturedStream {
    pub stream: Stream,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FollowedChannel {
    pub channel: Channel,
}

/// Channel reference embedded in a video.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoChannel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Seconds.
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub channel: Option<VideoChannel>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoPage {
    #[serde(rename = "_total", default)]
    pub total: u64,
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// Live followed streams plus every followed channel.
#[derive(Debug, Clone, Serialize)]
pub struct Following {
    pub live: Vec<Stream>,
    pub others: Vec<Channel>,
}

/// One playable part of an archived, chunked broadcast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchivePart {
    pub url: String,
    pub title: String,
    pub preview: Option<String>,
}

// Response envelopes. A missing list key decodes as empty.

#[derive(Debug, Deserialize)]
pub(crate) struct FeaturedResponse {
    #[serde(default)]
    pub featured: Vec<FeaturedStream>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopGamesResponse {
    #[serde(default)]
    pub top: Vec<TopGame>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StreamsResponse {
    #[serde(default)]
    pub streams: Vec<Stream>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FollowsResponse<T> {
    #[serde(default = "Vec::new")]
    pub follows: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChunkedVideo {
    #[serde(default)]
    pub chunks: Chunks,
    #[serde(default)]
    pub preview: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Chunks {
    #[serde(default)]
    pub live: Vec<Chunk>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Chunk {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoInfo {
    #[serde(default)]
    pub title: Option<String>,
}
