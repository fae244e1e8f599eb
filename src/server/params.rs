use crate::twitch::BroadcastType;
use serde::Deserialize;

/// Items per listing page.
pub const ITEMS_PER_PAGE: u32 = 20;
/// Videos per channel-videos page.
pub const VIDEOS_PER_PAGE: u32 = 8;

fn default_limit() -> u32 {
    ITEMS_PER_PAGE
}

fn default_video_limit() -> u32 {
    VIDEOS_PER_PAGE
}

/// Query parameters for the /live and /vod resolution endpoints.
#[derive(Debug, Deserialize)]
pub struct QualityParams {
    /// Requested quality label; omitted to use the stored preference.
    #[serde(default)]
    pub quality: Option<String>,
}

/// Offset/limit paging for listings.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Query parameters for the /search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Query parameters for the channel videos endpoint.
#[derive(Debug, Deserialize)]
pub struct VideoListParams {
    #[serde(default)]
    pub broadcast_type: BroadcastType,
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_video_limit")]
    pub limit: u32,
}
