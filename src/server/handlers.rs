pub mod browse;
pub mod preferences;
pub mod resolve;

pub use browse::{
    handle_channel_videos, handle_featured, handle_followed_games, handle_following,
    handle_game_streams, handle_games, handle_search, handle_streams, handle_video_parts,
};
pub use preferences::{handle_delete_preference, handle_get_preference, handle_put_preference};
pub use resolve::{handle_live, handle_live_qualities, handle_vod, handle_vod_qualities};
