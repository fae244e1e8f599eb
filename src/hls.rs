pub mod attributes;
pub mod playlist;
pub mod quality;
pub mod stream_info;

pub use playlist::{Playlist, PlaylistEntry};
pub use quality::SORTED_QUALITY_LIST;
pub use stream_info::StreamInfo;
