pub mod config;
pub mod error;
pub mod fetch;
pub mod hls;
pub mod logging;
pub mod playback;
pub mod preferences;
pub mod server;
pub mod twitch;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
