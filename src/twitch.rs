pub mod browse;
pub mod endpoints;
pub mod models;
pub mod resolver;

pub use browse::{BroadcastType, Catalog, VideoKind};
pub use endpoints::Endpoints;
pub use resolver::Resolver;
