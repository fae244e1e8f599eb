pub mod record;

pub use record::{ResolutionKind, ResolutionRecord};
