pub mod quality;
pub mod store;

pub use quality::{PreferenceStore, QualityPreference};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
