use super::KeyValueStore;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY_PREFIX: &str = "quality.";
const ASK_SENTINEL: &str = "@ask";

/// How playback picks a quality when none is requested explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "quality", rename_all = "snake_case")]
pub enum QualityPreference {
    /// Defer to the global default.
    #[default]
    Default,
    /// Always use this label (best available if the stream lacks it).
    Fixed(String),
    /// Prompt on every playback.
    Ask,
}

impl QualityPreference {
    /// Interpret a settings value: unset means default, `ask` means prompt.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Default,
            Some(v) if v.eq_ignore_ascii_case("ask") => Self::Ask,
            Some(v) => Self::Fixed(v.to_string()),
        }
    }

    fn decode(stored: &str) -> Self {
        if stored == ASK_SENTINEL {
            Self::Ask
        } else {
            Self::Fixed(stored.to_string())
        }
    }
}

/// Per-channel quality preferences on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(channel: &str) -> String {
        format!("{KEY_PREFIX}{}", channel.to_lowercase())
    }

    pub fn load(&self, channel: &str) -> Result<QualityPreference> {
        Ok(self
            .store
            .get(&Self::key(channel))?
            .map(|v| QualityPreference::decode(&v))
            .unwrap_or_default())
    }

    /// Store `preference`. [`QualityPreference::Default`] removes the key.
    pub fn save(&self, channel: &str, preference: &QualityPreference) -> Result<()> {
        let key = Self::key(channel);
        match preference {
            QualityPreference::Default => self.store.delete(&key)?,
            QualityPreference::Fixed(label) => self.store.set(&key, label)?,
            QualityPreference::Ask => self.store.set(&key, ASK_SENTINEL)?,
        }
        tracing::debug!(channel, ?preference, "saved quality preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;

    fn prefs() -> (Arc<MemoryStore>, PreferenceStore) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), PreferenceStore::new(store))
    }

    #[test]
    fn test_missing_is_default() {
        let (_, prefs) = prefs();
        assert_eq!(prefs.load("chan").unwrap(), QualityPreference::Default);
    }

    #[test]
    fn test_fixed_and_ask_roundtrip_through_store() {
        let (store, prefs) = prefs();

        prefs.save("Chan", &QualityPreference::Fixed("720p60".into())).unwrap();
        assert_eq!(store.get("quality.chan").unwrap().as_deref(), Some("720p60"));
        assert_eq!(
            prefs.load("chan").unwrap(),
            QualityPreference::Fixed("720p60".into())
        );

        prefs.save("chan", &QualityPreference::Ask).unwrap();
        assert_eq!(prefs.load("CHAN").unwrap(), QualityPreference::Ask);
    }

    #[test]
    fn test_saving_default_removes_key() {
        let (store, prefs) = prefs();
        prefs.save("chan", &QualityPreference::Fixed("Source".into())).unwrap();

        prefs.save("chan", &QualityPreference::Default).unwrap();

        assert_eq!(store.get("quality.chan").unwrap(), None);
        assert_eq!(prefs.load("chan").unwrap(), QualityPreference::Default);
    }

    #[test]
    fn test_from_setting() {
        assert_eq!(QualityPreference::from_setting(None), QualityPreference::Default);
        assert_eq!(QualityPreference::from_setting(Some(" ")), QualityPreference::Default);
        assert_eq!(QualityPreference::from_setting(Some("ASK")), QualityPreference::Ask);
        assert_eq!(
            QualityPreference::from_setting(Some("1080p60")),
            QualityPreference::Fixed("1080p60".into())
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&QualityPreference::Fixed("720p".into())).unwrap();
        assert_eq!(json, r#"{"mode":"fixed","quality":"720p"}"#);

        let parsed: QualityPreference = serde_json::from_str(r#"{"mode":"ask"}"#).unwrap();
        assert_eq!(parsed, QualityPreference::Ask);
    }
}
