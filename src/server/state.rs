use crate::{
    Result,
    config::Settings,
    fetch::{ClientHeaders, Fetcher, ReqwestTransport},
    playback::Playback,
    preferences::{JsonFileStore, PreferenceStore},
    twitch::{Catalog, Endpoints, Resolver},
};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub playback: Playback,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(playback: Playback, catalog: Catalog) -> Self {
        Self { playback, catalog }
    }

    /// Wire the reqwest transport and the JSON preference file from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        let fetcher = Fetcher::new(transport, ClientHeaders::new(settings.client_id.as_deref()));
        let endpoints = Endpoints::new(&settings.api_base, &settings.usher_base);

        let resolver = Resolver::new(fetcher.clone(), endpoints.clone())
            .with_oauth_token(settings.oauth_token.clone());
        let catalog =
            Catalog::new(fetcher, endpoints).with_oauth_token(settings.oauth_token.clone());

        let store = Arc::new(JsonFileStore::new(&settings.preferences_path));
        let playback = Playback::new(
            resolver,
            PreferenceStore::new(store),
            settings.default_quality.clone(),
        );

        Ok(Self::new(playback, catalog))
    }
}
