use crate::{
    Result,
    hls::Playlist,
    preferences::{PreferenceStore, QualityPreference},
    twitch::Resolver,
};

/// Interactive single-choice dialog provided by the host.
pub trait QualityPrompt: Send + Sync {
    /// Pick one of `options`; `None` means the user backed out.
    fn choose(&self, title: &str, options: &[String]) -> Option<usize>;

    /// `false` when `choose` can never pick, so callers skip the fetch.
    fn can_answer(&self) -> bool {
        true
    }
}

/// Prompt that never chooses, for hosts that cannot ask.
pub struct NoPrompt;

impl QualityPrompt for NoPrompt {
    fn choose(&self, _title: &str, _options: &[String]) -> Option<usize> {
        None
    }

    fn can_answer(&self) -> bool {
        false
    }
}

/// Picks the quality for a playback request and resolves its URL.
#[derive(Clone)]
pub struct Playback {
    resolver: Resolver,
    preferences: PreferenceStore,
    default_quality: QualityPreference,
}

impl Playback {
    pub fn new(
        resolver: Resolver,
        preferences: PreferenceStore,
        default_quality: QualityPreference,
    ) -> Self {
        Self {
            resolver,
            preferences,
            default_quality,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Media URL for a live channel, or `None` if the user cancelled the prompt.
    ///
    /// An explicit `requested` quality wins; otherwise the channel's stored
    /// preference, then the global default.
    pub async fn live_url(
        &self,
        channel: &str,
        requested: Option<&str>,
        prompt: &dyn QualityPrompt,
    ) -> Result<Option<String>> {
        let preference = match requested {
            Some(q) => QualityPreference::Fixed(q.to_string()),
            None => match self.preferences.load(channel)? {
                QualityPreference::Default => self.default_quality.clone(),
                stored => stored,
            },
        };
        if preference == QualityPreference::Ask && !prompt.can_answer() {
            return Ok(None);
        }

        let playlist = self.resolver.live_playlist(channel).await?;
        let title = format!("Choose playback quality for {channel}");
        Ok(Self::pick(&playlist, &preference, &title, prompt))
    }

    /// Media URL for a VOD, or `None` if the user cancelled the prompt.
    pub async fn vod_url(
        &self,
        id: &str,
        requested: Option<&str>,
        prompt: &dyn QualityPrompt,
    ) -> Result<Option<String>> {
        let preference = match requested {
            Some(q) => QualityPreference::Fixed(q.to_string()),
            None => self.default_quality.clone(),
        };
        if preference == QualityPreference::Ask && !prompt.can_answer() {
            return Ok(None);
        }

        let playlist = self.resolver.vod_playlist(id).await?;
        let title = format!("Choose playback quality for {id}");
        Ok(Self::pick(&playlist, &preference, &title, prompt))
    }

    fn pick(
        playlist: &Playlist,
        preference: &QualityPreference,
        title: &str,
        prompt: &dyn QualityPrompt,
    ) -> Option<String> {
        let quality = match preference {
            QualityPreference::Default => None,
            QualityPreference::Fixed(q) => Some(q.clone()),
            QualityPreference::Ask => {
                let qualities = playlist.qualities();
                let index = prompt.choose(title, &qualities)?;
                Some(qualities.get(index)?.clone())
            }
        };

        Some(playlist.select_url(quality.as_deref()).to_string())
    }
}
