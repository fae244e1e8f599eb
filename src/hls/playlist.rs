use super::{StreamInfo, attributes, quality};
use crate::{Error, Result};

const MEDIA_TAG: &str = "#EXT-X-MEDIA:";

/// One rendition of a multivariant playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub quality: String,
    pub url: String,
    pub stream_info: StreamInfo,
}

/// Quality label to media URL mapping parsed from a multivariant playlist.
///
/// Never empty. Entries keep the order they first appeared in; a repeated
/// label replaces the earlier URL in place.
#[derive(Debug, Clone)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Parse raw playlist text.
    ///
    /// Each `#EXT-X-MEDIA:` line opens a three-line record: the media tag
    /// carrying `NAME="<label>"`, a stream-info line, then the media URL.
    pub fn parse(input: &str) -> Result<Self> {
        let mut entries: Vec<PlaylistEntry> = Vec::new();
        let mut lines = input.lines();

        while let Some(line) = lines.next() {
            if !line.trim_start().starts_with(MEDIA_TAG) {
                continue;
            }

            let quality = Self::parse_name(line)?;
            let stream_info = lines
                .next()
                .map(StreamInfo::parse)
                .ok_or_else(|| Self::truncated(&quality))?;
            let url = lines
                .next()
                .map(str::trim)
                .ok_or_else(|| Self::truncated(&quality))?;

            if url.is_empty() {
                return Err(Error::PlaylistError(format!(
                    "empty media URL for quality {quality:?}"
                )));
            }

            let entry = PlaylistEntry {
                quality,
                url: url.to_string(),
                stream_info,
            };

            match entries.iter_mut().find(|e| e.quality == entry.quality) {
                Some(existing) => *existing = entry,
                None => entries.push(entry),
            }
        }

        if entries.is_empty() {
            return Err(Error::PlaylistError(
                "could not find playable urls".to_string(),
            ));
        }

        tracing::debug!(count = entries.len(), "parsed multivariant playlist");
        Ok(Self { entries })
    }

    fn parse_name(line: &str) -> Result<String> {
        let content = &line.trim_start()[MEDIA_TAG.len()..];
        // The label runs from the opening quote to the next quote.
        attributes::split(content)
            .into_iter()
            .find_map(|attr| attr.strip_prefix("NAME=\""))
            .and_then(|rest| rest.split_once('"'))
            .map(|(name, _)| name.to_string())
            .ok_or_else(|| Error::PlaylistError(format!("media tag without NAME: {line}")))
    }

    fn truncated(quality: &str) -> Error {
        Error::PlaylistError(format!("truncated record for quality {quality:?}"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in playlist order.
    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn get(&self, quality: &str) -> Option<&str> {
        self.entry(quality).map(|e| e.url.as_str())
    }

    fn entry(&self, quality: &str) -> Option<&PlaylistEntry> {
        self.entries.iter().find(|e| e.quality == quality)
    }

    /// Entries ordered best quality first.
    pub fn ranked(&self) -> Vec<&PlaylistEntry> {
        let mut ranked: Vec<&PlaylistEntry> = self.entries.iter().collect();
        ranked.sort_by_key(|e| quality::rank(&e.quality));
        ranked
    }

    /// Quality labels ordered best first.
    pub fn qualities(&self) -> Vec<String> {
        self.ranked().into_iter().map(|e| e.quality.clone()).collect()
    }

    /// URL for `requested`, or for the top-ranked quality when it is
    /// missing or not offered.
    pub fn select_url(&self, requested: Option<&str>) -> &str {
        if let Some(entry) = requested.and_then(|q| self.entry(q)) {
            return &entry.url;
        }

        // Non-empty by construction.
        let best = self.ranked()[0];
        tracing::debug!(
            requested = ?requested,
            fallback = %best.quality,
            "requested quality unavailable, using best"
        );
        &best.url
    }
}
