use super::attributes;
use serde::Serialize;

/// Bitrate metadata from the `#EXT-X-STREAM-INF` line following a media tag.
///
/// Informational only: quality selection never looks at it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreamInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<(u32, u32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codecs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
}

impl StreamInfo {
    /// Parse a stream-info line. Anything unrecognised yields defaults.
    pub fn parse(line: &str) -> Self {
        let content = match line.trim().strip_prefix("#EXT-X-STREAM-INF:") {
            Some(c) => c,
            None => return Self::default(),
        };

        let mut info = Self::default();

        for (key, value) in attributes::pairs(content) {
            match key.as_str() {
                "BANDWIDTH" => info.bandwidth = value.parse().ok(),
                "RESOLUTION" => info.resolution = Self::parse_resolution(value),
                "CODECS" => info.codecs = Some(value.to_string()),
                "FRAME-RATE" => info.frame_rate = value.parse().ok(),
                _ => {}
            }
        }

        info
    }

    fn parse_resolution(s: &str) -> Option<(u32, u32)> {
        let (w, h) = s.split_once('x')?;
        Some((w.parse().ok()?, h.parse().ok()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let line = r#"#EXT-X-STREAM-INF:PROGRAM-ID=1,BANDWIDTH=6000000,RESOLUTION=1920x1080,CODECS="avc1.64002A,mp4a.40.2",VIDEO="chunked",FRAME-RATE=60.000"#;
        let info = StreamInfo::parse(line);
        assert_eq!(info.bandwidth, Some(6000000));
        assert_eq!(info.resolution, Some((1920, 1080)));
        assert_eq!(info.codecs.as_deref(), Some("avc1.64002A,mp4a.40.2"));
        assert_eq!(info.frame_rate, Some(60.0));
    }

    #[test]
    fn test_parse_other_line_is_default() {
        assert_eq!(StreamInfo::parse("https://cdn/x.m3u8"), StreamInfo::default());
    }
}
