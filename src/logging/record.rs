use chrono::{DateTime, Utc};
use std::time::Instant;
use uuid::Uuid;

/// What a resolution request targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    Live,
    Vod,
}

impl ResolutionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Vod => "vod",
        }
    }
}

/// Structured log line for one live or VOD resolution.
#[derive(Debug, Clone)]
pub struct ResolutionRecord {
    pub request_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: ResolutionKind,
    pub target: String,
    pub requested_quality: Option<String>,
    pub outcome: &'static str,
    pub elapsed_ms: u128,
    started: Instant,
}

impl ResolutionRecord {
    pub fn start(kind: ResolutionKind, target: &str) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            target: target.to_string(),
            requested_quality: None,
            outcome: "PENDING",
            elapsed_ms: 0,
            started: Instant::now(),
        }
    }

    pub fn with_quality(mut self, quality: Option<&str>) -> Self {
        self.requested_quality = quality.map(String::from);
        self
    }

    /// Record the outcome code and elapsed time.
    pub fn finish(mut self, outcome: &'static str) -> Self {
        self.outcome = outcome;
        self.elapsed_ms = self.started.elapsed().as_millis();
        self
    }

    pub fn emit(&self) {
        tracing::info!(
            request_id = %self.request_id,
            timestamp = %self.timestamp.to_rfc3339(),
            kind = self.kind.as_str(),
            target = %self.target,
            requested_quality = ?self.requested_quality,
            outcome = self.outcome,
            elapsed_ms = self.elapsed_ms as u64,
            "resolution"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lifecycle() {
        let record = ResolutionRecord::start(ResolutionKind::Live, "chan").with_quality(Some("720p"));
        assert_eq!(record.outcome, "PENDING");

        let done = record.finish("OK");
        assert_eq!(done.outcome, "OK");
        assert_eq!(done.requested_quality.as_deref(), Some("720p"));
        assert_eq!(done.kind.as_str(), "live");
        done.emit();
    }

    #[test]
    fn test_request_ids_unique() {
        let a = ResolutionRecord::start(ResolutionKind::Vod, "v1");
        let b = ResolutionRecord::start(ResolutionKind::Vod, "v1");
        assert_ne!(a.request_id, b.request_id);
    }
}
