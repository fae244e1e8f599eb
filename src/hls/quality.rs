/// Known quality labels, best first.
pub const SORTED_QUALITY_LIST: &[&str] = &[
    "Source",
    "live",
    "1080p60 - source",
    "1080p60",
    "1080p",
    "720p60 - source",
    "720p60",
    "720p30 - source",
    "720p30",
    "720p",
    "High",
    "540p30",
    "540p",
    "Medium",
    "480p30",
    "480p",
    "Low",
    "360p30",
    "360p",
    "240p30",
    "240p",
    "Mobile",
    "144p30",
    "144p",
];

/// Position of `label` in [`SORTED_QUALITY_LIST`]; unknown labels rank last.
pub fn rank(label: &str) -> usize {
    SORTED_QUALITY_LIST
        .iter()
        .position(|known| *known == label)
        .unwrap_or(usize::MAX)
}

/// Stable sort by preference; unknown labels keep their relative order.
pub fn sort_by_preference<T: AsRef<str>>(labels: &mut [T]) {
    labels.sort_by_key(|label| rank(label.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_known_and_unknown() {
        assert_eq!(rank("Source"), 0);
        assert!(rank("720p60") < rank("720p"));
        assert_eq!(rank("4k"), usize::MAX);
    }

    #[test]
    fn test_sort_unknown_last_in_encounter_order() {
        let mut labels = vec!["zeta", "144p", "audio_only", "Source", "720p60"];
        sort_by_preference(&mut labels);
        assert_eq!(labels, vec!["Source", "720p60", "144p", "zeta", "audio_only"]);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(rank("source"), usize::MAX);
    }
}
