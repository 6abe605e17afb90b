use std::sync::LazyLock;

use regex::Regex;

use super::model::Feature;

// Checked in order; the first hit wins. Digit and word classes are ASCII only.
static FEATURE_PATTERNS: LazyLock<Vec<(Feature, Regex)>> = LazyLock::new(|| {
    [
        (Feature::SampleMania, r"(?i)Sample Mania"),
        (Feature::SoundGood, r"(?i)Does It Sound Good at (?-u:\d)+\?"),
        (Feature::HardestRecord, r"(?i)(?:The )?Hardest Record In The World"),
        (Feature::GuestMix, r"(?i)(?-u:[\w\s])+ Guest Mix"),
        (Feature::FinalVinyl, r"(?i)Final Vinyl"),
    ]
    .into_iter()
    .map(|(feature, pattern)| {
        let re = Regex::new(pattern).expect("feature patterns are valid regexes");
        (feature, re)
    })
    .collect()
});

/// Return the feature segment announced by `line`, if any.
pub fn detect_feature(line: &str) -> Option<Feature> {
    FEATURE_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(feature, _)| *feature)
}
