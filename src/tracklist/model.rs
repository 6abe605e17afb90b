use std::fmt;

use serde::Serialize;

/// A recurring named show segment whose announcement line changes how the
/// following lines are read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    SampleMania,
    SoundGood,
    HardestRecord,
    GuestMix,
    FinalVinyl,
}

impl Feature {
    pub fn name(self) -> &'static str {
        match self {
            Feature::SampleMania => "sample-mania",
            Feature::SoundGood => "sound-good",
            Feature::HardestRecord => "hardest-record",
            Feature::GuestMix => "guest-mix",
            Feature::FinalVinyl => "final-vinyl",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One playlist entry. `artist` and `track` are trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub artist: String,
    pub track: String,
    pub feature: Option<Feature>,
}
