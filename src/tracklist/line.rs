use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::model::{Feature, Track};

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[-–]\s+").expect("separator pattern is a valid regex"));

/// A line that does not read as `artist - track`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackLineError {
    #[error("expected `artist - track`, found {parts} non-empty part(s)")]
    Unparseable { parts: usize },
}

/// Split `line` on a whitespace-surrounded hyphen or en dash into a track.
///
/// Exactly one separator with text on both sides is accepted. Lines with no
/// separator, several separators, or an empty side are rejected whole; an
/// artist name that itself contains ` - ` cannot be told apart from a
/// malformed line.
pub fn parse_track(line: &str, feature: Option<Feature>) -> Result<Track, TrackLineError> {
    let parts: Vec<&str> = SEPARATOR.split(line).map(str::trim).collect();

    match parts.as_slice() {
        [artist, track] if !artist.is_empty() && !track.is_empty() => Ok(Track {
            artist: artist.to_string(),
            track: track.to_string(),
            feature,
        }),
        _ => Err(TrackLineError::Unparseable {
            parts: parts.iter().filter(|p| !p.is_empty()).count(),
        }),
    }
}
