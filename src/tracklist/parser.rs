use tracing::debug;

use super::{Feature, Track, detect_feature, parse_track};

/// Mode carried from one line to the next.
///
/// Guest mixes run until something supersedes them; every other feature only
/// affects the lines directly after its announcement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
enum Segment {
    #[default]
    Plain,
    GuestMix,
}

/// What to do with the line under the cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Action {
    /// Skip the announcement line and read `following` lines tagged `feature`.
    Announced { feature: Feature, following: usize },
    /// Read the current line itself, tagged or not.
    Current(Option<Feature>),
}

impl Action {
    fn advance(self) -> usize {
        match self {
            Action::Announced { following, .. } => 1 + following,
            Action::Current(_) => 1,
        }
    }
}

fn transition(segment: Segment, detected: Option<Feature>) -> (Action, Segment) {
    use Feature::*;

    match (detected, segment) {
        (Some(SoundGood), s) => (announced(SoundGood, 1), s),
        (Some(HardestRecord), s) => (announced(HardestRecord, 1), s),
        (Some(SampleMania), s) => (announced(SampleMania, 2), s),
        // Final vinyl closes any guest mix still in progress.
        (Some(FinalVinyl), _) => (announced(FinalVinyl, 1), Segment::Plain),
        (Some(GuestMix), _) | (None, Segment::GuestMix) => {
            (Action::Current(Some(GuestMix)), Segment::GuestMix)
        }
        (None, Segment::Plain) => (Action::Current(None), Segment::Plain),
    }
}

fn announced(feature: Feature, following: usize) -> Action {
    Action::Announced { feature, following }
}

/// Parse an ordered list of tracklist lines into tracks.
///
/// Lines that do not read as `artist - track` are dropped; the call itself
/// never fails. Announcements on the last lines of the input simply produce
/// no tracks for the missing lines.
pub fn parse_tracklist<S: AsRef<str>>(lines: &[S]) -> Vec<Track> {
    let mut tracks = Vec::new();
    let mut segment = Segment::default();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor].as_ref();
        let (action, next) = transition(segment, detect_feature(line));
        segment = next;

        match action {
            Action::Announced { feature, following } => {
                debug!(line = cursor + 1, %feature, "feature announced");
                for offset in 1..=following {
                    push_line(&mut tracks, lines, cursor + offset, Some(feature));
                }
            }
            Action::Current(feature) => push_line(&mut tracks, lines, cursor, feature),
        }

        cursor += action.advance();
    }

    debug!(lines = lines.len(), tracks = tracks.len(), "parsed tracklist");
    tracks
}

/// Parse a block of text, one tracklist entry per line.
pub fn parse_text(text: &str) -> Vec<Track> {
    let lines: Vec<&str> = text.lines().collect();
    parse_tracklist(&lines)
}

fn push_line<S: AsRef<str>>(
    tracks: &mut Vec<Track>,
    lines: &[S],
    index: usize,
    feature: Option<Feature>,
) {
    let Some(line) = lines.get(index).map(AsRef::as_ref) else {
        debug!(line = index + 1, "tracklist ended before feature track");
        return;
    };

    match parse_track(line, feature) {
        Ok(track) => tracks.push(track),
        Err(e) => debug!(line = index + 1, text = line, error = %e, "dropping line"),
    }
}
