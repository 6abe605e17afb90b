use crate::config::TrackField;

use super::model::Track;

/// Build a display row for a track according to the provided `fields` and separator.
///
/// Fields are composed in the configured order, skipping empty ones. When
/// `show_feature` is set, tagged tracks get a trailing `[feature]` marker.
/// Falls back to the track title when no parts were produced.
pub fn display_from_fields(
    track: &Track,
    fields: &[TrackField],
    sep: &str,
    show_feature: bool,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackField::Display => {
                parts.push(format!("{} - {}", track.artist, track.track));
            }
            TrackField::Artist => parts.push(track.artist.clone()),
            TrackField::Track => parts.push(track.track.clone()),
            TrackField::Feature => {
                if let Some(feature) = track.feature {
                    parts.push(feature.to_string());
                }
            }
        }
    }

    let mut row = if parts.is_empty() {
        track.track.clone()
    } else {
        parts.join(sep)
    };

    if show_feature {
        if let Some(feature) = track.feature {
            row.push_str(&format!(" [{feature}]"));
        }
    }
    row
}
