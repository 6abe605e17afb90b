//! Grouping of artist names that are probably spelling variants of each
//! other ("Noisia" / "Nosia"), measured by edit distance.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::tracklist::Track;

/// Artist names within the configured edit distance of `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistGroup {
    /// The name the others were compared against.
    pub name: String,
    /// Similar names with their distance to `name`, in name order.
    pub similar: Vec<(String, usize)>,
}

/// Distinct artist names of `tracks`, sorted.
pub fn artist_names(tracks: &[Track]) -> Vec<String> {
    tracks
        .iter()
        .map(|t| t.artist.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Group `names` by edit distance.
///
/// Names are taken in sorted order. Each round compares the first remaining
/// name against all remaining ones; everything within `max_distance` forms a
/// group and is removed. Only groups with more than one name are returned.
pub fn group_similar<S: AsRef<str>>(names: &[S], max_distance: usize) -> Vec<ArtistGroup> {
    let mut remaining: Vec<&str> = names
        .iter()
        .map(AsRef::as_ref)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let mut groups = Vec::new();

    while let Some(&head) = remaining.first() {
        let (close, rest): (Vec<&str>, Vec<&str>) = remaining
            .into_iter()
            .partition(|name| strsim::levenshtein(head, name) <= max_distance);
        remaining = rest;

        if close.len() > 1 {
            let similar = close
                .iter()
                .skip(1)
                .map(|name| (name.to_string(), strsim::levenshtein(head, name)))
                .collect();
            groups.push(ArtistGroup {
                name: head.to_string(),
                similar,
            });
        }
    }

    tracing::debug!(names = names.len(), groups = groups.len(), "grouped artist names");
    groups
}
