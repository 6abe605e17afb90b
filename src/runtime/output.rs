use std::io::Write;

use serde::Serialize;

use crate::config::{OutputFormat, OutputSettings};
use crate::error::Result;
use crate::similar::ArtistGroup;
use crate::sources::Source;
use crate::tracklist::{Track, display_from_fields};

/// Tracks parsed from one source.
#[derive(Debug, Serialize)]
pub struct ParsedSource {
    pub source: String,
    pub tracks: Vec<Track>,
}

impl ParsedSource {
    pub fn parse(source: &Source) -> Self {
        let tracks = crate::tracklist::parse_text(&source.text);
        tracing::info!(source = %source.name, tracks = tracks.len(), "parsed tracklist");
        Self {
            source: source.name.clone(),
            tracks,
        }
    }
}

pub fn write_tracks<W: Write>(
    out: &mut W,
    parsed: &[ParsedSource],
    settings: &OutputSettings,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, parsed)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let headed = parsed.len() > 1;
            for (i, p) in parsed.iter().enumerate() {
                if headed {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "==> {} <==", p.source)?;
                }
                for track in &p.tracks {
                    let row = display_from_fields(
                        track,
                        &settings.fields,
                        &settings.separator,
                        settings.show_feature,
                    );
                    writeln!(out, "{row}")?;
                }
            }
        }
    }
    Ok(())
}

pub fn write_groups<W: Write>(
    out: &mut W,
    groups: &[ArtistGroup],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, groups)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for group in groups {
                let similar: Vec<String> = group
                    .similar
                    .iter()
                    .map(|(name, distance)| format!("{name} ({distance})"))
                    .collect();
                writeln!(out, "{}: {}", group.name, similar.join(", "))?;
            }
        }
    }
    Ok(())
}
