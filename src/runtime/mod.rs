use std::io::Write;

use anyhow::Context;
use clap::Parser;

use crate::similar::{artist_names, group_similar};
use crate::sources::read_sources;
use crate::tracklist::Track;

mod cli;
mod logging;
mod output;


use cli::{Args, Command};
use output::{ParsedSource, write_groups, write_tracks};

pub fn run() -> anyhow::Result<()> {
    logging::init_logging();

    let args = Args::parse();
    let settings = crate::config::Settings::load_or_default();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Parse { paths, format } => {
            let sources =
                read_sources(&paths, &settings.sources).context("failed to read tracklists")?;
            let parsed: Vec<ParsedSource> = sources.iter().map(ParsedSource::parse).collect();
            let format = format.unwrap_or(settings.output.format);
            write_tracks(&mut out, &parsed, &settings.output, format)
                .context("failed to write tracks")?;
        }
        Command::Similar {
            paths,
            distance,
            format,
        } => {
            let sources =
                read_sources(&paths, &settings.sources).context("failed to read tracklists")?;
            let tracks: Vec<Track> = sources
                .iter()
                .flat_map(|s| ParsedSource::parse(s).tracks)
                .collect();
            let max_distance = distance.unwrap_or(settings.similar.max_distance);
            tracing::info!(max_distance, "grouping similar artists");

            let groups = group_similar(&artist_names(&tracks), max_distance);
            let format = format.unwrap_or(settings.output.format);
            write_groups(&mut out, &groups, format).context("failed to write artist groups")?;
        }
    }

    out.flush()?;
    Ok(())
}
