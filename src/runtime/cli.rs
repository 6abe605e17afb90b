use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Command-line arguments for ktra
#[derive(Parser, Debug)]
#[command(name = "ktra")]
#[command(about = "Parse radio show tracklists into artist/track records")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse tracklists and print their tracks
    Parse {
        /// Tracklist files or directories; reads stdin when empty or `-`
        paths: Vec<PathBuf>,

        /// Output format, overriding `output.format`
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List artist names that look like spelling variants of each other
    Similar {
        /// Tracklist files or directories; reads stdin when empty or `-`
        paths: Vec<PathBuf>,

        /// Largest edit distance counted as similar, overriding `similar.max_distance`
        #[arg(short, long)]
        distance: Option<usize>,

        /// Output format, overriding `output.format`
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}
