use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::SourceSettings;
use crate::error::{Error, Result};

use super::scan::scan;

/// Name used for text read from standard input.
pub const STDIN_NAME: &str = "-";

/// A block of tracklist text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

/// Expand command-line paths into the files to read.
///
/// Directories are scanned for tracklist files; plain files are taken as
/// given, whatever their extension. `-` stays as is and stands for stdin.
pub fn expand_paths(paths: &[PathBuf], settings: &SourceSettings) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            out.extend(scan(path, settings));
        } else {
            out.push(path.clone());
        }
    }
    out
}

/// Read every source named by `paths`, or stdin when there are none.
///
/// Unreadable files are logged and skipped so one bad path does not hide
/// the rest.
pub fn read_sources(paths: &[PathBuf], settings: &SourceSettings) -> Result<Vec<Source>> {
    if paths.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    let mut sources = Vec::new();
    for path in expand_paths(paths, settings) {
        if path.as_os_str() == STDIN_NAME {
            sources.push(read_stdin()?);
            continue;
        }
        match read_file(&path) {
            Ok(source) => sources.push(source),
            Err(e) => tracing::warn!(error = %e, "skipping source"),
        }
    }
    Ok(sources)
}

/// Read a tracklist file. Invalid UTF-8 (text pasted from a Latin-1 page,
/// say) is replaced rather than failing the whole file.
pub fn read_file(path: &Path) -> Result<Source> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.display().to_string();
    Ok(Source {
        text: decode(&name, &bytes),
        name,
    })
}

fn read_stdin() -> Result<Source> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(Source {
        name: STDIN_NAME.to_string(),
        text: decode(STDIN_NAME, &bytes),
    })
}

fn decode(name: &str, bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            tracing::warn!(source = name, "tracklist is not valid UTF-8, replacing bad bytes");
            text
        }
    }
}
