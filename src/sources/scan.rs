use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::SourceSettings;

fn is_tracklist_file(path: &Path, settings: &SourceSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Collect tracklist files under `dir`, sorted case-insensitively by path.
pub fn scan(dir: &Path, settings: &SourceSettings) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).follow_links(true);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_tracklist_file(path, settings))
        .collect();

    files.sort_by_key(|p| p.to_string_lossy().to_lowercase());
    tracing::debug!(dir = %dir.display(), files = files.len(), "scanned for tracklists");
    files
}
