use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/ktra/config.toml` or `~/.config/ktra/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `KTRA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub sources: SourceSettings,
    pub similar: SimilarSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// How parsed tracks are written to stdout.
    pub format: OutputFormat,

    /// Which track fields make up a text row, and in what order.
    ///
    /// Example: ["artist", "track", "feature"]
    pub fields: Vec<TrackField>,

    /// Separator used to join `fields`.
    pub separator: String,

    /// Append `[feature-name]` to rows of tagged tracks.
    pub show_feature: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            fields: vec![TrackField::Display],
            separator: " - ".to_string(),
            show_feature: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[serde(alias = "plain")]
    Text,
    Json,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    /// `artist - track`.
    Display,
    Artist,
    #[serde(alias = "title")]
    Track,
    Feature,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// File extensions read as tracklists when a directory is given
    /// (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".into()],
            recursive: true,
            include_hidden: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimilarSettings {
    /// Largest edit distance at which two artist names count as similar.
    /// Anything above 2 groups unrelated names.
    pub max_distance: usize,
}

impl Default for SimilarSettings {
    fn default() -> Self {
        Self { max_distance: 1 }
    }
}
