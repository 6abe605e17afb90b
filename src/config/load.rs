use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::{Error, Result};

const ENV_PREFIX: &str = "KTRA";
const CONFIG_PATH_VAR: &str = "KTRA_CONFIG_PATH";

impl Settings {
    /// Load settings, layering `KTRA__SECTION__KEY` variables over the
    /// optional config file over struct defaults.
    pub fn load() -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            tracing::debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        let settings: Settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing piece of configuration never
    /// stops a parse: any load or validation error is logged and defaults
    /// are used instead.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unusable config, using defaults");
            Self::default()
        })
    }

    /// Reject settings that would produce unreadable output.
    pub fn validate(&self) -> Result<()> {
        let problem = if self.output.fields.is_empty() {
            "output.fields must name at least one field"
        } else if self.output.separator.is_empty() {
            "output.separator must not be empty"
        } else {
            return Ok(());
        };
        Err(Error::InvalidConfig(problem.to_string()))
    }
}

/// `KTRA_CONFIG_PATH` when set, otherwise the XDG location.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/ktra/config.toml`, or `~/.config/ktra/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("ktra").join("config.toml"))
}
