use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_ktra_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("KTRA_CONFIG_PATH", "/tmp/ktra-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/ktra-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("ktra")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("ktra")
            .join("config.toml")
    );
}

#[test]
fn defaults_are_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.output.format, OutputFormat::Text);
    assert_eq!(s.output.fields, vec![TrackField::Display]);
    assert_eq!(s.sources.extensions, vec!["txt".to_string()]);
    assert_eq!(s.similar.max_distance, 1);
}

#[test]
fn validate_rejects_empty_fields_and_separator() {
    let mut s = Settings::default();
    s.output.fields.clear();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.output.separator.clear();
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file_and_parse_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[output]
format = "json"
fields = ["artist", "title", "feature"]
separator = " | "
show_feature = false

[sources]
extensions = ["txt", "md"]
recursive = false
include_hidden = true
max_depth = 3

[similar]
max_distance = 2
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("KTRA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("KTRA__SIMILAR__MAX_DISTANCE");

    let s = Settings::load().unwrap();
    assert_eq!(s.output.format, OutputFormat::Json);
    assert_eq!(
        s.output.fields,
        vec![TrackField::Artist, TrackField::Track, TrackField::Feature]
    );
    assert_eq!(s.output.separator, " | ");
    assert!(!s.output.show_feature);
    assert_eq!(s.sources.extensions, vec!["txt".to_string(), "md".to_string()]);
    assert!(!s.sources.recursive);
    assert!(s.sources.include_hidden);
    assert_eq!(s.sources.max_depth, Some(3));
    assert_eq!(s.similar.max_distance, 2);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[similar]
max_distance = 2
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("KTRA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("KTRA__SIMILAR__MAX_DISTANCE", "0");

    let s = Settings::load().unwrap();
    assert_eq!(s.similar.max_distance, 0);
}

#[test]
fn settings_load_without_config_file_uses_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let _g1 = EnvGuard::set("KTRA_CONFIG_PATH", missing.to_str().unwrap());
    let _g2 = EnvGuard::remove("KTRA__SIMILAR__MAX_DISTANCE");

    let s = Settings::load().unwrap();
    assert_eq!(s.output.format, OutputFormat::Text);
    assert_eq!(s.similar.max_distance, 1);
}

#[test]
fn load_rejects_invalid_settings_and_load_or_default_falls_back() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[output]
format = "json"
separator = ""
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("KTRA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("KTRA__SIMILAR__MAX_DISTANCE");

    assert!(Settings::load().is_err());
    let s = Settings::load_or_default();
    assert_eq!(s.output.format, OutputFormat::Text);
    assert_eq!(s.output.separator, " - ");
}

#[test]
fn load_or_default_survives_malformed_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[output\nformat = ").unwrap();

    let _g1 = EnvGuard::set("KTRA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("KTRA__SIMILAR__MAX_DISTANCE");

    assert!(Settings::load().is_err());
    assert_eq!(Settings::load_or_default().similar.max_distance, 1);
}
