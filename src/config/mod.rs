use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const APP_DIR: &str = "account-tracker";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// SQLite database holding the accounts
    #[serde(default)]
    pub db_path: Option<String>,

    /// File the debug log is written to
    #[serde(default)]
    pub log_file: Option<String>,

    /// `tracing` filter directive, e.g. `info` or `account_tracker=debug`
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn db_path(&self) -> Option<PathBuf> {
        self.db_path
            .as_deref()
            .and_then(expand_path)
            .or_else(default_db_path)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .and_then(expand_path)
            .or_else(default_log_path)
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("info")
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    load_from(&path)
}

/// Parse a config file; missing or malformed files fall back to defaults.
pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ACCOUNT_TRACKER_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_DIR).join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join(APP_DIR).join("config.toml"));
    }

    directories::ProjectDirs::from("io", APP_DIR, APP_DIR)
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_DIR));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join(APP_DIR));
    }
    directories::ProjectDirs::from("io", APP_DIR, APP_DIR)
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_db_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("accounts.sqlite3"))
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("debug.log"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    let mut buf = PathBuf::from(trimmed);
    if buf.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            buf = cwd.join(buf);
        }
    }
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "db_path = \"/tmp/accounts.db\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = load_from(&path);
        assert_eq!(config.db_path(), Some(PathBuf::from("/tmp/accounts.db")));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_missing_or_broken_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from(&dir.path().join("nope.toml")), Config::default());

        let path = dir.path().join("broken.toml");
        fs::write(&path, "db_path = [").unwrap();
        assert_eq!(load_from(&path), Config::default());
    }

    #[test]
    fn test_log_level_default() {
        let config = Config {
            log_level: Some("  ".into()),
            ..Config::default()
        };
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("   "), None);
        assert_eq!(expand_path("/abs/x.db"), Some(PathBuf::from("/abs/x.db")));
        assert!(expand_path("rel.db").unwrap().is_absolute());
    }
}
