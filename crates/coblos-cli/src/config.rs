use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Server used when nothing else is configured (the backend's dev address)
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Overrides the config directory (used by tests and packaging)
pub const CONFIG_DIR_ENV: &str = "COBLOS_CONFIG_DIR";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub server_url: Option<String>,
    pub session: Option<String>,
}

impl Config {
    /// Get the config directory path (~/.config/coblos, or $COBLOS_CONFIG_DIR)
    pub fn dir() -> Option<PathBuf> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Some(PathBuf::from(dir));
        }
        dirs::home_dir().map(|home| home.join(".config").join("coblos"))
    }

    /// Get the config file path
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join("config.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`. A file that does not parse is moved aside to
    /// `config.toml.bak` and defaults are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(err) => {
                let backup = backup_path(path);
                fs::rename(path, &backup).with_context(|| {
                    format!("Failed to move corrupted config to {}", backup.display())
                })?;
                tracing::debug!(error = %err, "config parse error");
                eprintln!(
                    "{} {} is corrupted and was moved to {}; using defaults.",
                    "Warning:".yellow().bold(),
                    path.display(),
                    backup.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Save config to file, creating directory if needed
    pub fn save(&self) -> Result<()> {
        let path = Self::path().context("Could not determine config path")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn set_server_url(&mut self, url: String) {
        self.server_url = Some(url);
    }

    pub fn set_session(&mut self, session: String) {
        self.session = Some(session);
    }

    pub fn clear_server_url(&mut self) {
        self.server_url = None;
    }

    pub fn clear_session(&mut self) {
        self.session = None;
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}

/// Show only the first/last few chars of a secret
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 12 {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "[set]".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.set_server_url("https://vote.kampus.id".to_string());
        config.set_session("abc".to_string());
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_corrupted_file_is_backed_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server_url = [unterminated").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(!path.exists());
        assert!(dir.path().join("config.toml.bak").exists());
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("short"), "[set]");
        assert_eq!(mask("eyJfZnJlc2giOmZhbHNlfQ.Zx"), "eyJfZn...Q.Zx");
    }
}
