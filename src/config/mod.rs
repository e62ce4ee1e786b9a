use crate::core::paginator::DEFAULT_PAGE_SIZE;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_separator_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("bikeshare")
        } else {
            base.join(".bikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if self.separator_char.is_empty() {
            return Err(AppError::Config("separator_char must not be empty".into()));
        }
        Ok(())
    }

    pub fn separator(&self) -> String {
        self.separator_char.repeat(self.separator_width)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{}_bikeshare.conf", name));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_conf("cfg_missing");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.page_size, 5);
        assert_eq!(cfg.separator(), "-".repeat(40));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_conf("cfg_partial");
        fs::write(&path, "data_dir: /srv/bikeshare\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.data_dir, "/srv/bikeshare");
        assert_eq!(cfg.page_size, 5);
        assert_eq!(cfg.separator_char, "-");
    }

    #[test]
    fn save_then_load() {
        let path = temp_conf("cfg_save");
        let cfg = Config {
            data_dir: "/tmp/data".into(),
            page_size: 10,
            separator_char: "=".into(),
            separator_width: 20,
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let path = temp_conf("cfg_zero");
        fs::write(&path, "page_size: 0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::Config(_))
        ));
    }
}
