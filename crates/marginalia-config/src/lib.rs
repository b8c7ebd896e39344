use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE_NAME: &str = "marginalia.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub public_dir: PathBuf,
    pub asset_dir: PathBuf,
    pub index_section: String,
    pub index_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            public_dir: PathBuf::from("./public"),
            asset_dir: PathBuf::from("./assets"),
            index_section: "posts".to_string(),
            index_title: "Blog Posts".to_string(),
            site_name: None,
            stylesheet: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config = Self::from_toml(&content).map_err(|source| {
            ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;
        config.expand_paths();

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(".").join(CONFIG_FILE_NAME)
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Expands `~` and `$VAR` in every path setting. Paths that fail to expand
    /// are kept as written.
    fn expand_paths(&mut self) {
        for path in [
            &mut self.content_dir,
            &mut self.public_dir,
            &mut self.asset_dir,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
        if let Some(stylesheet) = &mut self.stylesheet
            && let Some(expanded) = Self::expand_path(stylesheet)
        {
            *stylesheet = expanded;
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
