use crate::error::{HomeseekError, Result};
use crate::store::DEFAULT_FAVORITES_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIST_WIDTH: usize = 100;
const MIN_LIST_WIDTH: usize = 40;

/// Configuration for homeseek, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeseekConfig {
    /// Catalog file used when none is given on the command line
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Storage key for the favorites snapshot
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,

    /// Line width for listings
    #[serde(default = "default_list_width")]
    pub list_width: usize,
}

fn default_favorites_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

fn default_list_width() -> usize {
    DEFAULT_LIST_WIDTH
}

impl Default for HomeseekConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            favorites_key: default_favorites_key(),
            list_width: DEFAULT_LIST_WIDTH,
        }
    }
}

impl HomeseekConfig {
    pub const KEYS: &'static [&'static str] = &["catalog", "favorites-key", "list-width"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HomeseekError::Io)?;
        let config: HomeseekConfig =
            serde_json::from_str(&content).map_err(HomeseekError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HomeseekError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HomeseekError::Serialization)?;
        fs::write(config_path, content).map_err(HomeseekError::Io)?;
        Ok(())
    }

    /// Formatted value of a config key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "favorites-key" => Some(self.favorites_key.clone()),
            "list-width" => Some(self.list_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog" => {
                let value = value.trim();
                self.catalog_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "favorites-key" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) || value.starts_with('.') {
                    return Err(HomeseekError::Config(format!(
                        "Invalid favorites key: {:?}",
                        value
                    )));
                }
                self.favorites_key = value.to_string();
            }
            "list-width" => {
                let width: usize = value.trim().parse().map_err(|_| {
                    HomeseekError::Config(format!("list-width must be a number, got {:?}", value))
                })?;
                self.list_width = width.max(MIN_LIST_WIDTH);
            }
            other => {
                return Err(HomeseekError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
