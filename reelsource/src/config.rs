use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::from_str;

use crate::error::{Context, Error, Result};

pub const CONFIG_FILE_NAME: &str = "reelsource.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start players in the playing state instead of showing the thumbnail.
    pub autoplay: bool,
    pub show_play_button: bool,
    /// Title used for accessibility text when a content block has none.
    pub default_title: String,
    pub no_media_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay: false,
            show_play_button: true,
            default_title: "Video".to_string(),
            no_media_text: "No media".to_string(),
        }
    }
}

impl Config {
    /// Reads a config file. Missing fields take their default values.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("reading config file")?;
        let config: Config = from_str(&content).context("parsing config file")?;
        debug!("Loaded configuration from {path:?}");
        Ok(config)
    }

    /// Loads the config from `explicit` if given, else from the first file
    /// found in the known locations, else falls back to defaults.
    ///
    /// # Errors
    ///
    /// Fails when `explicit` does not exist, or when a found file cannot be
    /// read or parsed. A missing file in the default locations is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        match find_config_file()? {
            Some(path) => Self::load_from(&path),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!("Configuration saved to {path:?}");
        Ok(())
    }
}

/// Known config locations, in lookup order.
pub fn config_search_paths() -> Result<Vec<PathBuf>> {
    let exe_path = std::env::current_exe()?;
    let exe_dir = exe_path.parent().unwrap_or(&exe_path);

    let mut paths = vec![exe_dir.join(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("reelsource").join("config.json"));
    }
    Ok(paths)
}

fn find_config_file() -> Result<Option<PathBuf>> {
    Ok(config_search_paths()?.into_iter().find(|p| p.is_file()))
}
