//! User configuration file handling
//!
//! Manages settings from ~/.config/strokedata/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::data::SourceKind;

/// User configuration from ~/.config/strokedata/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Source used when `--source` is not given
    pub default_source: Option<SourceKind>,
    /// Directory holding downloaded KanjiVG or Hanzi Writer files
    pub cache_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Samples per curve segment
    pub curve_steps: Option<usize>,
    /// Decimal places kept in written files
    pub precision: Option<u32>,
    /// Worker threads for batch conversion
    pub jobs: Option<usize>,
    #[serde(default)]
    pub log_to_file: bool,
}

/// Get the path to the strokedata config directory
pub fn config_dir() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
    config_dir.join("strokedata")
}

impl ConfigFile {
    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Settings written by `init-config`
    pub fn example() -> Self {
        let base = config_dir();
        Self {
            default_source: Some(SourceKind::Kanjivg),
            cache_dir: Some(base.join("cache")),
            output_dir: Some(PathBuf::from("strokedata")),
            curve_steps: Some(crate::path::DEFAULT_CURVE_STEPS),
            precision: Some(4),
            jobs: None,
            log_to_file: false,
        }
    }

    /// Initialize the complete user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/strokedata directory structure
    /// 2. A settings.json file with default values
    /// 3. The logs/ and cache/ directories
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = config_dir();

        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = crate::logging::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let cache_dir = config_dir.join("cache");
        fs::create_dir_all(&cache_dir)?;
        println!("Created cache directory: {:?}", cache_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::example().save()?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!();
        println!("Put KanjiVG .svg or Hanzi Writer .json files into {:?}", cache_dir);
        println!("and edit settings.json to change the defaults.");

        Ok(())
    }
}
