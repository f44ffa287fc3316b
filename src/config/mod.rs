use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_show_duration")]
    pub show_duration: bool,
    #[serde(default = "default_empty_placeholder")]
    pub empty_placeholder: String,
}

fn default_output() -> String {
    "text".to_string()
}
fn default_color() -> bool {
    true
}
fn default_show_duration() -> bool {
    true
}
fn default_empty_placeholder() -> String {
    "--:--".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            show_duration: default_show_duration(),
            empty_placeholder: default_empty_placeholder(),
        }
    }
}

impl Config {
    /// Known top-level keys, used by `config --check`.
    pub const KEYS: [&'static str; 4] = ["output", "color", "show_duration", "empty_placeholder"];

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("trcheck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".trcheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("trcheck.conf")
    }

    /// Load configuration from the standard location, or defaults if missing
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path, or defaults if missing
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            let content = fs::read_to_string(path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file.
    ///
    /// - `custom_path`: write the file there instead of the standard location
    /// - `is_test`: resolve paths only, never touch the filesystem
    ///
    /// An existing file is left alone. Returns the resolved file path.
    pub fn init_all(custom_path: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let file = match custom_path {
            Some(p) => crate::utils::path::expand_tilde(&p),
            None => Self::config_file(),
        };

        if is_test {
            return Ok(file);
        }

        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)?;
        }

        if !file.exists() {
            let yaml = serde_yaml::to_string(&Config::default())
                .map_err(|e| io::Error::other(e.to_string()))?;
            fs::write(&file, yaml)?;
        }

        Ok(file)
    }

    /// Re-parse the raw YAML mapping and list known keys that are absent.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration file is not a YAML mapping".into()))?;

        let mut missing = Vec::new();
        for key in Self::KEYS {
            let k = serde_yaml::Value::String(key.to_string());
            if map.get(&k).is_none() {
                missing.push(key.to_string());
            }
        }

        Ok(missing)
    }
}
