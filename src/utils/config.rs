use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub stop_words_path: Option<String>,
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stop_words_path: None,
            output_path: "tags.txt".to_string(),
        }
    }
}

/// Reads `path`, falling back to defaults when it is missing or malformed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "config not found, using default configuration");
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                info!(path = %path.display(), "loaded configuration");
                return config;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "error parsing config, using default configuration");
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "error reading config, using default configuration");
        }
    }

    Config::default()
}
