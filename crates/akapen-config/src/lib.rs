use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::validator::ValidatorConfig;

pub mod dictionary;
pub mod validator;

pub use self::validator::ResourceRef;

fn default_language() -> String {
    "ja".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Document language, validators not supporting it are skipped
    #[serde(default = "default_language")]
    pub language: String,
    pub dictionary: DictionaryConfig,
    pub validators: Vec<ValidatorConfig>,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            dictionary: DictionaryConfig::default(),
            validators: vec![ValidatorConfig::doubled_joshi()],
            log_json: false,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config::default().with_env_overrides()
    }

    /// Load a JSON profile, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(language) = env::var("AKAPEN_LANG") {
            if !language.is_empty() {
                self.language = language;
            }
        }

        if let Some(log_json) = env::var("AKAPEN_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.log_json = log_json;
        }

        self
    }

    /// Config entry for a validator by name
    pub fn validator(&self, name: &str) -> Option<&ValidatorConfig> {
        self.validators.iter().find(|v| v.name == name)
    }
}
