use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8080/api".into()
}

fn default_user_name() -> String {
    // Placeholder identity; real auth is out of scope.
    "john.doe".into()
}

fn default_log_file() -> String {
    "folio.log".into()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default = "default_user_name")]
    pub name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            user: UserConfig::default(),
            log_file: default_log_file(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: default_user_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("FOLIO_API_URL") {
            self.api.base_url = v;
        }
        if let Ok(v) = std::env::var("FOLIO_USER") {
            self.user.name = v;
        }
        if let Ok(v) = std::env::var("FOLIO_LOG_FILE") {
            self.log_file = v;
        }
    }
}
