use crate::app::errors::{AppError, AppResult};
use crate::metadata::fetchers::youtube::MAX_BATCH_SIZE;
use homedir::my_home;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const MAX_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// YouTube Data API key. `YTX_API_KEY` takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ids per videos request, at most 50.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            batch_size: MAX_BATCH_SIZE,
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_batch_size() -> usize {
    MAX_BATCH_SIZE
}

impl Config {
    fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(AppError::input(format!(
                "timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                self.timeout_secs
            )));
        }

        if !(1..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(AppError::input(format!(
                "batch_size must be between 1 and {MAX_BATCH_SIZE}, got {}",
                self.batch_size
            )));
        }

        match url::Url::parse(&self.api_base_url) {
            Ok(u) if u.scheme() == "http" || u.scheme() == "https" => Ok(()),
            _ => Err(AppError::input(format!(
                "api_base_url is not an http(s) url: {:?}",
                self.api_base_url
            ))),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_with(path: &Path) -> AppResult<Self> {
        let config: Self = match std::fs::read_to_string(path) {
            Ok(s) if s.trim().is_empty() => Self::default(),
            Ok(s) => serde_yml::from_str(&s)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                return Err(AppError::input(format!(
                    "cannot read config {}: {e}",
                    path.display()
                )))
            }
        };

        config.validate()?;

        Ok(config)
    }

    /// Load from `YTX_CONFIG` or `~/.config/ytx/config.yaml`, then apply `YTX_API_KEY`.
    pub fn load() -> AppResult<Self> {
        let mut config = Self::load_with(&Self::path())?;
        config.apply_env_key(std::env::var("YTX_API_KEY").ok());
        Ok(config)
    }

    fn path() -> PathBuf {
        if let Ok(p) = std::env::var("YTX_CONFIG") {
            return PathBuf::from(p);
        }

        match my_home() {
            Ok(Some(home)) => home.join(".config").join("ytx").join("config.yaml"),
            _ => PathBuf::from("ytx.yaml"),
        }
    }

    fn apply_env_key(&mut self, key: Option<String>) {
        if let Some(key) = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// The configured key, or an empty string when none is set.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().map(str::trim).unwrap_or_default()
    }
}
