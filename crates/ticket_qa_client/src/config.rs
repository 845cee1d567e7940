//! Client config load/save for `~/.ticket-qa/config.yaml`.
//! Sections: `server.*` (endpoint), `ui.*` (control labels), `logging.*`.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::client::DEFAULT_QUESTION_PATH;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";
pub const DEFAULT_BUSY_LABEL: &str = "Processing...";

/// Server section (base_url, question_path, timeout_secs).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ServerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_path: Option<String>,
    /// No timeout when absent; a stuck request keeps the submit control busy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ServerSection {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn question_path(&self) -> &str {
        self.question_path.as_deref().unwrap_or(DEFAULT_QUESTION_PATH)
    }
}

/// UI section (submit_label, busy_label).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UiSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_label: Option<String>,
}

impl UiSection {
    pub fn submit_label(&self) -> &str {
        self.submit_label.as_deref().unwrap_or(DEFAULT_SUBMIT_LABEL)
    }

    pub fn busy_label(&self) -> &str {
        self.busy_label.as_deref().unwrap_or(DEFAULT_BUSY_LABEL)
    }
}

/// Logging section; `filter` is a tracing `EnvFilter` directive.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoggingSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Full client config.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Config load/save error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Returns the default config file path: `~/.ticket-qa/config.yaml` (platform-specific).
pub fn default_config_path() -> Option<PathBuf> {
    let home = home_dir()?;
    Some(home.join(".ticket-qa").join("config.yaml"))
}

#[cfg(unix)]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(windows)]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE").map(PathBuf::from)
}

#[cfg(not(any(unix, windows)))]
fn home_dir() -> Option<PathBuf> {
    None
}

/// Load config from a YAML file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the default config file, falling back to defaults when it does not exist.
pub fn load_default() -> Result<Config, ConfigError> {
    let path = default_config_path().ok_or(ConfigError::NoHomeDir)?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load(&path)
}

/// Save config to a YAML file. Creates parent directory if missing.
pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let contents = serde_yaml::to_string(config).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, contents).map_err(io_err)
}
