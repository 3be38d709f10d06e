use crate::errors::{AppError, AppResult};
use crate::roster::DEFAULT_SKIP_LINES;
use crate::utils::path::{app_dir, expand_tilde};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwAQl37P2RVo2oEbb_gSfFbn9dmwxM5AU_l_PyGB64J_HZoj_QcRnEigC2-50vpuDGnxQ/exec";

/// Keys written by `init`; `config --check` reports the ones a file lacks.
pub const KNOWN_KEYS: [&str; 6] = [
    "endpoint_url",
    "roster_file",
    "roster_skip_lines",
    "class_label",
    "message_prefix",
    "allow_past_dates",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint_url: String,
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
    #[serde(default = "default_skip_lines")]
    pub roster_skip_lines: usize,
    #[serde(default = "default_class_label")]
    pub class_label: String,
    /// e.g. `https://wa.me/60123456789`; empty disables the message link.
    #[serde(default)]
    pub message_prefix: String,
    #[serde(default)]
    pub allow_past_dates: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_roster_file() -> String {
    "murid4Satria.csv".to_string()
}
fn default_skip_lines() -> usize {
    DEFAULT_SKIP_LINES
}
fn default_class_label() -> String {
    "4 Satria".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint(),
            roster_file: default_roster_file(),
            roster_skip_lines: default_skip_lines(),
            class_label: default_class_label(),
            message_prefix: String::new(),
            allow_past_dates: false,
        }
    }
}

impl Config {
    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        app_dir().join("kehadiran.conf")
    }

    /// Load configuration from `path` (or the default file), or return
    /// defaults if it does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        fs::write(path, self.to_yaml()?).map_err(|_| AppError::ConfigSave)
    }

    /// Keys missing from a config file's YAML text.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a mapping".into()))?;

        Ok(KNOWN_KEYS
            .iter()
            .filter(|k| !map.contains_key(*k))
            .copied()
            .collect())
    }

    pub fn roster_path(&self) -> PathBuf {
        expand_tilde(&self.roster_file)
    }

    pub fn message_prefix(&self) -> Option<String> {
        let p = self.message_prefix.trim();
        (!p.is_empty()).then(|| p.to_string())
    }
}
