use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Root directory; other paths may reference it as `{{root}}`.
    pub root: String,
    pub templates_dir: String,
    pub workflows_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Fully resolved configuration with expanded paths.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub root: PathBuf,
    pub templates_dir: PathBuf,
    pub workflows_dir: PathBuf,
    pub logging: LoggingConfig,
}
