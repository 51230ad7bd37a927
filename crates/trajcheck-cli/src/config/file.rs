use crate::error::{CliError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use trajcheck::TrailingLines;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileServerConfig {
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub directory: Option<PathBuf>,
    pub overwrite: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileDecodeConfig {
    #[serde(rename = "coordinate-column")]
    pub coordinate_column: Option<usize>,
    #[serde(rename = "trailing-lines")]
    pub trailing_lines: Option<TrailingLines>,
    #[serde(rename = "normalize-line-endings")]
    pub normalize_line_endings: Option<bool>,
    #[serde(rename = "verify-frames")]
    pub verify_frames: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub server: Option<FileServerConfig>,
    pub output: Option<FileOutputConfig>,
    pub decode: Option<FileDecodeConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `explicit` if given, otherwise the platform default file if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found, using built-in defaults.");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "trajcheck", "trajcheck")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
