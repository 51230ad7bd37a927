use std::path::PathBuf;
use std::time::Duration;
use trajcheck::DecodeConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub output_directory: PathBuf,
    pub overwrite: bool,
    pub decode: DecodeConfig,
}
