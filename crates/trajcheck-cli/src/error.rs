use std::path::PathBuf;
use thiserror::Error;
use trajcheck::core::io::export::ExportError;
use trajcheck::workflows::import::ImportError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Import(#[from] ImportError),

    #[error("{0}")]
    ImportFailed(String),

    #[error("{failed} of {total} file(s) failed validation")]
    Validation { failed: usize, total: usize },

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
