use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tree file format in {}: {reason}", path.display())]
    InvalidFormat { path: PathBuf, reason: String },
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Errors while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("environment override: {0}")]
    Environment(String),
}
