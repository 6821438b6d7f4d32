//! CLI-level errors (wraps tree loading and settings errors)

use thiserror::Error;

use crate::errors::{ConfigError, TreeError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tree(e) => match e {
                TreeError::FileNotFound(_) => crate::exitcode::NOINPUT,
                TreeError::FileRead { .. } => crate::exitcode::IOERR,
                TreeError::InvalidFormat { .. } => crate::exitcode::DATAERR,
            },
            CliError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let missing = CliError::from(TreeError::FileNotFound(PathBuf::from("x.toml")));
        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);

        let invalid = CliError::from(TreeError::InvalidFormat {
            path: PathBuf::from("x.toml"),
            reason: "missing field `value`".into(),
        });
        assert_eq!(invalid.exit_code(), crate::exitcode::DATAERR);

        let config = CliError::from(ConfigError::Environment("bad".into()));
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
    }
}
