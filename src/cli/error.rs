//! CLI-level errors (wraps domain and settings errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Settings(#[from] SettingsError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Domain(e) => match e {
                DomainError::InvalidAction(_) => crate::exitcode::USAGE,
                DomainError::UnsupportedOperation { .. }
                | DomainError::NoStrategy
                | DomainError::Overflow { .. } => crate::exitcode::SOFTWARE,
            },
        }
    }
}
