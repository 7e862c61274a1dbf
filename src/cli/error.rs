//! CLI-level errors (wraps application errors)

use std::io::ErrorKind;

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Link(_)
                | ApplicationError::Parse { .. }
                | ApplicationError::DuplicateName(_)
                | ApplicationError::UnknownName(_) => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Io { source, .. } if source.kind() == ErrorKind::NotFound => {
                    crate::exitcode::NOINPUT
                }
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LinkError, TreeArena};

    #[test]
    fn test_exit_codes() {
        let mut arena = TreeArena::new();
        let id = arena.create_leaf(());
        let link: CliError = ApplicationError::from(LinkError::NotAChild(id)).into();
        assert_eq!(link.exit_code(), crate::exitcode::DATAERR);

        let missing: CliError = ApplicationError::io(
            "read tree.toml",
            std::io::Error::new(ErrorKind::NotFound, "gone"),
        )
        .into();
        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);

        let config: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(
            CliError::Usage("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
