//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::LinkError;

/// Application errors wrap linkage errors and add builder/config context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Link(#[from] LinkError),

    #[error("cannot parse tree description {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("duplicate node name: {0}")]
    DuplicateName(String),

    #[error("unknown node name: {0}")]
    UnknownName(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApplicationError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
