//! Error types for the vfsh shell.
//!
//! Expected conditions (missing paths, undecodable content) are plain values the
//! caller branches on. Only `ShellError` reaches the process boundary.

use thiserror::Error;

/// Failure to materialize a tree from its XML source.
///
/// Never escapes [`crate::tree::loader::load`]; it degrades to an empty root.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read tree source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed tree source: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot { expected: String, found: String },
}

/// Path resolution miss.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no such file or directory: {path}")]
    NotFound { path: String },

    #[error("not a directory: {path}")]
    NotADirectory { path: String },
}

impl ResolveError {
    /// Normalized path the resolver was walking when it failed.
    pub fn path(&self) -> &str {
        match self {
            ResolveError::NotFound { path } | ResolveError::NotADirectory { path } => path,
        }
    }
}

/// File content could not be decoded into the requested representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script error: {0}")]
    Script(String),

    #[error("Line editor error: {0}")]
    Readline(String),
}

impl From<config::ConfigError> for ShellError {
    fn from(err: config::ConfigError) -> Self {
        ShellError::Config(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err.to_string())
    }
}
