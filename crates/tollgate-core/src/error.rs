//! Error types for Tollgate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TollgateError
pub type Result<T> = std::result::Result<T, TollgateError>;

/// Main error type for Tollgate operations
#[derive(Debug, Error)]
pub enum TollgateError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Classification input errors
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file already exists
    #[error("Configuration file already exists at {0}")]
    AlreadyExists(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Revision could not be resolved to a commit
    #[error("Revision not found: {0}")]
    RevisionNotFound(String),

    /// Commit message missing or not valid UTF-8
    #[error("Commit {0} has no readable message")]
    InvalidMessage(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Errors raised before classification starts
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Nothing to classify
    #[error("No commit messages given - pass messages, --stdin or --rev")]
    NoInput,

    /// Reading the message from stdin failed
    #[error("Failed to read message from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Strict mode found messages the parser rejected
    #[error("{0} commit message(s) could not be parsed")]
    Unparsed(usize),
}
