//! Tollgate Core - Shared types, errors and configuration
//!
//! This crate provides the bump level type, the error taxonomy and the
//! configuration layer used by the classifier and the CLI.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ClassifyError, ConfigError, GitError, Result, TollgateError};
pub use types::BumpLevel;
