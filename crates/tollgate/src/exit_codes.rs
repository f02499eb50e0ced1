//! Exit codes for the CLI

use tollgate_core::{ClassifyError, ConfigError, GitError, TollgateError};

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Input or strict-mode validation error
pub const VALIDATION_ERROR: i32 = 5;

/// Map an error to the exit code reported for it
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<TollgateError>() {
        return match err {
            TollgateError::Config(_) => CONFIG_ERROR,
            TollgateError::Git(_) => GIT_ERROR,
            TollgateError::Classify(_) => VALIDATION_ERROR,
        };
    }

    if err.is::<ConfigError>() {
        CONFIG_ERROR
    } else if err.is::<GitError>() {
        GIT_ERROR
    } else if err.is::<ClassifyError>() {
        VALIDATION_ERROR
    } else {
        ERROR
    }
}
