//! Tollgate Git - Commit access for the classifier
//!
//! This crate turns git commits into the `CommitInfo` shape the classifier
//! consumes. Walking history is left to the caller.

mod commits;
mod repository;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::CommitInfo;
