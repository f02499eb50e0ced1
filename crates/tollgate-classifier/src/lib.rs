//! Tollgate Classifier - Commit classification for release automation
//!
//! Decides whether a commit is excluded, a merge, a breaking change, or
//! something for the conventional-commit parser to sort out.

pub mod classifier;
pub mod parser;
pub mod types;

pub use classifier::CommitClassifier;
pub use parser::{AngularParser, CommitParser};
pub use types::{Classification, ClassificationResult};
