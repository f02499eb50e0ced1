//! Commit parsing

mod angular;

pub use angular::AngularParser;

use std::sync::Arc;

use crate::types::ClassificationResult;

/// Trait for commit parsers
///
/// The classifier hands every message that none of its own rules match to a
/// `CommitParser` and returns the result untouched.
pub trait CommitParser: Send + Sync {
    /// Parse a commit message into a classification
    fn parse(&self, message: &str) -> ClassificationResult;
}

impl<P: CommitParser + ?Sized> CommitParser for &P {
    fn parse(&self, message: &str) -> ClassificationResult {
        (**self).parse(message)
    }
}

impl<P: CommitParser + ?Sized> CommitParser for Box<P> {
    fn parse(&self, message: &str) -> ClassificationResult {
        (**self).parse(message)
    }
}

impl<P: CommitParser + ?Sized> CommitParser for Arc<P> {
    fn parse(&self, message: &str) -> ClassificationResult {
        (**self).parse(message)
    }
}
