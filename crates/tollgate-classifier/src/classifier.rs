//! Commit classification
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. `release...` commits are excluded.
//! 2. `merge...` commits land under "Merges" with no bump.
//! 3. A header (text before the first `:`) ending in `!` is a breaking change.
//! 4. Anything else goes to the fallback parser, whose result is returned as is.

use tracing::{debug, instrument};

use tollgate_core::config::ParserConfig;
use tollgate_core::BumpLevel;
use tollgate_git::CommitInfo;

use crate::parser::{AngularParser, CommitParser};
use crate::types::{
    Classification, ClassificationResult, BREAKING_CATEGORY, MERGES_CATEGORY,
    RELEASE_EXCLUDED_REASON,
};

const RELEASE_PREFIX: &str = "release";
const MERGE_PREFIX: &str = "merge";

/// Classifies commits for version bumps and changelog sections
#[derive(Debug, Clone, Default)]
pub struct CommitClassifier<P = AngularParser> {
    fallback: P,
}

impl CommitClassifier<AngularParser> {
    /// Create a classifier backed by the default Angular parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier whose Angular fallback uses `config`
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::with_parser(AngularParser::with_config(config.clone()))
    }
}

impl<P: CommitParser> CommitClassifier<P> {
    /// Create a classifier with a custom fallback parser
    pub fn with_parser(fallback: P) -> Self {
        Self { fallback }
    }

    /// Get the fallback parser
    pub fn fallback(&self) -> &P {
        &self.fallback
    }

    /// Classify a raw commit message
    #[instrument(skip_all)]
    pub fn classify(&self, message: &str) -> ClassificationResult {
        let trimmed = message.trim();

        if starts_with_ignore_case(trimmed, RELEASE_PREFIX) {
            debug!(rule = "release", "commit excluded");
            return ClassificationResult::excluded(RELEASE_EXCLUDED_REASON);
        }

        if starts_with_ignore_case(trimmed, MERGE_PREFIX) {
            debug!(rule = "merge", "merge commit");
            return Classification::new(MERGES_CATEGORY, BumpLevel::None)
                .with_description(trimmed)
                .into();
        }

        if has_breaking_marker(trimmed) {
            debug!(rule = "breaking", "breaking change marker in header");
            return Classification::new(BREAKING_CATEGORY, BumpLevel::Major)
                .with_description(trimmed)
                .into();
        }

        debug!(rule = "fallback", "delegating to fallback parser");
        self.fallback.parse(message)
    }

    /// Classify a commit using its message as stored in the repository
    #[instrument(skip_all, fields(hash = %commit.short_hash))]
    pub fn classify_commit(&self, commit: &CommitInfo) -> ClassificationResult {
        self.classify(&commit.full_message())
    }
}

/// ASCII case-insensitive prefix test
fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Whether the text before the first colon ends with `!`.
///
/// A message without a colon is checked as a whole.
fn has_breaking_marker(message: &str) -> bool {
    message
        .split(':')
        .next()
        .is_some_and(|header| header.ends_with('!'))
}
