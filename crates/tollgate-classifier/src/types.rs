//! Classification types

use serde::{Deserialize, Serialize};
use tollgate_core::BumpLevel;

/// Category for merge commits
pub const MERGES_CATEGORY: &str = "Merges";

/// Category for `type!:` breaking-change commits
pub const BREAKING_CATEGORY: &str = "Breaking changes";

/// Category for well-formed commits with an unrecognized type
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Reason attached to excluded release commits
pub const RELEASE_EXCLUDED_REASON: &str = "Release commit excluded";

/// Outcome of classifying one commit message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationResult {
    /// The commit does not take part in versioning or the changelog
    Excluded {
        /// Why the commit was left out
        reason: String,
    },
    /// The commit was understood
    Classified(Classification),
    /// The parser could not interpret the message
    Unparsed {
        /// Parser-supplied explanation
        reason: String,
    },
}

impl ClassificationResult {
    /// Create an excluded result
    pub fn excluded(reason: impl Into<String>) -> Self {
        Self::Excluded {
            reason: reason.into(),
        }
    }

    /// Create an unparsed result
    pub fn unparsed(reason: impl Into<String>) -> Self {
        Self::Unparsed {
            reason: reason.into(),
        }
    }

    /// Short name of the variant, as used in the serialized `kind` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Excluded { .. } => "excluded",
            Self::Classified(_) => "classified",
            Self::Unparsed { .. } => "unparsed",
        }
    }

    /// Check if the commit was excluded
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded { .. })
    }

    /// The classification, if the commit was understood
    pub fn classification(&self) -> Option<&Classification> {
        match self {
            Self::Classified(classification) => Some(classification),
            _ => None,
        }
    }

    /// Bump level of a classified commit
    pub fn bump_level(&self) -> Option<BumpLevel> {
        self.classification().map(|c| c.bump_level)
    }

    /// Category of a classified commit
    pub fn category(&self) -> Option<&str> {
        self.classification().map(|c| c.category.as_str())
    }
}

impl From<Classification> for ClassificationResult {
    fn from(classification: Classification) -> Self {
        Self::Classified(classification)
    }
}

/// A commit sorted into a changelog category with a bump level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Version component the commit increments
    pub bump_level: BumpLevel,
    /// Changelog section title
    pub category: String,
    /// Scope (optional, in parentheses)
    pub scope: Option<String>,
    /// Description paragraphs, subject first
    pub descriptions: Vec<String>,
    /// Texts of `BREAKING CHANGE:` footers
    pub breaking_descriptions: Vec<String>,
}

impl Classification {
    /// Create a classification with no scope and no descriptions
    pub fn new(category: impl Into<String>, bump_level: BumpLevel) -> Self {
        Self {
            bump_level,
            category: category.into(),
            scope: None,
            descriptions: Vec::new(),
            breaking_descriptions: Vec::new(),
        }
    }

    /// Set the scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Append a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.descriptions.push(description.into());
        self
    }

    /// Check if this commit triggers a major version bump
    pub fn is_breaking(&self) -> bool {
        self.bump_level == BumpLevel::Major
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_builder() {
        let classification = Classification::new("Bug Fixes", BumpLevel::Patch)
            .with_scope("parser")
            .with_description("handle empty input");

        assert_eq!(classification.scope.as_deref(), Some("parser"));
        assert_eq!(classification.descriptions, vec!["handle empty input"]);
        assert!(classification.breaking_descriptions.is_empty());
        assert!(!classification.is_breaking());
    }

    #[test]
    fn test_result_accessors() {
        let result: ClassificationResult =
            Classification::new(MERGES_CATEGORY, BumpLevel::None).into();
        assert_eq!(result.kind(), "classified");
        assert_eq!(result.category(), Some("Merges"));
        assert_eq!(result.bump_level(), Some(BumpLevel::None));

        let excluded = ClassificationResult::excluded(RELEASE_EXCLUDED_REASON);
        assert!(excluded.is_excluded());
        assert!(excluded.classification().is_none());
        assert_eq!(excluded.bump_level(), None);
    }

    #[test]
    fn test_result_json_shape() {
        let result: ClassificationResult = Classification::new(BREAKING_CATEGORY, BumpLevel::Major)
            .with_description("feat!: drop v1")
            .into();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["kind"], "classified");
        assert_eq!(value["bump_level"], "major");
        assert_eq!(value["category"], "Breaking changes");
        assert_eq!(value["descriptions"][0], "feat!: drop v1");

        let unparsed = serde_json::to_value(ClassificationResult::unparsed("nope")).unwrap();
        assert_eq!(unparsed["kind"], "unparsed");
        assert_eq!(unparsed["reason"], "nope");
    }
}
