//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::BumpLevel;

/// Main configuration for Tollgate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fallback commit parser configuration
    pub parser: ParserConfig,
}

/// Configuration for the conventional-commit fallback parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Bump level for well-formed commits whose type is not listed
    pub default_bump: BumpLevel,

    /// Recognized commit types, keyed by lowercase type name
    pub types: BTreeMap<String, CommitTypeConfig>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let types = [
            ("feat", "Features", BumpLevel::Minor),
            ("fix", "Bug Fixes", BumpLevel::Patch),
            ("perf", "Performance Improvements", BumpLevel::Patch),
            ("docs", "Documentation", BumpLevel::None),
            ("style", "Styles", BumpLevel::None),
            ("refactor", "Code Refactoring", BumpLevel::None),
            ("test", "Tests", BumpLevel::None),
            ("build", "Build System", BumpLevel::None),
            ("ci", "Continuous Integration", BumpLevel::None),
            ("chore", "Chores", BumpLevel::None),
            ("revert", "Reverts", BumpLevel::None),
        ]
        .into_iter()
        .map(|(name, section, bump)| (name.to_string(), CommitTypeConfig::new(section, bump)))
        .collect();

        Self {
            default_bump: BumpLevel::None,
            types,
        }
    }
}

impl ParserConfig {
    /// Look up a commit type, ignoring ASCII case
    pub fn commit_type(&self, name: &str) -> Option<&CommitTypeConfig> {
        self.types.get(&name.to_ascii_lowercase())
    }

    /// Add or replace a commit type
    pub fn with_type(
        mut self,
        name: impl Into<String>,
        section: impl Into<String>,
        bump: BumpLevel,
    ) -> Self {
        self.types
            .insert(name.into().to_ascii_lowercase(), CommitTypeConfig::new(section, bump));
        self
    }

    /// Set the bump level for unlisted types
    pub fn with_default_bump(mut self, bump: BumpLevel) -> Self {
        self.default_bump = bump;
        self
    }
}

/// Per-type parser settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitTypeConfig {
    /// Changelog section title used as the category
    pub section: String,

    /// Bump level when the commit is not breaking
    #[serde(default)]
    pub bump: BumpLevel,
}

impl CommitTypeConfig {
    /// Create a new type configuration
    pub fn new(section: impl Into<String>, bump: BumpLevel) -> Self {
        Self {
            section: section.into(),
            bump,
        }
    }
}
