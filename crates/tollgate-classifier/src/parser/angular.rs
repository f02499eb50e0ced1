//! Angular-style conventional commit parser
//!
//! Parses headers of the form `type(scope)!: subject`, following the
//! Angular contribution guidelines:
//! https://github.com/angular/angular/blob/main/CONTRIBUTING.md#commit

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use tollgate_core::config::ParserConfig;
use tollgate_core::BumpLevel;

use super::CommitParser;
use crate::types::{Classification, ClassificationResult, UNKNOWN_CATEGORY};

/// Regex for the header line
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[A-Za-z]+)(?:\((?P<scope>[^)\n]+)\))?(?P<breaking>!)?:\s+(?P<subject>.+)$",
    )
    .expect("Invalid regex")
});

/// Regex for breaking-change footers
static BREAKING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^BREAKING[ -]CHANGE:\s*(?P<text>.*)$").expect("Invalid regex")
});

/// Parser for Angular-style conventional commits
#[derive(Debug, Clone, Default)]
pub struct AngularParser {
    config: ParserConfig,
}

impl AngularParser {
    /// Create a new parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Get the parser configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

/// Split a body into blank-line separated paragraphs, joining wrapped lines
fn paragraphs(body: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

impl CommitParser for AngularParser {
    fn parse(&self, message: &str) -> ClassificationResult {
        let message = message.trim();
        let (header, body) = match message.split_once('\n') {
            Some((header, body)) => (header.trim_end(), body),
            None => (message, ""),
        };

        let Some(caps) = HEADER_REGEX.captures(header) else {
            debug!(header, "header does not match conventional format");
            return ClassificationResult::unparsed("Unable to parse commit message");
        };

        let commit_type = caps["type"].to_lowercase();
        let subject = caps["subject"].trim().to_string();
        let breaking_marker = caps.name("breaking").is_some();

        let mut descriptions = vec![subject];
        let mut breaking_descriptions = Vec::new();
        for paragraph in paragraphs(body) {
            match BREAKING_REGEX.captures(&paragraph) {
                Some(footer) => breaking_descriptions.push(footer["text"].trim().to_string()),
                None => descriptions.push(paragraph),
            }
        }

        let (category, type_bump) = match self.config.commit_type(&commit_type) {
            Some(type_config) => (type_config.section.clone(), type_config.bump),
            None => {
                debug!(commit_type = %commit_type, "unrecognized commit type");
                (UNKNOWN_CATEGORY.to_string(), self.config.default_bump)
            }
        };

        let breaking = breaking_marker || !breaking_descriptions.is_empty();
        let bump_level = if breaking { BumpLevel::Major } else { type_bump };

        debug!(
            commit_type = %commit_type,
            category = %category,
            bump = %bump_level,
            breaking,
            "parsed conventional commit"
        );

        ClassificationResult::Classified(Classification {
            bump_level,
            category,
            scope: caps.name("scope").map(|m| m.as_str().trim().to_string()),
            descriptions,
            breaking_descriptions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(result: ClassificationResult) -> Classification {
        match result {
            ClassificationResult::Classified(classification) => classification,
            other => panic!("expected a classification, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_simple_feat() {
        let parser = AngularParser::new();
        let parsed = classified(parser.parse("feat: add new feature"));

        assert_eq!(parsed.category, "Features");
        assert_eq!(parsed.bump_level, BumpLevel::Minor);
        assert_eq!(parsed.descriptions, vec!["add new feature"]);
        assert!(parsed.scope.is_none());
    }

    #[test]
    fn test_parse_with_scope() {
        let parser = AngularParser::new();
        let parsed = classified(parser.parse("fix(parser): handle edge case"));

        assert_eq!(parsed.category, "Bug Fixes");
        assert_eq!(parsed.bump_level, BumpLevel::Patch);
        assert_eq!(parsed.scope, Some("parser".to_string()));
        assert_eq!(parsed.descriptions, vec!["handle edge case"]);
    }

    #[test]
    fn test_parse_uppercase_type() {
        let parser = AngularParser::new();
        let parsed = classified(parser.parse("Perf: faster lookups"));
        assert_eq!(parsed.category, "Performance Improvements");
        assert_eq!(parsed.bump_level, BumpLevel::Patch);
    }

    #[test]
    fn test_parse_breaking_change_marker() {
        let parser = AngularParser::new();
        let parsed = classified(parser.parse("refactor(core)!: major refactoring"));

        assert_eq!(parsed.category, "Code Refactoring");
        assert_eq!(parsed.scope, Some("core".to_string()));
        assert_eq!(parsed.bump_level, BumpLevel::Major);
        assert!(parsed.breaking_descriptions.is_empty());
    }

    #[test]
    fn test_breaking_change_footer() {
        let parser = AngularParser::new();
        let parsed = classified(parser.parse(
            "feat: new config loader\n\nReads TOML too.\n\nBREAKING CHANGE: the YAML\nkey names changed",
        ));

        assert_eq!(parsed.bump_level, BumpLevel::Major);
        assert_eq!(
            parsed.descriptions,
            vec!["new config loader", "Reads TOML too."]
        );
        assert_eq!(
            parsed.breaking_descriptions,
            vec!["the YAML key names changed"]
        );
    }

    #[test]
    fn test_breaking_change_hyphenated_footer() {
        let parser = AngularParser::new();
        let parsed = classified(parser.parse("docs: rewrite\n\nBREAKING-CHANGE: urls moved"));
        assert_eq!(parsed.bump_level, BumpLevel::Major);
        assert_eq!(parsed.breaking_descriptions, vec!["urls moved"]);
    }

    #[test]
    fn test_body_paragraphs() {
        let parser = AngularParser::new();
        let parsed = classified(parser.parse(
            "chore: tidy\n\nfirst paragraph\nwrapped line\n\n\nsecond paragraph\n",
        ));

        assert_eq!(parsed.bump_level, BumpLevel::None);
        assert_eq!(
            parsed.descriptions,
            vec!["tidy", "first paragraph wrapped line", "second paragraph"]
        );
    }

    #[test]
    fn test_unknown_type() {
        let parser = AngularParser::new();
        let parsed = classified(parser.parse("wip(ui): half done"));

        assert_eq!(parsed.category, UNKNOWN_CATEGORY);
        assert_eq!(parsed.bump_level, BumpLevel::None);
        assert_eq!(parsed.scope.as_deref(), Some("ui"));
    }

    #[test]
    fn test_unknown_type_uses_default_bump() {
        let parser =
            AngularParser::with_config(ParserConfig::default().with_default_bump(BumpLevel::Patch));
        let parsed = classified(parser.parse("wip: half done"));
        assert_eq!(parsed.bump_level, BumpLevel::Patch);
    }

    #[test]
    fn test_custom_type_config() {
        let parser = AngularParser::with_config(
            ParserConfig::default().with_type("docs", "Docs", BumpLevel::Patch),
        );
        let parsed = classified(parser.parse("docs: fix typo"));
        assert_eq!(parsed.category, "Docs");
        assert_eq!(parsed.bump_level, BumpLevel::Patch);
    }

    #[test]
    fn test_parse_non_conventional() {
        let parser = AngularParser::new();
        assert_eq!(
            parser.parse("Just a regular commit message"),
            ClassificationResult::unparsed("Unable to parse commit message")
        );
    }

    #[test]
    fn test_parse_empty_message() {
        let parser = AngularParser::new();
        assert!(matches!(
            parser.parse("   "),
            ClassificationResult::Unparsed { .. }
        ));
    }

    #[test]
    fn test_missing_space_after_colon() {
        let parser = AngularParser::new();
        assert!(matches!(
            parser.parse("feat:no space"),
            ClassificationResult::Unparsed { .. }
        ));
    }

    #[test]
    fn test_paragraphs() {
        assert!(paragraphs("").is_empty());
        assert_eq!(paragraphs("\n\na\nb\n\nc"), vec!["a b", "c"]);
    }
}
