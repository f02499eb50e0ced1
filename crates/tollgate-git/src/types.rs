//! Git types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about a git commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Short hash (first 7 characters)
    pub short_hash: String,
    /// Commit message (first line)
    pub message: String,
    /// Remainder of the message after the summary line
    pub body: Option<String>,
    /// Message exactly as stored in the repository, trimmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_message: Option<String>,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        author_email: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let hash = hash.into();
        let short_hash = hash.chars().take(7).collect();

        Self {
            hash,
            short_hash,
            message: message.into(),
            body: None,
            raw_message: None,
            author: author.into(),
            author_email: author_email.into(),
            timestamp,
        }
    }

    /// Set the commit body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Keep the stored message text as-is
    pub fn with_raw_message(mut self, raw: impl Into<String>) -> Self {
        self.raw_message = Some(raw.into());
        self
    }

    /// Get the full message including body.
    ///
    /// Returns the stored message verbatim when one was recorded, otherwise
    /// summary and body joined by a blank line.
    pub fn full_message(&self) -> String {
        if let Some(raw) = &self.raw_message {
            return raw.clone();
        }

        match self.body.as_deref() {
            Some(body) if !body.is_empty() => format!("{}\n\n{}", self.message, body),
            _ => self.message.clone(),
        }
    }
}
