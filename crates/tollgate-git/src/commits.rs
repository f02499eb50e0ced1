//! Commit lookup and conversion

use chrono::{TimeZone, Utc};
use tracing::{debug, instrument};

use tollgate_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Resolve a revision spec (hash, branch, tag, `HEAD~2`, ...) to a commit
    #[instrument(skip(self))]
    pub fn find_commit(&self, rev: &str) -> Result<CommitInfo> {
        let object = self.repo.revparse_single(rev).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::RevisionNotFound(rev.to_string())
            } else {
                GitError::Git2(e)
            }
        })?;
        let commit = object.peel_to_commit()?;
        debug!(rev, hash = %commit.id(), "resolved revision");
        CommitInfo::try_from(&commit)
    }
}

/// Convert a git2 Commit to CommitInfo.
///
/// Fails when the message is missing or not valid UTF-8.
impl<'a, 'repo> TryFrom<&'a git2::Commit<'repo>> for CommitInfo {
    type Error = GitError;

    fn try_from(commit: &'a git2::Commit<'repo>) -> Result<Self> {
        let hash = commit.id().to_string();
        let raw = commit
            .message()
            .ok_or_else(|| GitError::InvalidMessage(hash.clone()))?;

        let raw = raw.trim();
        let (summary, body) = match raw.split_once('\n') {
            Some((summary, body)) => (summary.trim_end(), body.trim()),
            None => (raw, ""),
        };

        let author = commit.author();
        let timestamp = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .unwrap_or_else(Utc::now);

        let info = CommitInfo::new(
            hash,
            summary,
            author.name().unwrap_or("Unknown"),
            author.email().unwrap_or("unknown@example.com"),
            timestamp,
        );

        let info = info.with_raw_message(raw);
        Ok(if body.is_empty() {
            info
        } else {
            info.with_body(body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo_with_commits() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        repo.commit(Some("HEAD"), &sig, &sig, "Release 1.0.0", &tree, &[])
            .unwrap();

        std::fs::write(temp.path().join("file.txt"), "content").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().unwrap().peel_to_commit().unwrap();

        repo.commit(
            Some("HEAD"),
            &sig,
            &sig,
            "feat(api): add file\n\nLonger explanation.\n\nBREAKING CHANGE: file is required\n",
            &tree,
            &[&parent],
        )
        .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_find_commit_head() {
        let (_temp, repo) = setup_repo_with_commits();
        let commit = repo.find_commit("HEAD").unwrap();
        assert_eq!(commit.message, "feat(api): add file");
        assert_eq!(
            commit.body.as_deref(),
            Some("Longer explanation.\n\nBREAKING CHANGE: file is required")
        );
        assert_eq!(commit.author, "Test");
        assert_eq!(commit.short_hash.len(), 7);
    }

    #[test]
    fn test_find_commit_parent() {
        let (_temp, repo) = setup_repo_with_commits();
        let commit = repo.find_commit("HEAD~1").unwrap();
        assert_eq!(commit.message, "Release 1.0.0");
        assert!(commit.body.is_none());
        assert_eq!(commit.full_message(), "Release 1.0.0");
    }

    #[test]
    fn test_find_commit_unknown_revision() {
        let (_temp, repo) = setup_repo_with_commits();
        assert!(repo.find_commit("does-not-exist").is_err());
    }

    #[test]
    fn test_find_commit_keeps_raw_message() {
        let (temp, _repo) = setup_repo_with_commits();
        let raw = "Merge branch 'topic'\n    Conflicts:\n\tsrc/lib.rs\n";
        {
            let repo = Repository::open(temp.path()).unwrap();
            let sig = Signature::now("Test", "test@example.com").unwrap();
            let parent = repo.head().unwrap().peel_to_commit().unwrap();
            let tree = parent.tree().unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, raw, &tree, &[&parent]).unwrap();
        }

        let repo = GitRepo::open(temp.path()).unwrap();
        let commit = repo.find_commit("HEAD").unwrap();
        assert_eq!(commit.message, "Merge branch 'topic'");
        assert_eq!(commit.raw_message.as_deref(), Some(raw.trim()));
        assert_eq!(commit.full_message(), raw.trim());
    }
}
