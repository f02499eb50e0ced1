//! Opening repositories

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use tracing::{info, instrument};

use tollgate_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Read-only handle on a git repository
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Open the repository rooted at `path`
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!("opening git repository");
        Repository::open(path)
            .map(|repo| Self { repo })
            .map_err(|e| open_error(e, GitError::RepositoryNotFound(path.to_path_buf())))
    }

    /// Open the repository containing `start_path`, walking up parent directories
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!("discovering git repository");
        Repository::discover(start_path)
            .map(|repo| Self { repo })
            .map_err(|e| open_error(e, GitError::NotARepository(start_path.to_path_buf())))
    }

    /// Working directory of the repository, or the git dir for bare repositories
    pub fn workdir(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }
}

/// `missing` when libgit2 found nothing, `OpenFailed` for anything else
fn open_error(e: git2::Error, missing: GitError) -> GitError {
    if e.code() == ErrorCode::NotFound {
        missing
    } else {
        GitError::OpenFailed(e.to_string())
    }
}
