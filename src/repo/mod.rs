//! Repository inspection
//!
//! This module handles the Git side of a lookup:
//! - Discovering the repository enclosing a working-copy path
//! - Summarizing working-copy status for the operator
//! - Reading the commit currently checked out

mod status;

pub use status::{StatusCode, StatusEntry, WorktreeStatus};

use crate::error::{Error, Result};
use git2::{Oid, Repository as GitRepo, StatusOptions};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Full hexadecimal hash of a commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    /// Wrap a hash string as returned by Git
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Oid> for Revision {
    fn from(oid: Oid) -> Self {
        Self(oid.to_string())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the inspector found in a working copy
#[derive(Debug, Clone)]
pub struct Inspection {
    /// Root of the enclosing repository
    pub root: PathBuf,
    /// Commit at HEAD
    pub revision: Revision,
    /// Working-copy status at the time of inspection
    pub status: WorktreeStatus,
}

/// Represents the Git repository enclosing a working copy
pub struct Repository {
    /// The underlying git2 repository
    repo: GitRepo,
    /// Path the repository was opened from
    opened_at: PathBuf,
    /// Path to the repository root
    root: PathBuf,
}

impl Repository {
    /// Open the repository containing `path`, searching upward for `.git`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = GitRepo::discover(path).map_err(|source| Error::RepositoryNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        // Bare repositories have no workdir; status reports that later.
        let root = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self {
            repo,
            opened_at: path.to_path_buf(),
            root,
        })
    }

    /// Get the repository root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate modified, staged and untracked files
    pub fn status(&self) -> Result<WorktreeStatus> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|source| Error::StatusUnavailable {
                path: self.opened_at.clone(),
                source,
            })?;

        let entries = statuses
            .iter()
            .filter_map(|entry| {
                let path = entry.path()?;
                StatusEntry::from_git(PathBuf::from(path), entry.status())
            })
            .collect();

        Ok(WorktreeStatus::new(entries))
    }

    /// Get the most recent commit reachable from HEAD
    ///
    /// Only the first entry of the history walk is read. The walk is released
    /// when it goes out of scope, on every return path.
    pub fn head_revision(&self) -> Result<Revision> {
        let no_history = |source| Error::NoRevisionHistory {
            path: self.opened_at.clone(),
            source,
        };

        let mut walk = self.repo.revwalk().map_err(|e| no_history(Some(e)))?;
        walk.push_head().map_err(|e| no_history(Some(e)))?;

        match walk.next() {
            Some(Ok(oid)) => Ok(Revision::from(oid)),
            Some(Err(e)) => Err(no_history(Some(e))),
            None => Err(no_history(None)),
        }
    }
}

/// Open the repository enclosing `path` and report its status and HEAD
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<Inspection> {
    let repo = Repository::open(path)?;
    let status = repo.status()?;
    let revision = repo.head_revision()?;

    Ok(Inspection {
        root: repo.root().to_path_buf(),
        revision,
        status,
    })
}
