//! Working-copy status types

use git2::Status;
use std::fmt;
use std::path::PathBuf;

/// State of a file on one side of the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Unmodified,
    Untracked,
    Added,
    Modified,
    Deleted,
    Renamed,
    TypeChanged,
    Conflicted,
}

impl StatusCode {
    /// Single-character code as shown by `git status --short`
    pub fn as_char(self) -> char {
        match self {
            StatusCode::Unmodified => ' ',
            StatusCode::Untracked => '?',
            StatusCode::Added => 'A',
            StatusCode::Modified => 'M',
            StatusCode::Deleted => 'D',
            StatusCode::Renamed => 'R',
            StatusCode::TypeChanged => 'T',
            StatusCode::Conflicted => 'U',
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A file whose state differs from HEAD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Path relative to the repository root
    pub path: PathBuf,
    /// State in the index
    pub staging: StatusCode,
    /// State in the working tree
    pub worktree: StatusCode,
}

impl StatusEntry {
    /// Build an entry from libgit2 status flags, or `None` for unchanged files
    pub fn from_git(path: PathBuf, status: Status) -> Option<Self> {
        if status.is_conflicted() {
            return Some(Self {
                path,
                staging: StatusCode::Conflicted,
                worktree: StatusCode::Conflicted,
            });
        }

        if status.is_wt_new() && !status.intersects(Status::INDEX_NEW) {
            return Some(Self {
                path,
                staging: StatusCode::Untracked,
                worktree: StatusCode::Untracked,
            });
        }

        let staging = if status.is_index_new() {
            StatusCode::Added
        } else if status.is_index_modified() {
            StatusCode::Modified
        } else if status.is_index_deleted() {
            StatusCode::Deleted
        } else if status.is_index_renamed() {
            StatusCode::Renamed
        } else if status.is_index_typechange() {
            StatusCode::TypeChanged
        } else {
            StatusCode::Unmodified
        };

        let worktree = if status.is_wt_modified() {
            StatusCode::Modified
        } else if status.is_wt_deleted() {
            StatusCode::Deleted
        } else if status.is_wt_renamed() {
            StatusCode::Renamed
        } else if status.is_wt_typechange() {
            StatusCode::TypeChanged
        } else {
            StatusCode::Unmodified
        };

        if staging == StatusCode::Unmodified && worktree == StatusCode::Unmodified {
            return None;
        }

        Some(Self {
            path,
            staging,
            worktree,
        })
    }
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.staging, self.worktree, self.path.display())
    }
}

/// Summary of a working copy, one entry per changed file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorktreeStatus {
    entries: Vec<StatusEntry>,
}

impl WorktreeStatus {
    pub fn new(entries: Vec<StatusEntry>) -> Self {
        Self { entries }
    }

    /// True when nothing is staged, modified or untracked
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }
}

impl fmt::Display for WorktreeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
