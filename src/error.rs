//! Error types for the documentation lookup pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by each stage of the pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error("no git repository found at or above {path:?}")]
    RepositoryNotFound {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("failed to read working-copy status of {path:?}")]
    StatusUnavailable {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("repository at {path:?} has no commits reachable from HEAD")]
    NoRevisionHistory {
        path: PathBuf,
        #[source]
        source: Option<git2::Error>,
    },

    #[error("failed to read module file {path:?}")]
    ModuleFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid module declaration in {path:?}: {reason}")]
    ModuleDeclarationInvalid { path: PathBuf, reason: String },

    #[error("failed to reach module proxy at {url}")]
    ResolverUnreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no published version at {url}: {reason}")]
    VersionNotFound { url: String, reason: String },

    #[error("invalid base URL {url:?}: {reason}")]
    UrlConstructionFailed { url: String, reason: String },

    #[error("failed to open browser for {url}")]
    BrowserLaunchFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fieldless category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RepositoryNotFound,
    StatusUnavailable,
    NoRevisionHistory,
    ModuleFileNotFound,
    ModuleDeclarationInvalid,
    ResolverUnreachable,
    VersionNotFound,
    UrlConstructionFailed,
    BrowserLaunchFailed,
}

impl Error {
    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RepositoryNotFound { .. } => ErrorKind::RepositoryNotFound,
            Error::StatusUnavailable { .. } => ErrorKind::StatusUnavailable,
            Error::NoRevisionHistory { .. } => ErrorKind::NoRevisionHistory,
            Error::ModuleFileNotFound { .. } => ErrorKind::ModuleFileNotFound,
            Error::ModuleDeclarationInvalid { .. } => ErrorKind::ModuleDeclarationInvalid,
            Error::ResolverUnreachable { .. } => ErrorKind::ResolverUnreachable,
            Error::VersionNotFound { .. } => ErrorKind::VersionNotFound,
            Error::UrlConstructionFailed { .. } => ErrorKind::UrlConstructionFailed,
            Error::BrowserLaunchFailed { .. } => ErrorKind::BrowserLaunchFailed,
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = Error::VersionNotFound {
            url: "https://proxy.golang.org/example.com/mod/@v/abc.info".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::VersionNotFound);
        assert!(err.to_string().contains("example.com/mod/@v/abc.info"));
    }
}
