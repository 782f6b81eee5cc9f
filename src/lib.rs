//! gobranchdocs - documentation for the code you have checked out
//!
//! This library resolves a Git working copy's HEAD commit to the version a Go
//! module proxy published for it, and builds the documentation URL for that
//! exact version.

pub mod browser;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod gomod;
pub mod pipeline;
pub mod proxy;
pub mod repo;

/// Re-export commonly used types
pub use config::Settings;
pub use error::{Error, ErrorKind, Result};
pub use gomod::ModulePath;
pub use pipeline::{Pipeline, Report};
pub use repo::Revision;

/// Binary and command name
pub const APP_NAME: &str = "gobranchdocs";
