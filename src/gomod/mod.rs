//! Module identity reading
//!
//! Reads `go.mod` from the root of a working copy and extracts the path from
//! its `module` directive. Parsing is lax: only the module directive has to be
//! well formed, everything else in the file is skipped.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use thiserror::Error as ThisError;

/// Name of the module declaration file
pub const MODULE_FILE: &str = "go.mod";

/// Canonical import path of a module, including any `/vN` suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a module directive could not be read
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum DeclarationError {
    #[error("no module directive")]
    Missing,

    #[error("module directive has no path")]
    NoPath,

    #[error("module directive has more than one argument")]
    TooManyArguments,

    #[error("module path is empty")]
    EmptyPath,

    #[error("malformed quoted module path")]
    BadQuote,
}

/// Read the module path declared in `dir/go.mod`
pub fn read_module_path<P: AsRef<Path>>(dir: P) -> Result<ModulePath> {
    let path = dir.as_ref().join(MODULE_FILE);
    let data = std::fs::read(&path).map_err(|source| Error::ModuleFileNotFound {
        path: path.clone(),
        source,
    })?;

    parse_module_path(&String::from_utf8_lossy(&data)).map_err(|e| {
        Error::ModuleDeclarationInvalid {
            path,
            reason: e.to_string(),
        }
    })
}

/// Extract the module path from the contents of a `go.mod` file
///
/// The first `module` directive decides the outcome; no other line is
/// inspected. The path may be bare or double-quoted, and `//` comments
/// are ignored.
pub fn parse_module_path(data: &str) -> std::result::Result<ModulePath, DeclarationError> {
    for line in data.lines() {
        let line = line.split("//").next().unwrap_or("");
        let mut words = line.split_whitespace();
        if words.next() != Some("module") {
            continue;
        }

        let path = match (words.next(), words.next()) {
            (None, _) => return Err(DeclarationError::NoPath),
            (Some(_), Some(_)) => return Err(DeclarationError::TooManyArguments),
            (Some(word), None) if word.starts_with('"') => {
                serde_json::from_str::<String>(word).map_err(|_| DeclarationError::BadQuote)?
            }
            (Some(word), None) => word.to_string(),
        };

        if path.is_empty() {
            return Err(DeclarationError::EmptyPath);
        }
        return Ok(ModulePath(path));
    }

    Err(DeclarationError::Missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_simple_module() {
        let path = parse_module_path("module example.com/mod\n\ngo 1.21\n").unwrap();
        assert_eq!(path.as_str(), "example.com/mod");
    }

    #[test]
    fn test_trims_whitespace() {
        let path = parse_module_path("  module \t example.com/mod   \r\n").unwrap();
        assert_eq!(path.as_str(), "example.com/mod");
    }

    #[test]
    fn test_major_version_suffix() {
        let path = parse_module_path("module github.com/user/repo/v2\n").unwrap();
        assert_eq!(path.as_str(), "github.com/user/repo/v2");
    }

    #[test]
    fn test_quoted_and_commented() {
        let data = "// header\nmodule \"example.com/quoted\" // Deprecated: use v2\n";
        assert_eq!(parse_module_path(data).unwrap().as_str(), "example.com/quoted");
    }

    #[test]
    fn test_lenient_about_unrelated_lines() {
        let data = r#"
go 1.2x
require (
    example.com/dep v1.0.0
    "broken
module example.com/mod
toolchain ???
replace => nowhere
"#;
        assert_eq!(parse_module_path(data).unwrap().as_str(), "example.com/mod");
    }

    #[test]
    fn test_missing_module_line() {
        let err = parse_module_path("go 1.21\nrequire example.com/dep v1.0.0\n").unwrap_err();
        assert_eq!(err, DeclarationError::Missing);
        assert_eq!(parse_module_path("").unwrap_err(), DeclarationError::Missing);
    }

    #[test]
    fn test_modules_prefix_is_not_module() {
        let err = parse_module_path("modules example.com/mod\n").unwrap_err();
        assert_eq!(err, DeclarationError::Missing);
    }

    #[test]
    fn test_malformed_module_line() {
        assert_eq!(parse_module_path("module\n").unwrap_err(), DeclarationError::NoPath);
        assert_eq!(
            parse_module_path("module a b\n").unwrap_err(),
            DeclarationError::TooManyArguments
        );
        assert_eq!(
            parse_module_path("module \"\"\n").unwrap_err(),
            DeclarationError::EmptyPath
        );
        assert_eq!(
            parse_module_path("module \"example.com/mod\n").unwrap_err(),
            DeclarationError::BadQuote
        );
    }

    #[test]
    fn test_read_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODULE_FILE), "module example.com/mod\n").unwrap();

        let path = read_module_path(dir.path()).unwrap();
        assert_eq!(path.to_string(), "example.com/mod");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_module_path(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ModuleFileNotFound);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODULE_FILE), "go 1.21\n").unwrap();

        let err = read_module_path(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ModuleDeclarationInvalid);
        assert!(err.to_string().contains("no module directive"));
    }
}
