//! Documentation URL construction

mod path;

pub use path::{clean, join, join_url};

use crate::error::Result;
use crate::gomod::ModulePath;
use url::Url;

/// Default documentation site
pub const DEFAULT_DOCS_URL: &str = "https://pkg.go.dev";

/// Build `{base}/{module}@{version}`
///
/// The module path is appended unescaped; characters that would normally
/// need percent-encoding are left to the URL parser's path normalization.
pub fn docs_url(base: &str, module: &ModulePath, version: &str) -> Result<Url> {
    let segment = format!("{}@{}", module, version);
    join_url(base, &[&segment])
}
