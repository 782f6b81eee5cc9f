//! Slash-separated path joining
//!
//! Segments are joined with `/` and lexically cleaned: repeated slashes
//! collapse, `.` elements drop and `..` removes the element before it.
//! Nothing is percent-encoded here.

use crate::error::{Error, Result};
use url::Url;

/// Join non-empty segments with `/` and clean the result
///
/// Returns an empty string when every segment is empty.
pub fn join(segments: &[&str]) -> String {
    let parts: Vec<&str> = segments.iter().copied().filter(|s| !s.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean(&parts.join("/"))
}

/// Lexically normalize a slash-separated path
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();

    for element in path.split('/') {
        match element {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                _ if rooted => {}
                _ => stack.push(".."),
            },
            other => stack.push(other),
        }
    }

    let joined = stack.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Parse `base` and append `segments` to its path
///
/// Scheme, host, query and any existing path prefix of `base` are kept.
pub fn join_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| Error::UrlConstructionFailed {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(Error::UrlConstructionFailed {
            url: base.to_string(),
            reason: "URL cannot carry a path".to_string(),
        });
    }

    let joined = {
        let mut parts = vec![url.path()];
        parts.extend_from_slice(segments);
        join(&parts)
    };
    url.set_path(&joined);

    Ok(url)
}
