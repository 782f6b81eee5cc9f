//! Version resolution against a Go module proxy
//!
//! This module handles:
//! - Building `{module}/@v/{revision}.info` request URLs
//! - Fetching and decoding version metadata
//! - Case-escaping module paths for the proxy protocol

mod client;

pub use client::{ProxyClient, ProxyConfig, VersionInfo, DEFAULT_PROXY_URL};

/// Escape a path for use in proxy requests
///
/// Each uppercase ASCII letter becomes `!` followed by its lowercase form,
/// so that case-insensitive file systems behind a proxy stay unambiguous.
pub fn escape_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_ascii_uppercase() {
            out.push('!');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
