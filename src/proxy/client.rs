//! Module proxy client for version lookups

use super::escape_path;
use crate::docs::join_url;
use crate::error::{Error, Result};
use crate::gomod::ModulePath;
use crate::repo::Revision;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Default module proxy
pub const DEFAULT_PROXY_URL: &str = "https://proxy.golang.org";

/// Version metadata served at `@v/{revision}.info`
///
/// Field names are matched case-insensitively when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Canonical version, e.g. `v1.2.3` or a pseudo-version
    #[serde(rename = "Version")]
    pub version: String,
    /// Commit time as reported by the proxy
    #[serde(rename = "Time")]
    pub time: Option<String>,
}

/// Configuration for the proxy client
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Proxy base URL
    pub base_url: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROXY_URL.to_string(),
            timeout: None,
        }
    }
}

/// Blocking client for the module proxy protocol
///
/// Each lookup is a single unauthenticated GET with no retries.
pub struct ProxyClient {
    config: ProxyConfig,
    client: reqwest::blocking::Client,
}

impl ProxyClient {
    /// Create a new proxy client
    pub fn new(config: ProxyConfig) -> Result<Self> {
        // Always set the timeout explicitly so the library default never applies
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| Error::ResolverUnreachable {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self { config, client })
    }

    /// Create a client for `base_url` with no timeout
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(ProxyConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// URL of the `.info` document for a module at a revision
    pub fn info_url(&self, module: &ModulePath, revision: &Revision) -> Result<Url> {
        let info = format!("{}.info", escape_path(revision.as_str()));
        join_url(
            &self.config.base_url,
            &[&escape_path(module.as_str()), "@v", &info],
        )
    }

    /// Fetch the version metadata for `module` at `revision`
    pub fn version_info(&self, module: &ModulePath, revision: &Revision) -> Result<VersionInfo> {
        let url = self.info_url(module, revision)?;
        self.fetch_info(url)
    }

    /// Fetch and decode an `.info` document from a URL built by [`Self::info_url`]
    pub fn fetch_info(&self, url: Url) -> Result<VersionInfo> {
        let attempted = url.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::ResolverUnreachable {
                url: attempted.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let detail = body.lines().next().unwrap_or("").trim();
            return Err(Error::VersionNotFound {
                url: attempted,
                reason: if detail.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status, detail)
                },
            });
        }

        let body = response
            .text()
            .map_err(|source| Error::ResolverUnreachable {
                url: attempted.clone(),
                source,
            })?;

        decode_version_info(&body).map_err(|reason| Error::VersionNotFound {
            url: attempted,
            reason,
        })
    }

    /// Resolve the published version string for `module` at `revision`
    pub fn resolve_version(&self, module: &ModulePath, revision: &Revision) -> Result<String> {
        Ok(self.version_info(module, revision)?.version)
    }
}

/// Decode an `.info` body, requiring a non-empty version
///
/// Keys match case-insensitively; when several keys fold to the same name
/// the last one in the document wins.
fn decode_version_info(body: &str) -> std::result::Result<VersionInfo, String> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| format!("malformed version info: {}", e))?;
    let fields = value
        .as_object()
        .ok_or_else(|| "version info is not a JSON object".to_string())?;

    let mut version = None;
    let mut time = None;
    for (key, value) in fields {
        if key.eq_ignore_ascii_case("version") {
            version = Some(value);
        } else if key.eq_ignore_ascii_case("time") {
            time = Some(value);
        }
    }

    let version = match version {
        Some(Value::String(v)) if v.is_empty() => {
            return Err("version info has an empty Version field".to_string())
        }
        Some(Value::String(v)) => v.clone(),
        Some(_) => return Err("version info Version field is not a string".to_string()),
        None => return Err("version info has no Version field".to_string()),
    };

    Ok(VersionInfo {
        version,
        time: time.and_then(Value::as_str).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_proxy_casing() {
        let info =
            decode_version_info(r#"{"Version":"v1.2.3","Time":"2023-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(info.version, "v1.2.3");
        assert_eq!(info.time.as_deref(), Some("2023-01-01T00:00:00Z"));
    }

    #[test]
    fn test_decode_lowercase_and_missing_time() {
        let info = decode_version_info(r#"{"version":"v0.1.0"}"#).unwrap();
        assert_eq!(info.version, "v0.1.0");
        assert!(info.time.is_none());
    }

    #[test]
    fn test_decode_any_key_casing() {
        let info = decode_version_info(r#"{"TIME":"x","VERSION":"v1.2.3"}"#).unwrap();
        assert_eq!(info.version, "v1.2.3");
        assert_eq!(info.time.as_deref(), Some("x"));
    }

    #[test]
    fn test_decode_folded_duplicate_takes_last() {
        let info = decode_version_info(r#"{"Version":"v1","version":"v2"}"#).unwrap();
        assert_eq!(info.version, "v2");

        let info = decode_version_info(r#"{"version":"v2","Version":"v1"}"#).unwrap();
        assert_eq!(info.version, "v1");
    }

    #[test]
    fn test_decode_rejects_bad_bodies() {
        assert!(decode_version_info(r#"["v1.2.3"]"#).is_err());
        assert!(decode_version_info("not json").is_err());
        assert!(decode_version_info(r#"{"Time":"2023-01-01T00:00:00Z"}"#).is_err());
        assert!(decode_version_info(r#"{"Version":42}"#).is_err());
        assert!(decode_version_info(r#"{"Version":""}"#).is_err());
    }

    #[test]
    fn test_default_config_has_no_timeout() {
        let config = ProxyConfig::default();
        assert_eq!(config.base_url, DEFAULT_PROXY_URL);
        assert!(config.timeout.is_none());
    }
}
