//! Runtime settings for a lookup

use crate::docs::DEFAULT_DOCS_URL;
use crate::proxy::ProxyConfig;

/// Settings consumed by the pipeline
#[derive(Debug, Clone)]
pub struct Settings {
    /// Documentation site base URL
    pub docs_url: String,
    /// Module proxy configuration
    pub proxy: ProxyConfig,
    /// Whether to launch a browser once the URL is known
    pub open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            docs_url: DEFAULT_DOCS_URL.to_string(),
            proxy: ProxyConfig::default(),
            open_browser: true,
        }
    }
}
