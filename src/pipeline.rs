//! Lookup pipeline
//!
//! Runs the stages in order and stops at the first failure:
//! repository inspection, module identity, version resolution, URL building.

use crate::config::Settings;
use crate::docs::docs_url;
use crate::error::Result;
use crate::gomod::{read_module_path, ModulePath};
use crate::proxy::ProxyClient;
use crate::repo::{inspect, Revision};
use serde::Serialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Result of a successful lookup
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Working-copy path the lookup started from
    pub path: PathBuf,
    /// Commit at HEAD
    pub revision: Revision,
    /// Module path from `go.mod`
    pub module: ModulePath,
    /// Version published for `revision`
    pub version: String,
    /// Documentation URL for `module` at `version`
    pub url: Url,
}

/// Resolves a working copy to its documentation URL
pub struct Pipeline {
    settings: Settings,
    proxy: ProxyClient,
}

impl Pipeline {
    /// Create a pipeline from settings
    pub fn new(settings: Settings) -> Result<Self> {
        let proxy = ProxyClient::new(settings.proxy.clone())?;
        Ok(Self { settings, proxy })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve the documentation URL for the working copy at `path`
    pub fn resolve(&self, path: &Path) -> Result<Report> {
        let inspection = inspect(path)?;
        tracing::debug!("repository root: {:?}", inspection.root);
        tracing::info!("head hash: {}", inspection.revision);
        if inspection.status.is_clean() {
            tracing::debug!("working copy is clean");
        } else {
            tracing::info!(
                "working copy has {} changed file(s):\n{}",
                inspection.status.entries().len(),
                inspection.status
            );
        }

        let module = read_module_path(path)?;
        tracing::info!("module name: {}", module);

        let info_url = self.proxy.info_url(&module, &inspection.revision)?;
        tracing::info!("fetching {}", info_url);
        let info = self.proxy.fetch_info(info_url)?;
        tracing::debug!(version = %info.version, time = ?info.time, "resolved version");

        let url = docs_url(&self.settings.docs_url, &module, &info.version)?;
        tracing::info!("got url: {}", url);

        Ok(Report {
            path: path.to_path_buf(),
            revision: inspection.revision,
            module,
            version: info.version,
            url,
        })
    }
}
