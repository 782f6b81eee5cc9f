//! Browser launching

use crate::error::{Error, Result};
use url::Url;

/// Something that can show a URL to the user
pub trait Launcher {
    fn open(&self, url: &Url) -> Result<()>;
}

/// Opens URLs in the user's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn open(&self, url: &Url) -> Result<()> {
        webbrowser::open(url.as_str()).map_err(|source| Error::BrowserLaunchFailed {
            url: url.to_string(),
            source,
        })
    }
}
