//! CLI interface using clap
//!
//! Provides the command-line interface for gobranchdocs

mod commands;

pub use commands::*;

use crate::config::Settings;
use crate::docs::DEFAULT_DOCS_URL;
use crate::proxy::{ProxyConfig, DEFAULT_PROXY_URL};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// gobranchdocs - open pkg.go.dev for the commit you have checked out
#[derive(Parser, Debug)]
#[command(name = crate::APP_NAME)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the working copy (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Documentation site base URL
    #[arg(long = "pkg-go-dev-url", default_value = DEFAULT_DOCS_URL)]
    pub pkg_go_dev_url: String,

    /// Module proxy base URL
    #[arg(long = "proxy-go-url", default_value = DEFAULT_PROXY_URL)]
    pub proxy_go_url: String,

    /// Print the URL without opening a browser
    #[arg(long = "dont-open-browser")]
    pub dont_open_browser: bool,

    /// Proxy request timeout in seconds (waits indefinitely when unset)
    #[arg(long, value_name = "SECONDS")]
    pub proxy_timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Settings for the lookup pipeline
    pub fn settings(&self) -> Settings {
        Settings {
            docs_url: self.pkg_go_dev_url.clone(),
            proxy: ProxyConfig {
                base_url: self.proxy_go_url.clone(),
                timeout: self.proxy_timeout.map(Duration::from_secs),
            },
            open_browser: !self.dont_open_browser,
        }
    }
}
