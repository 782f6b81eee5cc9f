//! gobranchdocs - open documentation for the checked-out commit
//!
//! Resolves the HEAD commit of a Go module's working copy to its published
//! version on the module proxy and opens the matching pkg.go.dev page.

use anyhow::Result;
use gobranchdocs::browser::SystemBrowser;
use gobranchdocs::cli::{self, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(&cli, &SystemBrowser)?;

    Ok(())
}
