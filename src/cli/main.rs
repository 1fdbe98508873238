use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use postlist::core::config::ListingConfig;
use postlist::core::telemetry::logging::init_logging;
use postlist::services::fs::listing::list_entries;
use postlist::services::html::render_to_string;

/// Print the entries of ./posts as an HTML list, newest name first.
#[derive(Debug, Parser)]
#[command(name = "postlist", version, about)]
struct Cli {
    /// Increase diagnostic output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ListingConfig::default();
    let entries = list_entries(&config.dir)?;
    tracing::info!(count = entries.len(), "rendering listing");

    let html = render_to_string(&entries, &config);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .context("failed to write listing to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
