//! l2u table generator: derives substitution tables from the Unicode names
//! list and prints them to stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use l2u_table_gen::{DEFAULT_NAMES_FILE, DEFAULT_NAMES_URL, GenConfig, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "l2u-table-gen", version)]
struct Cli {
    /// Names list to read (and to save to when downloading).
    #[arg(long, default_value = DEFAULT_NAMES_FILE)]
    names: PathBuf,
    /// Where to download the names list from when it is missing.
    #[arg(long, default_value = DEFAULT_NAMES_URL)]
    url: String,
    /// Fail instead of downloading a missing names list.
    #[arg(long)]
    no_fetch: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Rust)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GenConfig {
        names_path: cli.names,
        url: cli.url,
        fetch: !cli.no_fetch,
        format: cli.format,
    };

    let text = l2u_table_gen::run(&config)
        .with_context(|| format!("generating table from {}", config.names_path.display()))?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
