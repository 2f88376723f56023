//! `l2u`: convert LaTeX-like markup on stdin to Unicode text on stdout.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use l2u_core::{ConvertConfig, SubstitutionTable, convert};
use l2u_table_gen::GenConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "l2u",
    version,
    about = "Convert LaTeX-style markup on stdin to Unicode text on stdout",
    long_about = "Convert LaTeX-style markup on stdin to Unicode text on stdout.\n\n\
                  Examples: \\alpha -> α, x^{2} -> x², $x$ -> 𝑥, \\mathbb{R} -> ℝ.\n\
                  Input that ends inside a command produces an (error:<command>) marker."
)]
struct Cli {
    /// Regenerate the table data from NamesList.txt (downloaded if missing),
    /// print it and exit with status 1.
    #[arg(short = 'g', long)]
    generate: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.generate {
        generate()?;
        process::exit(1);
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let report = convert(
        stdin,
        stdout,
        SubstitutionTable::builtin(),
        &ConvertConfig::default(),
    )
    .context("converting stdin")?;
    debug!(
        bytes_in = report.bytes_in,
        bytes_out = report.bytes_out,
        diagnostics = report.diagnostics.len(),
        "done"
    );
    Ok(())
}

fn generate() -> Result<()> {
    let config = GenConfig::default();
    let text = l2u_table_gen::run(&config)
        .with_context(|| format!("generating table from {}", config.names_path.display()))?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
