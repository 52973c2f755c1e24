//! ENT CLI - writes the login page header to `index.html`.

use anyhow::{Context, Result};
use clap::Parser;
use ent_page::{AssembleConfig, PageAssembler};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ent")]
#[command(about = "Write the ENT login page header to index.html")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout only carries the progress lines
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("Construction du HTML...");

    let config = AssembleConfig::default();
    let report = PageAssembler::new(config)
        .assemble()
        .context("Failed to build the ENT header")?;

    tracing::debug!("Output: {}", report.output.display());

    println!("✅ Header créé");

    Ok(())
}
