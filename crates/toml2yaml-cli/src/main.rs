use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "toml2yaml",
    about = "Convert TOML files in a directory to YAML, deleting each original on success",
    version
)]
struct Args {
    /// Path to the directory containing TOML files
    path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))?;

    let options = toml2yaml::Options::default();
    let report = toml2yaml::convert_dir(&args.path, &options);

    info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        "finished scanning {}",
        args.path.display()
    );

    Ok(())
}
