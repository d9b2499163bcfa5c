use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tcprov_core::{ArchiveProvisioner, ArchiveSpec};

/// Fetch, verify and extract the pinned binutils release into a
/// working directory.
#[derive(Parser)]
#[command(name = "tcprov", version, about)]
struct Cli {
    /// Working directory the extracted tree is provisioned into.
    /// Must already exist and be writable.
    #[arg(default_value = ".")]
    dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.dir.is_dir() {
        bail!("{} is not a directory", cli.dir.display());
    }

    let provisioner = ArchiveProvisioner::with_defaults(ArchiveSpec::binutils())?;
    let name = provisioner.spec().name.clone();
    provisioner
        .ensure(&cli.dir)
        .with_context(|| format!("failed to provision {name}"))?;

    log::info!("{name} ready in {}", cli.dir.display());
    Ok(())
}
