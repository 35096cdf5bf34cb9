//! gen-error-map - CLI
//!
//! Usage: `gen-error-map <SOURCE> <DEST>`

use anyhow::{Context, Result};
use clap::Parser;
use gen_error_map::{generate_file, util::logger, NAME, VERSION};
use std::path::PathBuf;

/// Generate the signon GDBusErrorEntry table from signon-errors.h
#[derive(Parser, Debug)]
#[command(name = NAME)]
#[command(version = VERSION)]
#[command(long_about = None)]
struct Args {
    /// Header declaring the SIGNON_ERROR_* constants
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// C file to create or overwrite
    #[arg(value_name = "DEST")]
    destination: PathBuf,
}

fn main() -> Result<()> {
    logger::init_cli();
    let args = Args::parse();

    let count = generate_file(&args.source, &args.destination).with_context(|| {
        format!(
            "Failed to generate {} from {}",
            args.destination.display(),
            args.source.display()
        )
    })?;

    if count == 0 {
        tracing::warn!("No SIGNON_ERROR_ constants found in {}", args.source.display());
    }

    Ok(())
}
