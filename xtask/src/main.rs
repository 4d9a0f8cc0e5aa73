//! Build automation for the Lumatrix workspace.
//!
//! Usage:
//!   cargo xtask codegen  - Regenerate checked-in font table modules

mod codegen;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Lumatrix")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the checked-in font table modules from their glyph sheets
    Codegen,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen => codegen::run(&workspace_root()?),
    }
}

/// The workspace root is one level above the xtask crate.
fn workspace_root() -> Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir
        .parent()
        .context("xtask manifest directory has no parent")?;
    Ok(root.to_path_buf())
}
