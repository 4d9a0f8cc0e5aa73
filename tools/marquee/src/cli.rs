//! Command-line interface definitions for marquee.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dot-matrix text marquee for the terminal.
#[derive(Parser)]
#[command(name = "marquee", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Extra blank columns between glyphs.
    #[arg(long, short = 's', global = true)]
    pub spacing: Option<u32>,

    /// Surface width in pixels.
    #[arg(long, global = true)]
    pub width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long, global = true)]
    pub height: Option<u32>,

    /// Frame period of the scroll loop, in milliseconds.
    #[arg(long, global = true)]
    pub frame_ms: Option<u64>,

    /// Configuration file (default: marquee.toml when present).
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Scroll text across the matrix right to left.
    Scroll(TextArgs),
    /// Move text around with the arrow keys.
    Pan(TextArgs),
}

/// Text argument shared by both display modes.
#[derive(Parser)]
pub struct TextArgs {
    /// Text to display (falls back to the config file).
    pub text: Option<String>,
}
