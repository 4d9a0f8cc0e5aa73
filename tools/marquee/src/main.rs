//! Dot-matrix text marquee for the terminal.
//!
//! Renders text through the Lumatrix core onto a simulated LED matrix and
//! dumps it as ASCII art, either scrolling on a timer or panned
//! interactively with the keyboard.

mod cli;
mod config;
mod demo;
mod term;

use anyhow::Result;
use clap::Parser;

use crate::config::Settings;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match &cli.command {
        cli::Command::Scroll(args) => {
            let settings = Settings::resolve(&cli, args.text.clone())?;
            demo::run_scroll(&settings)
        }
        cli::Command::Pan(args) => {
            let settings = Settings::resolve(&cli, args.text.clone())?;
            demo::run_pan(&settings)
        }
    }
}
