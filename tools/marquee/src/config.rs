//! Configuration loading and CLI merging.
//!
//! An optional `marquee.toml` provides defaults; command-line flags win
//! over the file, and built-in defaults fill the rest.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

/// Default config file name, used when `--config` is not given.
const DEFAULT_CONFIG: &str = "marquee.toml";

/// On-disk configuration; every field is optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    text: Option<String>,
    spacing: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
    frame_ms: Option<u64>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Text to display.
    pub text: String,
    /// Extra blank columns between glyphs.
    pub spacing: u32,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Frame period of the scroll loop.
    pub frame: Duration,
}

impl Settings {
    /// Resolves settings from the CLI, an optional config file, and the
    /// built-in defaults. `text` comes from the subcommand's positional
    /// argument.
    pub fn resolve(cli: &Cli, text: Option<String>) -> Result<Self> {
        let file = match &cli.config {
            // An explicitly named file must exist; the default is optional.
            Some(path) => load_file(path)?,
            None if Path::new(DEFAULT_CONFIG).exists() => load_file(Path::new(DEFAULT_CONFIG))?,
            None => FileConfig::default(),
        };

        let settings = Self {
            text: text
                .or(file.text)
                .unwrap_or_else(|| "Hello, world!".to_string()),
            spacing: cli.spacing.or(file.spacing).unwrap_or(1),
            width: cli.width.or(file.width).unwrap_or(32),
            height: cli.height.or(file.height).unwrap_or(8),
            frame: Duration::from_millis(cli.frame_ms.or(file.frame_ms).unwrap_or(70)),
        };

        if settings.width == 0 || settings.height == 0 {
            bail!("surface dimensions must be at least 1x1");
        }

        Ok(settings)
    }
}

fn load_file(path: &Path) -> Result<FileConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
