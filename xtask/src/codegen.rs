//! The `cargo xtask codegen` command.
//!
//! Regenerates every font table module declared in `codegen.toml`, writing
//! the output files in place so the diff shows exactly what a sheet edit
//! changed.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lumatrix_codegen::config::CodegenConfig;
use lumatrix_codegen::font;

/// Regenerates all configured font tables under `workspace_root`.
pub fn run(workspace_root: &Path) -> Result<()> {
    let config = load_config(workspace_root)?;

    for spec in &config.fonts {
        let source = font::generate(spec, workspace_root)
            .with_context(|| format!("failed to generate font `{}`", spec.name))?;

        let output = workspace_root.join(&spec.output);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&output, source)
            .with_context(|| format!("failed to write {}", output.display()))?;

        println!("regenerated {}", spec.output.display());
    }

    Ok(())
}

fn load_config(workspace_root: &Path) -> Result<CodegenConfig> {
    let path = workspace_root.join("codegen.toml");
    let text =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).context("failed to parse codegen.toml")
}
