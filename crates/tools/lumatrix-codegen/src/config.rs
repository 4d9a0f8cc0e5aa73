//! Configuration types for the code generator.
//!
//! Deserialized from `codegen.toml` at the workspace root.

use serde::Deserialize;
use std::path::PathBuf;

/// Specification for a single font table to generate.
#[derive(Debug, Clone, Deserialize)]
pub struct FontSpec {
    /// Short name used for the generated constants (e.g. "ninepin_5x8").
    pub name: String,
    /// Path to the glyph sheet, relative to the workspace root.
    pub sheet: PathBuf,
    /// Output file path, relative to the workspace root.
    pub output: PathBuf,
}

/// Top-level codegen configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CodegenConfig {
    /// Font generation specifications.
    pub fonts: Vec<FontSpec>,
}
