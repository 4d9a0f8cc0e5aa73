//! Build-time font table generator for Lumatrix.
//!
//! Turns plain-text glyph sheets into `no_std`-compatible Rust table
//! modules that are checked into the repository. Invoke via
//! `cargo xtask codegen`, which reads `codegen.toml` at the workspace root
//! and writes the generated files to the configured paths.

pub mod config;
pub mod error;
pub mod font;
pub mod sheet;
