//! Font table module generation.
//!
//! Emits a self-contained Rust module per font: range constants, a
//! `static` [`Font`] built via `Font::from_static` (so the table invariants
//! are checked at compile time), and the raw row data with one comment per
//! glyph. Generated files are checked into the repository; the
//! freshness test in `tests/` catches a sheet edited without regeneration.

use std::fs;
use std::path::Path;

use crate::config::FontSpec;
use crate::error::CodegenError;
use crate::sheet::{self, Sheet};

/// Generates the Rust source for `spec`, reading its glyph sheet relative
/// to `workspace_root`.
///
/// # Errors
///
/// Returns a [`CodegenError`] if the sheet cannot be read or parsed.
pub fn generate(spec: &FontSpec, workspace_root: &Path) -> Result<String, CodegenError> {
    let text = fs::read_to_string(workspace_root.join(&spec.sheet))?;
    let parsed = sheet::parse(&text)?;
    Ok(emit(spec, &parsed))
}

fn emit(spec: &FontSpec, sheet: &Sheet) -> String {
    let name = &spec.name;
    let upper = name.to_ascii_uppercase();
    let (width, height) = (sheet.width, sheet.height);
    let (start, end) = (sheet.start_char, sheet.end_char);
    let count = sheet.glyphs.len() * height as usize;

    let mut out = String::new();
    out.push_str(&format!(
        "//! Bitmap font table `{name}` ({width}x{height}, 0x{start:02X}..=0x{end:02X}).\n"
    ));
    out.push_str("//!\n");
    out.push_str("//! Generated by `cargo xtask codegen` from\n");
    out.push_str(&format!("//! `{}`.\n", spec.sheet.display()));
    out.push_str("//! Edit the sheet and regenerate instead of editing this file.\n");
    out.push('\n');
    out.push_str("use lumatrix_core::Font;\n");
    out.push('\n');
    out.push_str("/// Glyph width in pixel columns.\n");
    out.push_str(&format!("pub const WIDTH: u32 = {width};\n"));
    out.push_str("/// Glyph height in pixel rows.\n");
    out.push_str(&format!("pub const HEIGHT: u32 = {height};\n"));
    out.push_str("/// First covered character.\n");
    out.push_str(&format!("pub const START_CHAR: u8 = 0x{start:02X};\n"));
    out.push_str("/// Last covered character (inclusive).\n");
    out.push_str(&format!("pub const END_CHAR: u8 = 0x{end:02X};\n"));
    out.push('\n');
    out.push_str(&format!("/// The `{name}` font.\n"));
    out.push_str(&format!(
        "pub static {upper}: Font = Font::from_static(WIDTH, HEIGHT, START_CHAR, END_CHAR, &DATA);\n"
    ));
    out.push('\n');
    out.push_str("/// Glyph rows, top row first, bit 0 = leftmost column.\n");
    out.push_str(&format!("static DATA: [u8; {count}] = [\n"));

    let digits = width as usize + 2; // "0b" prefix plus one digit per column
    for (i, rows) in sheet.glyphs.iter().enumerate() {
        let code = start + i as u8;
        // Characters that would need escaping inside the comment get the
        // bare code instead.
        if code == b'\'' || code == b'\\' {
            out.push_str(&format!("    // 0x{code:02X}\n"));
        } else {
            out.push_str(&format!("    // '{}' (0x{code:02X})\n", code as char));
        }

        for chunk in rows.chunks(8) {
            let cells: Vec<String> = chunk
                .iter()
                .map(|&row| format!("{row:#0digits$b}"))
                .collect();
            out.push_str(&format!("    {},\n", cells.join(", ")));
        }
    }

    out.push_str("];\n");
    out
}
