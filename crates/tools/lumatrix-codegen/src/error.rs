//! Error types for the code generator.

use std::fmt;
use std::io;

/// Errors that can occur during font table generation.
#[derive(Debug)]
pub enum CodegenError {
    /// I/O error reading a glyph sheet.
    SheetIo(io::Error),
    /// Malformed sheet content.
    Parse {
        /// 1-based line number in the sheet.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// Glyph dimensions unusable for single-byte row packing.
    BadDimensions {
        /// Declared glyph width.
        width: u32,
        /// Declared glyph height.
        height: u32,
    },
    /// The covered character range has a hole.
    MissingGlyph {
        /// Character code with no glyph block.
        code: u8,
    },
    /// The sheet defines no glyphs at all.
    EmptySheet,
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SheetIo(e) => write!(f, "sheet I/O error: {e}"),
            Self::Parse { line, message } => write!(f, "sheet line {line}: {message}"),
            Self::BadDimensions { width, height } => {
                write!(f, "unusable glyph dimensions {width}x{height} (width must be 1..=8)")
            }
            Self::MissingGlyph { code } => {
                write!(f, "no glyph for 0x{code:02X} inside the covered range")
            }
            Self::EmptySheet => write!(f, "sheet defines no glyphs"),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SheetIo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodegenError {
    fn from(e: io::Error) -> Self {
        Self::SheetIo(e)
    }
}
