//! Glyph sheet parsing.
//!
//! A sheet is a plain-text bitmap font description: a `width`/`height`
//! header followed by one block per glyph. Each block is a `glyph '<c>'`
//! line (a `0xNN` code is accepted for characters that are awkward to
//! quote) and `height` art rows of `width` cells, `#` for lit and `.` for
//! unlit, top row first. `//` comments and blank lines are ignored.

use std::collections::BTreeMap;

use crate::error::CodegenError;

/// A parsed, validated glyph sheet covering one contiguous character range.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Glyph width in pixel columns (1..=8).
    pub width: u32,
    /// Glyph height in pixel rows.
    pub height: u32,
    /// First covered character.
    pub start_char: u8,
    /// Last covered character (inclusive).
    pub end_char: u8,
    /// Row bytes per glyph in character order, top row first within each
    /// glyph, bit 0 = leftmost column.
    pub glyphs: Vec<Vec<u8>>,
}

/// Parses a sheet, checking dimensions and range contiguity.
///
/// # Errors
///
/// Returns a [`CodegenError`] describing the first problem found, with a
/// line number for syntax errors.
pub fn parse(text: &str) -> Result<Sheet, CodegenError> {
    let mut width: Option<u32> = None;
    let mut height: Option<u32> = None;
    let mut blocks: BTreeMap<u8, Vec<u8>> = BTreeMap::new();

    let mut lines = text.lines().enumerate();
    while let Some((idx, raw)) = lines.next() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let lineno = idx + 1;

        if let Some(rest) = line.strip_prefix("width ") {
            set_dimension(&mut width, rest, "width", lineno)?;
        } else if let Some(rest) = line.strip_prefix("height ") {
            set_dimension(&mut height, rest, "height", lineno)?;
        } else if let Some(rest) = line.strip_prefix("glyph ") {
            let (Some(w), Some(h)) = (width, height) else {
                return Err(CodegenError::Parse {
                    line: lineno,
                    message: "glyph block before width/height header".into(),
                });
            };
            if w < 1 || w > 8 || h < 1 {
                return Err(CodegenError::BadDimensions { width: w, height: h });
            }

            let code = parse_label(rest.trim(), lineno)?;
            if blocks.contains_key(&code) {
                return Err(CodegenError::Parse {
                    line: lineno,
                    message: format!("duplicate glyph 0x{code:02X}"),
                });
            }

            let mut rows = Vec::with_capacity(h as usize);
            while rows.len() < h as usize {
                let Some((art_idx, art_raw)) = lines.next() else {
                    return Err(CodegenError::Parse {
                        line: lineno,
                        message: format!("glyph 0x{code:02X} is missing art rows"),
                    });
                };
                let art = art_raw.trim();
                if art.is_empty() || art.starts_with("//") {
                    continue;
                }
                rows.push(parse_row(art, w, art_idx + 1)?);
            }
            blocks.insert(code, rows);
        } else {
            return Err(CodegenError::Parse {
                line: lineno,
                message: format!("unrecognized directive: {line}"),
            });
        }
    }

    let (Some(width), Some(height)) = (width, height) else {
        return Err(CodegenError::EmptySheet);
    };
    let Some((&start_char, _)) = blocks.first_key_value() else {
        return Err(CodegenError::EmptySheet);
    };
    let end_char = blocks.keys().next_back().copied().unwrap_or(start_char);

    // Fonts cover a contiguous range; a hole would shift every later glyph.
    let mut glyphs = Vec::with_capacity((end_char - start_char) as usize + 1);
    for code in start_char..=end_char {
        match blocks.remove(&code) {
            Some(rows) => glyphs.push(rows),
            None => return Err(CodegenError::MissingGlyph { code }),
        }
    }

    Ok(Sheet {
        width,
        height,
        start_char,
        end_char,
        glyphs,
    })
}

fn set_dimension(
    slot: &mut Option<u32>,
    value: &str,
    what: &str,
    lineno: usize,
) -> Result<(), CodegenError> {
    let parsed = value.trim().parse::<u32>().map_err(|_| CodegenError::Parse {
        line: lineno,
        message: format!("invalid {what} value: {value}"),
    })?;
    if slot.replace(parsed).is_some() {
        return Err(CodegenError::Parse {
            line: lineno,
            message: format!("duplicate {what} directive"),
        });
    }
    Ok(())
}

fn parse_label(label: &str, lineno: usize) -> Result<u8, CodegenError> {
    if let Some(hex) = label.strip_prefix("0x") {
        return u8::from_str_radix(hex, 16).map_err(|_| CodegenError::Parse {
            line: lineno,
            message: format!("invalid glyph code: {label}"),
        });
    }

    let bytes = label.as_bytes();
    if bytes.len() == 3 && bytes[0] == b'\'' && bytes[2] == b'\'' && bytes[1].is_ascii_graphic() {
        return Ok(bytes[1]);
    }

    Err(CodegenError::Parse {
        line: lineno,
        message: format!("invalid glyph label: {label}"),
    })
}

fn parse_row(art: &str, width: u32, lineno: usize) -> Result<u8, CodegenError> {
    if art.len() != width as usize {
        return Err(CodegenError::Parse {
            line: lineno,
            message: format!("art row has {} cells, expected {width}", art.len()),
        });
    }

    let mut bits = 0u8;
    for (col, cell) in art.bytes().enumerate() {
        match cell {
            b'#' => bits |= 1 << col,
            b'.' => {}
            other => {
                return Err(CodegenError::Parse {
                    line: lineno,
                    message: format!("unexpected cell character: {:?}", other as char),
                });
            }
        }
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
// two glyphs
width 3
height 2

glyph 'A'
.#.
#.#

glyph 'B'
##.
.##
";

    #[test]
    fn parses_a_small_sheet() {
        let sheet = parse(SMALL).unwrap();
        assert_eq!(sheet.width, 3);
        assert_eq!(sheet.height, 2);
        assert_eq!(sheet.start_char, b'A');
        assert_eq!(sheet.end_char, b'B');
        // Bit 0 is the leftmost column.
        assert_eq!(sheet.glyphs, vec![vec![0b010, 0b101], vec![0b011, 0b110]]);
    }

    #[test]
    fn accepts_hex_labels_and_interleaved_comments() {
        let sheet = parse("width 1\nheight 2\nglyph 0x41\n#\n// middle\n.\n").unwrap();
        assert_eq!(sheet.start_char, b'A');
        assert_eq!(sheet.glyphs, vec![vec![1, 0]]);
    }

    #[test]
    fn rejects_range_holes() {
        let text = "width 1\nheight 1\nglyph 'A'\n#\nglyph 'C'\n#\n";
        assert!(matches!(
            parse(text),
            Err(CodegenError::MissingGlyph { code: b'B' })
        ));
    }

    #[test]
    fn rejects_wrong_row_width_with_line_number() {
        let text = "width 3\nheight 2\nglyph 'A'\n.#.\n#.\n";
        match parse(text) {
            Err(CodegenError::Parse { line, .. }) => assert_eq!(line, 5),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_glyph_before_header() {
        assert!(matches!(
            parse("glyph 'A'\n#\n"),
            Err(CodegenError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_unpackable_width() {
        let text = "width 9\nheight 1\nglyph 'A'\n#########\n";
        assert!(matches!(
            parse(text),
            Err(CodegenError::BadDimensions { width: 9, height: 1 })
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse(""), Err(CodegenError::EmptySheet)));
        assert!(matches!(
            parse("width 3\nheight 2\n"),
            Err(CodegenError::EmptySheet)
        ));
    }
}
