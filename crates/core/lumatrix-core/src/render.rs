//! Glyph rasterization and clipped text layout.
//!
//! [`draw_text`] walks a string, computes each glyph's horizontal placement
//! and the visible clip window, and hands the per-glyph work to
//! [`draw_glyph`]. The clipping math guarantees that every sink write lands
//! inside the surface, so partially off-screen glyphs are painted only from
//! their visible sub-rectangle onward rather than painted whole and
//! discarded afterward.

use crate::font::Font;
use crate::surface::PixelSink;

/// Rasterizes one glyph through a pre-clipped window.
///
/// `row_offset` counts glyph rows from the bottom (0 = bottom row) and
/// selects the first row to paint; `row_count` rows are painted from there
/// upward. `col_offset` selects the first glyph column; columns run from it
/// to `char_width`, with `col_offset >= char_width` painting nothing (the
/// clip boundary can fall in an inter-glyph gap). `dst_x`/`dst_y` are the
/// surface coordinates of the first painted pixel.
///
/// Characters without a glyph in `font` render as a blank cell; that is
/// the documented policy for unknown characters, not an error. Columns at
/// or past the sink's right edge are skipped without a write. Only set
/// bits invoke the sink.
///
/// The caller must ensure `row_offset + row_count <= char_height` and that
/// `dst_y + row_count` rows fit the surface; [`draw_text`] derives both
/// from its clip window.
pub fn draw_glyph(
    sink: &mut dyn PixelSink,
    font: &Font,
    ch: char,
    dst_x: u32,
    dst_y: u32,
    row_offset: u32,
    row_count: u32,
    col_offset: u32,
) {
    debug_assert!(row_offset + row_count <= font.char_height());

    // Unknown characters occupy their cell but paint nothing.
    let Some(glyph) = font.glyph(ch) else { return };

    let width = sink.info().width;

    for dy in 0..row_count {
        // Rows count from the bottom; the table stores the top row first.
        let row = font.char_height() - 1 - (row_offset + dy);
        let bits = glyph[row as usize];

        let mut sx = dst_x;
        for col in col_offset..font.char_width() {
            if sx >= width {
                break;
            }
            if bits & (1 << col) != 0 {
                sink.set_pixel(sx, dst_y + dy, true);
            }
            sx += 1;
        }
    }
}

/// Draws `text` with its bottom-left corner at `(x, y)`, clipping to the
/// sink's bounds.
///
/// `y` grows upward and `x` grows rightward; the origin may be negative or
/// beyond the surface, which is how callers scroll text by sliding the
/// origin across frames. `spacing` adds extra blank columns between glyphs
/// and is ignored for texts of fewer than two characters.
///
/// Returns `true` iff the text's bounding box intersects the surface at
/// all — callers use this as a coarse "did it touch" signal (e.g. for
/// scroll wrap-around), independent of whether any glyph lit a pixel.
/// Content edge cases (empty text, unknown characters, fully or partially
/// off-screen boxes) degrade to drawing nothing; nothing here fails.
pub fn draw_text(
    sink: &mut dyn PixelSink,
    font: &Font,
    spacing: u32,
    text: &str,
    x: i32,
    y: i32,
) -> bool {
    let info = sink.info();
    let width = info.width as i32;
    let height = info.height as i32;

    let char_w = font.char_width() as i32;
    let char_h = font.char_height() as i32;
    let chars = text.chars().count() as i32;

    // Spacing only exists between glyphs.
    let spacing = if chars > 1 { spacing as i32 } else { 0 };
    let advance = char_w + spacing;
    let text_w = chars * advance;

    // Reject text boxes that miss the surface entirely.
    if x + text_w <= 0 || x >= width {
        return false;
    }
    if y + char_h <= 0 || y >= height {
        return false;
    }

    // Clamp the origin to the surface; the clipped-off amounts become the
    // per-glyph row and column windows.
    let beg_x = x.max(0);
    let beg_y = y.max(0);
    let text_x_off = beg_x - x;
    let text_y_off = beg_y - y;

    // Rows visible for every glyph, clipped again by the top edge.
    let row_count = (beg_y + (char_h - text_y_off)).min(height) - beg_y;

    // Glyphs wholly left of the clip edge are never rasterized; the one
    // straddling it starts mid-column. The offset is consumed by the first
    // surviving glyph only.
    let first = (text_x_off / advance) as usize;
    let mut col_off = text_x_off % advance;

    let mut pen_x = beg_x;
    for ch in text.chars().skip(first) {
        if pen_x >= width {
            break;
        }

        draw_glyph(
            sink,
            font,
            ch,
            pen_x as u32,
            beg_y as u32,
            text_y_off as u32,
            row_count as u32,
            col_off as u32,
        );

        pen_x += advance - col_off;
        col_off = 0;
    }

    true
}
