//! Concrete rendering scenarios on a 32x8 surface with the shipped font.

use lumatrix_core::{draw_text, Surface};
use lumatrix_fonts::NINEPIN_5X8;

// Art mirror of the 'A' glyph, top row first, for readable expectations.
const GLYPH_A: [&str; 8] = [
    ".###.",
    "#...#",
    "#...#",
    "#####",
    "#...#",
    "#...#",
    "#...#",
    ".....",
];

/// True iff glyph column `col`, glyph row `row` (0 = bottom) of 'A' is lit.
fn a_lit(col: u32, row: u32) -> bool {
    GLYPH_A[7 - row as usize].as_bytes()[col as usize] == b'#'
}

#[test]
fn single_glyph_at_origin_paints_exactly_its_bitmap() {
    let mut surface = Surface::new(32, 8);
    assert!(draw_text(&mut surface, &NINEPIN_5X8, 0, "A", 0, 0));

    for y in 0..8 {
        for x in 0..32 {
            let expected = x < 5 && a_lit(x, y);
            assert_eq!(surface.pixel(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn right_edge_keeps_leading_columns_and_drops_later_glyphs() {
    // 'A' at x = 30 keeps its two leftmost columns; 'B' lands past the
    // edge and contributes nothing.
    let mut surface = Surface::new(32, 8);
    assert!(draw_text(&mut surface, &NINEPIN_5X8, 1, "AB", 30, 0));

    for y in 0..8 {
        for x in 0..32 {
            let expected = x >= 30 && a_lit(x - 30, y);
            assert_eq!(surface.pixel(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn left_edge_skips_hidden_columns() {
    // Origin x = -3: glyph columns 0..=2 are off-screen, columns 3..=4
    // land at x = 0..=1.
    let mut surface = Surface::new(32, 8);
    assert!(draw_text(&mut surface, &NINEPIN_5X8, 0, "A", -3, 0));

    for y in 0..8 {
        for x in 0..32 {
            let expected = x < 2 && a_lit(x + 3, y);
            assert_eq!(surface.pixel(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn spaces_leave_blank_cells_between_words() {
    let mut with_space = Surface::new(32, 8);
    draw_text(&mut with_space, &NINEPIN_5X8, 0, "A A", 0, 0);

    let mut left = Surface::new(32, 8);
    draw_text(&mut left, &NINEPIN_5X8, 0, "A", 0, 0);
    let mut right = Surface::new(32, 8);
    draw_text(&mut right, &NINEPIN_5X8, 0, "A", 10, 0);

    for y in 0..8 {
        for x in 0..32 {
            assert_eq!(
                with_space.pixel(x, y),
                left.pixel(x, y) || right.pixel(x, y),
                "({x}, {y})"
            );
        }
    }
}

#[test]
fn marquee_sweep_stays_in_bounds() {
    // Slide a long text across the surface the way the scroll demo does;
    // the surface's own bounds assertions make any clipping error fatal.
    let text = "Hello, world!";
    let chars = text.chars().count() as i32;
    let total = chars * (5 + 1);

    let mut surface = Surface::new(32, 8);
    for x in (-total - 2..=33).rev() {
        surface.clear();
        let visible = draw_text(&mut surface, &NINEPIN_5X8, 1, text, x, 0);
        assert_eq!(visible, x > -total && x < 32, "x = {x}");
    }
}
