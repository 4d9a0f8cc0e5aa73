//! End-to-end clipping behavior of `draw_text` against a recording sink.
//!
//! The recorder deliberately skips bounds checking so a broken clip window
//! shows up as an assertion failure here instead of a panic inside the
//! sink.

use lumatrix_core::{draw_text, Font, PixelSink, SinkInfo, Surface};

// Three 3x4 glyphs covering 'A'..='C', top row first, bit 0 = leftmost.
static TABLE: [u8; 12] = [
    0b010, 0b101, 0b111, 0b101, // 'A'
    0b011, 0b011, 0b001, 0b111, // 'B'
    0b110, 0b001, 0b001, 0b110, // 'C'
];

fn test_font() -> Font {
    Font::new(3, 4, b'A', b'C', &TABLE).unwrap()
}

struct Recorder {
    info: SinkInfo,
    writes: Vec<(u32, u32, bool)>,
}

impl Recorder {
    fn new(width: u32, height: u32) -> Self {
        Self {
            info: SinkInfo { width, height },
            writes: Vec::new(),
        }
    }

    fn lit(&self) -> Vec<(u32, u32)> {
        let mut pixels: Vec<(u32, u32)> = self
            .writes
            .iter()
            .filter(|&&(_, _, on)| on)
            .map(|&(x, y, _)| (x, y))
            .collect();
        pixels.sort_unstable();
        pixels
    }
}

impl PixelSink for Recorder {
    fn info(&self) -> SinkInfo {
        self.info
    }

    fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        self.writes.push((x, y, on));
    }
}

/// Renders `text` on a fresh recorder and returns the lit pixel set.
fn render(width: u32, height: u32, spacing: u32, text: &str, x: i32, y: i32) -> Vec<(u32, u32)> {
    let font = test_font();
    let mut sink = Recorder::new(width, height);
    draw_text(&mut sink, &font, spacing, text, x, y);
    sink.lit()
}

#[test]
fn rejects_boxes_fully_outside_each_edge() {
    let font = test_font();
    // "AB" with spacing 1: advance 4, total width 8, height 4.
    for (x, y) in [(-8, 0), (10, 0), (0, -4), (0, 6)] {
        let mut sink = Recorder::new(10, 6);
        assert!(!draw_text(&mut sink, &font, 1, "AB", x, y), "({x}, {y})");
        assert!(sink.writes.is_empty(), "({x}, {y}) wrote pixels");
    }
}

#[test]
fn one_pixel_inside_each_edge_is_accepted() {
    let font = test_font();
    for (x, y) in [(-7, 0), (9, 0), (0, -3), (0, 5)] {
        let mut sink = Recorder::new(10, 6);
        assert!(draw_text(&mut sink, &font, 1, "AB", x, y), "({x}, {y})");
    }
}

#[test]
fn every_write_is_in_bounds_and_lit() {
    let font = test_font();
    for spacing in 0..3 {
        for x in -15..=15 {
            for y in -10..=10 {
                let mut sink = Recorder::new(10, 6);
                draw_text(&mut sink, &font, spacing, "ABC", x, y);
                for &(px, py, on) in &sink.writes {
                    assert!(px < 10 && py < 6, "({x}, {y}) s={spacing} wrote ({px}, {py})");
                    assert!(on, "({x}, {y}) s={spacing} wrote an unlit pixel");
                }
            }
        }
    }
}

#[test]
fn single_character_never_gets_spacing() {
    assert_eq!(
        render(10, 6, 0, "A", 3, 1),
        render(10, 6, 9, "A", 3, 1)
    );

    // The bounding box is spacing-free too: a single glyph 3 columns off
    // the left edge is gone no matter the requested spacing.
    let font = test_font();
    let mut sink = Recorder::new(10, 6);
    assert!(!draw_text(&mut sink, &font, 50, "A", -3, 0));
}

#[test]
fn unknown_characters_occupy_their_advance_blank() {
    // 'Z' is outside the font range: full advance, zero pixels.
    let mut expected = render(20, 6, 1, "A", 0, 0);
    expected.extend(render(20, 6, 1, "B", 8, 0));
    expected.sort_unstable();

    assert_eq!(render(20, 6, 1, "AZB", 0, 0), expected);
}

#[test]
fn box_intersection_counts_even_when_nothing_lights() {
    let font = test_font();
    let mut sink = Recorder::new(10, 6);
    assert!(draw_text(&mut sink, &font, 0, "ZZ", 1, 1));
    assert!(sink.writes.is_empty());
}

#[test]
fn empty_text_follows_the_box_arithmetic() {
    let font = test_font();

    // Zero-width box: rejected at x <= 0, accepted (with no writes) inside.
    let mut sink = Recorder::new(10, 6);
    assert!(!draw_text(&mut sink, &font, 0, "", 0, 0));

    let mut sink = Recorder::new(10, 6);
    assert!(draw_text(&mut sink, &font, 0, "", 1, 0));
    assert!(sink.writes.is_empty());
}

#[test]
fn redraw_after_clear_is_identical() {
    let font = test_font();
    let mut surface = Surface::new(10, 6);

    let snapshot = |surface: &Surface| -> Vec<bool> {
        let mut cells = Vec::new();
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                cells.push(surface.pixel(x, y));
            }
        }
        cells
    };

    draw_text(&mut surface, &font, 1, "AB", -2, -1);
    let first = snapshot(&surface);
    assert!(first.iter().any(|&p| p));

    surface.clear();
    draw_text(&mut surface, &font, 1, "AB", -2, -1);
    assert_eq!(snapshot(&surface), first);
}

#[test]
fn left_straddle_matches_restricted_unclipped_render() {
    // Reference render fully on-surface at x = 0.
    let reference = render(20, 6, 1, "AB", 0, 0);

    for shift in 1..8u32 {
        let expected: Vec<(u32, u32)> = reference
            .iter()
            .filter(|&&(x, _)| x >= shift)
            .map(|&(x, y)| (x - shift, y))
            .collect();

        let clipped = render(20, 6, 1, "AB", -(shift as i32), 0);
        assert_eq!(clipped, expected, "shift {shift}");
    }
}

#[test]
fn bottom_straddle_matches_restricted_unclipped_render() {
    let reference = render(20, 6, 1, "AB", 0, 0);

    for shift in 1..4u32 {
        let expected: Vec<(u32, u32)> = reference
            .iter()
            .filter(|&&(_, y)| y >= shift)
            .map(|&(x, y)| (x, y - shift))
            .collect();

        let clipped = render(20, 6, 1, "AB", 0, -(shift as i32));
        assert_eq!(clipped, expected, "shift {shift}");
    }
}

#[test]
fn top_edge_clips_glyph_rows() {
    // Height 2 surface, origin y = 1: only the bottom glyph row fits.
    let lit = render(10, 2, 0, "A", 0, 1);
    assert_eq!(lit, vec![(0, 1), (2, 1)]);
}

#[test]
fn right_edge_clips_columns_and_later_glyphs() {
    let font = test_font();
    let mut sink = Recorder::new(10, 6);
    // 'A' at x = 8 keeps two columns; 'B' starts past the edge entirely.
    assert!(draw_text(&mut sink, &font, 1, "AB", 8, 0));

    assert_eq!(
        sink.lit(),
        vec![(8, 0), (8, 1), (8, 2), (9, 1), (9, 3)]
    );
}
