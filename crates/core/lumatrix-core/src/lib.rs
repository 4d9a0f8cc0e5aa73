//! Core rendering library for Lumatrix, a fixed-width bitmap-font renderer
//! for small single-bit pixel matrices (LED panels, terminal simulations).
//!
//! The crate is split into three modules:
//! - [`font`] — immutable bitmap font tables and glyph lookup.
//! - [`surface`] — the [`PixelSink`] write-delegate trait and the in-memory
//!   [`Surface`] grid.
//! - [`render`] — glyph rasterization and clipped text layout, the actual
//!   pixel math.
//!
//! The core performs no I/O and no per-frame allocation; a render call is
//! plain CPU-bound pixel arithmetic that completes before returning.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod font;
pub mod render;
pub mod surface;

pub use font::{Font, FontError};
pub use render::{draw_glyph, draw_text};
pub use surface::{PixelSink, SinkInfo, Surface};
