//! Bitmap font table `ninepin_5x8` (5x8, 0x21..=0x7E).
//!
//! Generated by `cargo xtask codegen` from
//! `crates/font/lumatrix-fonts/sheets/ninepin_5x8.sheet`.
//! Edit the sheet and regenerate instead of editing this file.

use lumatrix_core::Font;

/// Glyph width in pixel columns.
pub const WIDTH: u32 = 5;
/// Glyph height in pixel rows.
pub const HEIGHT: u32 = 8;
/// First covered character.
pub const START_CHAR: u8 = 0x21;
/// Last covered character (inclusive).
pub const END_CHAR: u8 = 0x7E;

/// The `ninepin_5x8` font.
pub static NINEPIN_5X8: Font = Font::from_static(WIDTH, HEIGHT, START_CHAR, END_CHAR, &DATA);

/// Glyph rows, top row first, bit 0 = leftmost column.
static DATA: [u8; 752] = [
    // '!' (0x21)
    0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100, 0b00000,
    // '"' (0x22)
    0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000,
    // '#' (0x23)
    0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010, 0b00000,
    // '$' (0x24)
    0b00100, 0b11110, 0b00101, 0b01110, 0b10100, 0b01111, 0b00100, 0b00000,
    // '%' (0x25)
    0b00011, 0b10011, 0b01000, 0b00100, 0b00010, 0b11001, 0b11000, 0b00000,
    // '&' (0x26)
    0b00110, 0b01001, 0b00101, 0b00010, 0b10101, 0b01001, 0b10110, 0b00000,
    // 0x27
    0b00100, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000,
    // '(' (0x28)
    0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000, 0b00000,
    // ')' (0x29)
    0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010, 0b00000,
    // '*' (0x2A)
    0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000, 0b00000,
    // '+' (0x2B)
    0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000, 0b00000,
    // ',' (0x2C)
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00100, 0b00010,
    // '-' (0x2D)
    0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000,
    // '.' (0x2E)
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00110, 0b00000,
    // '/' (0x2F)
    0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000, 0b00000,
    // '0' (0x30)
    0b01110, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b01110, 0b00000,
    // '1' (0x31)
    0b00100, 0b00110, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, 0b00000,
    // '2' (0x32)
    0b01110, 0b10001, 0b10000, 0b01000, 0b00100, 0b00010, 0b11111, 0b00000,
    // '3' (0x33)
    0b11111, 0b01000, 0b00100, 0b01000, 0b10000, 0b10001, 0b01110, 0b00000,
    // '4' (0x34)
    0b01000, 0b01100, 0b01010, 0b01001, 0b11111, 0b01000, 0b01000, 0b00000,
    // '5' (0x35)
    0b11111, 0b00001, 0b01111, 0b10000, 0b10000, 0b10001, 0b01110, 0b00000,
    // '6' (0x36)
    0b01100, 0b00010, 0b00001, 0b01111, 0b10001, 0b10001, 0b01110, 0b00000,
    // '7' (0x37)
    0b11111, 0b10000, 0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00000,
    // '8' (0x38)
    0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110, 0b00000,
    // '9' (0x39)
    0b01110, 0b10001, 0b10001, 0b11110, 0b10000, 0b01000, 0b00110, 0b00000,
    // ':' (0x3A)
    0b00000, 0b00110, 0b00110, 0b00000, 0b00110, 0b00110, 0b00000, 0b00000,
    // ';' (0x3B)
    0b00000, 0b00110, 0b00110, 0b00000, 0b00110, 0b00100, 0b00010, 0b00000,
    // '<' (0x3C)
    0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000, 0b00000,
    // '=' (0x3D)
    0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000,
    // '>' (0x3E)
    0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00000,
    // '?' (0x3F)
    0b01110, 0b10001, 0b10000, 0b01000, 0b00100, 0b00000, 0b00100, 0b00000,
    // '@' (0x40)
    0b01110, 0b10001, 0b10000, 0b10110, 0b10101, 0b10101, 0b01110, 0b00000,
    // 'A' (0x41)
    0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b00000,
    // 'B' (0x42)
    0b01111, 0b10001, 0b10001, 0b01111, 0b10001, 0b10001, 0b01111, 0b00000,
    // 'C' (0x43)
    0b01110, 0b10001, 0b00001, 0b00001, 0b00001, 0b10001, 0b01110, 0b00000,
    // 'D' (0x44)
    0b00111, 0b01001, 0b10001, 0b10001, 0b10001, 0b01001, 0b00111, 0b00000,
    // 'E' (0x45)
    0b11111, 0b00001, 0b00001, 0b01111, 0b00001, 0b00001, 0b11111, 0b00000,
    // 'F' (0x46)
    0b11111, 0b00001, 0b00001, 0b01111, 0b00001, 0b00001, 0b00001, 0b00000,
    // 'G' (0x47)
    0b01110, 0b10001, 0b00001, 0b11101, 0b10001, 0b10001, 0b11110, 0b00000,
    // 'H' (0x48)
    0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b00000,
    // 'I' (0x49)
    0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, 0b00000,
    // 'J' (0x4A)
    0b11100, 0b01000, 0b01000, 0b01000, 0b01000, 0b01001, 0b00110, 0b00000,
    // 'K' (0x4B)
    0b10001, 0b01001, 0b00101, 0b00011, 0b00101, 0b01001, 0b10001, 0b00000,
    // 'L' (0x4C)
    0b00001, 0b00001, 0b00001, 0b00001, 0b00001, 0b00001, 0b11111, 0b00000,
    // 'M' (0x4D)
    0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001, 0b00000,
    // 'N' (0x4E)
    0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b10001, 0b10001, 0b00000,
    // 'O' (0x4F)
    0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110, 0b00000,
    // 'P' (0x50)
    0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b00001, 0b00000,
    // 'Q' (0x51)
    0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b01001, 0b10110, 0b00000,
    // 'R' (0x52)
    0b01111, 0b10001, 0b10001, 0b01111, 0b00101, 0b01001, 0b10001, 0b00000,
    // 'S' (0x53)
    0b11110, 0b00001, 0b00001, 0b01110, 0b10000, 0b10000, 0b01111, 0b00000,
    // 'T' (0x54)
    0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000,
    // 'U' (0x55)
    0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110, 0b00000,
    // 'V' (0x56)
    0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00000,
    // 'W' (0x57)
    0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001, 0b00000,
    // 'X' (0x58)
    0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001, 0b00000,
    // 'Y' (0x59)
    0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000,
    // 'Z' (0x5A)
    0b11111, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b11111, 0b00000,
    // '[' (0x5B)
    0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110, 0b00000,
    // 0x5C
    0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000,
    // ']' (0x5D)
    0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110, 0b00000,
    // '^' (0x5E)
    0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000,
    // '_' (0x5F)
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111,
    // '`' (0x60)
    0b00010, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000,
    // 'a' (0x61)
    0b00000, 0b00000, 0b01110, 0b10000, 0b11110, 0b10001, 0b11110, 0b00000,
    // 'b' (0x62)
    0b00001, 0b00001, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111, 0b00000,
    // 'c' (0x63)
    0b00000, 0b00000, 0b01110, 0b00001, 0b00001, 0b10001, 0b01110, 0b00000,
    // 'd' (0x64)
    0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110, 0b00000,
    // 'e' (0x65)
    0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b00001, 0b01110, 0b00000,
    // 'f' (0x66)
    0b01100, 0b10010, 0b00010, 0b00111, 0b00010, 0b00010, 0b00010, 0b00000,
    // 'g' (0x67)
    0b00000, 0b00000, 0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b01110,
    // 'h' (0x68)
    0b00001, 0b00001, 0b01111, 0b10001, 0b10001, 0b10001, 0b10001, 0b00000,
    // 'i' (0x69)
    0b00100, 0b00000, 0b00110, 0b00100, 0b00100, 0b00100, 0b01110, 0b00000,
    // 'j' (0x6A)
    0b01000, 0b00000, 0b01100, 0b01000, 0b01000, 0b01000, 0b01001, 0b00110,
    // 'k' (0x6B)
    0b00001, 0b00001, 0b01001, 0b00101, 0b00011, 0b00101, 0b01001, 0b00000,
    // 'l' (0x6C)
    0b00110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, 0b00000,
    // 'm' (0x6D)
    0b00000, 0b00000, 0b01011, 0b10101, 0b10101, 0b10101, 0b10101, 0b00000,
    // 'n' (0x6E)
    0b00000, 0b00000, 0b01111, 0b10001, 0b10001, 0b10001, 0b10001, 0b00000,
    // 'o' (0x6F)
    0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110, 0b00000,
    // 'p' (0x70)
    0b00000, 0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001,
    // 'q' (0x71)
    0b00000, 0b00000, 0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000,
    // 'r' (0x72)
    0b00000, 0b00000, 0b01101, 0b10011, 0b00001, 0b00001, 0b00001, 0b00000,
    // 's' (0x73)
    0b00000, 0b00000, 0b11110, 0b00001, 0b01110, 0b10000, 0b01111, 0b00000,
    // 't' (0x74)
    0b00010, 0b00010, 0b00111, 0b00010, 0b00010, 0b10010, 0b01100, 0b00000,
    // 'u' (0x75)
    0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b11001, 0b10110, 0b00000,
    // 'v' (0x76)
    0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00000,
    // 'w' (0x77)
    0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010, 0b00000,
    // 'x' (0x78)
    0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b00000,
    // 'y' (0x79)
    0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b11110, 0b10000, 0b01110,
    // 'z' (0x7A)
    0b00000, 0b00000, 0b11111, 0b01000, 0b00100, 0b00010, 0b11111, 0b00000,
    // '{' (0x7B)
    0b11000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b11000, 0b00000,
    // '|' (0x7C)
    0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000,
    // '}' (0x7D)
    0b00011, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00011, 0b00000,
    // '~' (0x7E)
    0b00000, 0b00000, 0b00010, 0b10101, 0b01000, 0b00000, 0b00000, 0b00000,
];
