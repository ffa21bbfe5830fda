//! Fixed 5×5 bitmap font.
//!
//! Each glyph is five column bytes, left to right. Bit 0 is the top row and
//! bit 4 the bottom; bits 5–7 are always clear, so a glyph printed on a page
//! occupies its top five rows. Only digits, Latin letters (either case) and
//! the two arrows `<` `>` have shapes. Everything else is blank but still
//! takes up a cell.

/// Glyph width in columns.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in rows.
pub const GLYPH_HEIGHT: usize = 5;

/// Horizontal distance between the start of consecutive glyphs (one blank
/// spacing column).
pub const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

/// A single glyph: five column bytes.
pub type Glyph = [u8; GLYPH_WIDTH];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x11, 0x11, 0x0E], // 0
    [0x00, 0x01, 0x1F, 0x00, 0x00], // 1
    [0x12, 0x19, 0x15, 0x12, 0x00], // 2
    [0x11, 0x15, 0x15, 0x15, 0x1F], // 3
    [0x07, 0x04, 0x04, 0x04, 0x1F], // 4
    [0x16, 0x15, 0x15, 0x15, 0x1D], // 5
    [0x1F, 0x15, 0x15, 0x15, 0x1D], // 6
    [0x11, 0x09, 0x05, 0x03, 0x00], // 7
    [0x1B, 0x15, 0x15, 0x1B, 0x00], // 8
    [0x17, 0x15, 0x15, 0x1F, 0x00], // 9
];

const LETTERS: [Glyph; 26] = [
    [0x1F, 0x05, 0x05, 0x05, 0x1F], // A
    [0x1F, 0x15, 0x15, 0x15, 0x0E], // B
    [0x1F, 0x11, 0x11, 0x11, 0x11], // C
    [0x1F, 0x11, 0x11, 0x11, 0x0E], // D
    [0x1F, 0x15, 0x15, 0x15, 0x11], // E
    [0x1F, 0x05, 0x05, 0x05, 0x01], // F
    [0x1F, 0x11, 0x15, 0x15, 0x1D], // G
    [0x1F, 0x04, 0x04, 0x04, 0x1F], // H
    [0x11, 0x11, 0x1F, 0x11, 0x11], // I
    [0x19, 0x11, 0x1F, 0x01, 0x00], // J
    [0x1F, 0x04, 0x0A, 0x11, 0x00], // K
    [0x1F, 0x10, 0x10, 0x10, 0x00], // L
    [0x1F, 0x02, 0x04, 0x02, 0x1F], // M
    [0x1F, 0x02, 0x04, 0x08, 0x1F], // N
    [0x1F, 0x11, 0x11, 0x11, 0x1F], // O
    [0x1F, 0x05, 0x05, 0x05, 0x07], // P
    [0x1F, 0x11, 0x11, 0x19, 0x1F], // Q
    [0x1F, 0x05, 0x05, 0x0D, 0x17], // R
    [0x17, 0x15, 0x15, 0x15, 0x1D], // S
    [0x01, 0x01, 0x1F, 0x01, 0x01], // T
    [0x1F, 0x10, 0x10, 0x10, 0x1F], // U
    [0x03, 0x0C, 0x10, 0x0C, 0x03], // V
    [0x1F, 0x10, 0x08, 0x10, 0x1F], // W
    [0x11, 0x0A, 0x04, 0x0A, 0x11], // X
    [0x01, 0x02, 0x1C, 0x02, 0x01], // Y
    [0x11, 0x19, 0x15, 0x13, 0x11], // Z
];

const LEFT_ARROW: Glyph = [0x00, 0x00, 0x04, 0x0E, 0x1F];
const RIGHT_ARROW: Glyph = [0x1F, 0x0E, 0x04, 0x00, 0x00];
const BLANK: Glyph = [0x00; GLYPH_WIDTH];

/// Look up the glyph for `c`.
///
/// Letters are case-insensitive. Unmapped characters return an all-zero
/// glyph.
pub fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        '<' => &LEFT_ARROW,
        '>' => &RIGHT_ARROW,
        d @ '0'..='9' => &DIGITS[d as usize - '0' as usize],
        l @ 'A'..='Z' => &LETTERS[l as usize - 'A' as usize],
        _ => &BLANK,
    }
}

/// Pixel width of `len` glyphs printed back to back, without the trailing
/// spacing column.
pub const fn text_width(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        len * GLYPH_ADVANCE - 1
    }
}
