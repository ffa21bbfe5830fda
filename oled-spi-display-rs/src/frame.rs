//! Row-major 1-bpp frame buffer and its repacking into controller pages.
//!
//! The caller-facing layout is 64 rows of 16 bytes. Pixel `(x, y)` is bit
//! `7 - (x % 8)` of `rows[y][x / 8]`, i.e. the most significant bit of each
//! byte is the leftmost pixel. The controller instead wants one byte per
//! column per page with bit 0 at the top. [`page_byte`] performs that
//! transform.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::command::{HEIGHT, ROW_BYTES, WIDTH};

/// A full frame in caller layout: 64 rows × 16 bytes.
pub type RawFrame = [[u8; ROW_BYTES]; HEIGHT];

/// Compose the display RAM byte for `column` (0–127) of `page` (0–7).
///
/// Output bit `i` is set when pixel `(column, 8 * page + i)` is set.
///
/// # Panics
///
/// If `page >= 8` or `column >= 128`.
pub fn page_byte(rows: &RawFrame, page: usize, column: usize) -> u8 {
    let row = page * 8;
    let mask = 1 << (7 - (column % 8));
    let mut data = 0;

    for i in 0..8 {
        if rows[row + i][column / 8] & mask != 0 {
            data |= 1 << i;
        }
    }

    data
}

// ── FrameBuffer ──────────────────────────────────────────────────────────

/// Owned frame with pixel accessors and an `embedded-graphics` draw target.
///
/// Pass [`FrameBuffer::as_raw()`] to [`Ssd1306::draw()`](crate::Ssd1306::draw).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: RawFrame,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// An all-off frame.
    pub const fn new() -> Self {
        Self {
            rows: [[0; ROW_BYTES]; HEIGHT],
        }
    }

    /// Wrap an existing frame.
    pub const fn from_raw(rows: RawFrame) -> Self {
        Self { rows }
    }

    pub fn as_raw(&self) -> &RawFrame {
        &self.rows
    }

    pub fn as_raw_mut(&mut self) -> &mut RawFrame {
        &mut self.rows
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Set every pixel to `on`.
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        for row in self.rows.iter_mut() {
            row.fill(byte);
        }
    }

    /// Set or clear one pixel. Coordinates outside 128×64 are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let mask = 1 << (7 - (x % 8));
        let byte = &mut self.rows[y][x / 8];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read one pixel. Coordinates outside 128×64 read as off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.rows[y][x / 8] & (1 << (7 - (x % 8))) != 0
    }

    /// Display RAM byte for `column` of `page`; see [`page_byte`].
    ///
    /// # Panics
    ///
    /// If `page >= 8` or `column >= 128`.
    pub fn page_byte(&self, page: usize, column: usize) -> u8 {
        page_byte(&self.rows, page, column)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
