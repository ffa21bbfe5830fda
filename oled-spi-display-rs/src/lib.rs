//! Async driver for the SSD1306 (128×64) OLED over a write-only SPI bus.
//!
//! This crate provides [`Ssd1306`], an owned handle that talks to the
//! controller one byte at a time through any `embedded-hal-async`
//! [`SpiBus`](embedded_hal_async::spi::SpiBus), framing each byte with the
//! D/C pin. It holds no copy of display RAM; callers keep their own
//! [`FrameBuffer`] and push it with [`Ssd1306::draw()`].
//!
//! # Quick Start
//!
//! ```ignore
//! use oled_spi_display::{DisplayConfig, FrameBuffer, Ssd1306};
//!
//! let mut oled = Ssd1306::new(spi, dc, rst, delay, DisplayConfig::default());
//! oled.init().await?;
//!
//! oled.print(35, 3, "HELLO").await?;
//!
//! let mut frame = FrameBuffer::new();
//! frame.set_pixel(64, 32, true);
//! oled.draw(frame.as_raw()).await?;
//! ```
//!
//! # Architecture
//!
//! - **`interface`** (crate-private): per-byte command/data framing.
//! - **[`command`]**: controller command bytes and the init sequence.
//! - **[`frame`]**: caller frame layout and page repacking.
//! - **[`font`]**: fixed 5×5 glyph table.
//! - **[`Ssd1306`]**: lifecycle, drawing, text, runtime controls and
//!   bring-up diagnostics.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging and `defmt::Format` on error and
//!   config types.

#![no_std]

pub mod command;
pub mod config;
mod diagnostics;
pub mod display;
pub mod error;
pub mod font;
pub mod frame;
mod interface;

#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::DisplayConfig;
pub use diagnostics::FONT_TEST_LINES;
pub use display::Ssd1306;
pub use error::{DisplayError, DriverError};
pub use frame::{FrameBuffer, RawFrame};
