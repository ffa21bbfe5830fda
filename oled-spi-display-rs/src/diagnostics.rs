//! Bring-up routines for checking wiring and bus speed by eye.
//!
//! Both are compositions of the regular frame and text paths; they add no
//! new controller commands.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiBus;

use crate::display::Ssd1306;
use crate::error::DriverError;

/// Sample lines shown by [`Ssd1306::font_test`]: `(x, page, text)`.
pub const FONT_TEST_LINES: [(u8, u8, &str); 3] = [
    (35, 3, "0123456789"),
    (25, 4, "ABCDEFGHIJKLM"),
    (25, 5, "NOPQRSTUVWXYZ"),
];

impl<SPI, DC, RST, D> Ssd1306<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Light the whole panel one column at a time.
    ///
    /// Sends `0xFF` to every column of every page, pausing
    /// [`fill_column_delay_ms`](crate::DisplayConfig::fill_column_delay_ms)
    /// after each, so the fill sweeps visibly across the screen.
    pub async fn fill_test(&mut self) -> Result<(), DriverError<SPI, DC>> {
        self.ensure_initialized()?;

        #[cfg(feature = "defmt")]
        defmt::info!("fill test");

        let delay = self.config().fill_column_delay_ms;
        self.stream_frame(|_, _| 0xFF, Some(delay)).await
    }

    /// Print every digit and letter, then hold for
    /// [`font_test_hold_ms`](crate::DisplayConfig::font_test_hold_ms).
    pub async fn font_test(&mut self) -> Result<(), DriverError<SPI, DC>> {
        #[cfg(feature = "defmt")]
        defmt::info!("font test");

        for (x, page, text) in FONT_TEST_LINES {
            self.print(x, page, text).await?;
        }

        let hold = self.config().font_test_hold_ms;
        self.pause_ms(hold).await;
        Ok(())
    }
}
