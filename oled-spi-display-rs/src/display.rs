//! High-level SSD1306 handle.
//!
//! [`Ssd1306`] owns the SPI bus, the D/C and reset pins and a delay source,
//! and manages the display lifecycle: construction without bus traffic,
//! explicit async initialisation, and full-frame or text output.
//!
//! There is no software copy of display RAM. Every [`clear`](Ssd1306::clear)
//! and [`draw`](Ssd1306::draw) retransmits all 1024 pixel bytes.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiBus;

use crate::command::{
    column_address, init_sequence, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, NORMAL_DISPLAY,
    PAGES, SET_CONTRAST, SET_PAGE_ADDR, WIDTH,
};
use crate::config::DisplayConfig;
use crate::error::{DisplayError, DriverError};
use crate::font::{glyph, GLYPH_ADVANCE};
use crate::frame::{page_byte, RawFrame};
use crate::interface::SpiInterface;

/// Async driver for an SSD1306 128×64 OLED on a write-only SPI bus.
///
/// # Lifecycle
///
/// 1. [`Ssd1306::new()`]: takes ownership of the hardware, no bus traffic.
/// 2. [`Ssd1306::init()`]: reset pulse, command sequence, blank frame.
/// 3. [`clear()`](Self::clear), [`draw()`](Self::draw),
///    [`print()`](Self::print) and the runtime controls.
/// 4. [`release()`](Self::release): hand the hardware back.
///
/// # Example
///
/// ```no_run
/// use oled_spi_display::{DisplayConfig, FrameBuffer, Ssd1306};
///
/// # async fn example(
/// #     spi: impl embedded_hal_async::spi::SpiBus,
/// #     dc: impl embedded_hal::digital::OutputPin<Error = core::convert::Infallible>,
/// #     rst: impl embedded_hal::digital::OutputPin,
/// #     delay: impl embedded_hal_async::delay::DelayNs,
/// # ) {
/// let mut oled = Ssd1306::new(spi, dc, rst, delay, DisplayConfig::default());
/// oled.init().await.unwrap();
///
/// let mut frame = FrameBuffer::new();
/// frame.set_pixel(10, 10, true);
/// oled.draw(frame.as_raw()).await.unwrap();
///
/// oled.print(0, 7, "READY").await.unwrap();
/// # }
/// ```
pub struct Ssd1306<SPI, DC, RST, D> {
    interface: SpiInterface<SPI, DC>,
    rst: RST,
    delay: D,
    config: DisplayConfig,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
    contrast: u8,
    display_on: bool,
    inverted: bool,
}

impl<SPI, DC, RST, D> Ssd1306<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Construct an uninitialised driver.
    ///
    /// No bus traffic is generated and no pin is touched. You **must** call
    /// [`init()`](Self::init) before any display operations.
    ///
    /// # Arguments
    /// * `spi`: SPI bus, already configured for transmit (takes ownership).
    /// * `dc`: data/command select pin (low = command).
    /// * `rst`: reset pin (active low).
    /// * `delay`: delay source for the reset pulse and diagnostics.
    /// * `config`: contrast and timings.
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: D, config: DisplayConfig) -> Self {
        Self {
            interface: SpiInterface::new(spi, dc),
            rst,
            delay,
            contrast: config.contrast,
            config,
            initialized: false,
            display_on: false,
            inverted: false,
        }
    }

    /// Reset and initialise the controller, then blank the panel.
    ///
    /// Pulses RST low, sends the full initialisation sequence (see
    /// [`init_sequence`](crate::command::init_sequence)) one command at a
    /// time, and finishes with [`clear()`](Self::clear). Calling it again
    /// repeats exactly the same traffic.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Reset`] if RST cannot be driven,
    /// [`DisplayError::Pin`] if D/C cannot be driven, or
    /// [`DisplayError::Spi`] on a bus failure. The driver is left
    /// uninitialised on error, including a failure during the final clear.
    ///
    /// No bus call is made before the reset pulse completes, so a bus that
    /// enables its peripheral on first use comes up after reset.
    pub async fn init(&mut self) -> Result<(), DriverError<SPI, DC>> {
        self.initialized = false;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 reset");

        self.hardware_reset().await?;
        self.interface
            .send_commands(&init_sequence(self.config.contrast))
            .await?;
        self.stream_frame(|_, _| 0x00, None).await?;

        self.initialized = true;
        self.contrast = self.config.contrast;
        self.display_on = true;
        self.inverted = false;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 initialised");

        Ok(())
    }

    /// Write zero to every column of every page.
    ///
    /// Sends 8 × (3 address commands + 128 data bytes) = 1048 bytes.
    pub async fn clear(&mut self) -> Result<(), DriverError<SPI, DC>> {
        self.ensure_initialized()?;
        self.stream_frame(|_, _| 0x00, None).await
    }

    /// Transfer a full frame to display RAM.
    ///
    /// `frame` is in row-major caller layout (see [`crate::frame`]); each
    /// 8-row band is repacked into one page on the fly.
    pub async fn draw(&mut self, frame: &RawFrame) -> Result<(), DriverError<SPI, DC>> {
        self.ensure_initialized()?;
        self.stream_frame(|page, column| page_byte(frame, page, column), None)
            .await
    }

    /// Print `text` on `page` starting at column `x`.
    ///
    /// Each character occupies a 5-column glyph plus one spacing column.
    /// Printing stops at the end of `text` or at the first `'\0'`.
    /// Characters without a glyph print blank but still advance. Columns
    /// past 127 are not checked: the column address wraps at 256 and the
    /// controller handles anything beyond the panel.
    ///
    /// # Errors
    /// * [`DisplayError::InvalidPage`] if `page >= 8` (nothing is sent)
    /// * [`DisplayError::NotInitialized`] before [`init()`](Self::init)
    pub async fn print(&mut self, x: u8, page: u8, text: &str) -> Result<(), DriverError<SPI, DC>> {
        self.ensure_initialized()?;
        if page as usize >= PAGES {
            #[cfg(feature = "defmt")]
            defmt::warn!("print rejected: page {} out of range", page);
            return Err(DisplayError::InvalidPage);
        }

        self.interface.send_command(SET_PAGE_ADDR | page).await?;

        for (i, c) in text.chars().take_while(|&c| c != '\0').enumerate() {
            let column = (x as usize + i * GLYPH_ADVANCE) as u8;
            self.interface.send_commands(&column_address(column)).await?;

            for &byte in glyph(c) {
                self.interface.send_data(byte).await?;
            }
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Runtime controls
    // -----------------------------------------------------------------------

    /// Change panel contrast (0x00–0xFF).
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), DriverError<SPI, DC>> {
        self.ensure_initialized()?;
        self.interface.send_commands(&[SET_CONTRAST, contrast]).await?;
        self.contrast = contrast;
        Ok(())
    }

    /// Switch the panel on or put it to sleep. Display RAM is retained.
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), DriverError<SPI, DC>> {
        self.ensure_initialized()?;
        let command = if on { DISPLAY_ON } else { DISPLAY_OFF };
        self.interface.send_command(command).await?;
        self.display_on = on;
        Ok(())
    }

    /// Invert pixel polarity without touching display RAM.
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), DriverError<SPI, DC>> {
        self.ensure_initialized()?;
        let command = if inverted { INVERT_DISPLAY } else { NORMAL_DISPLAY };
        self.interface.send_command(command).await?;
        self.inverted = inverted;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // State
    // -----------------------------------------------------------------------

    /// Check whether the display has been successfully initialised.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Last contrast sent to the controller.
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Give back the bus, pins and delay.
    pub fn release(self) -> (SPI, DC, RST, D) {
        let (spi, dc) = self.interface.release();
        (spi, dc, self.rst, self.delay)
    }

    // -----------------------------------------------------------------------
    // Internals shared with diagnostics
    // -----------------------------------------------------------------------

    /// Walk every page and column, sending `byte(page, column)` as data.
    ///
    /// Each page is preceded by a page select and a column reset to 0. With
    /// `column_delay_ms` set, the driver pauses after every column.
    pub(crate) async fn stream_frame<F>(
        &mut self,
        byte: F,
        column_delay_ms: Option<u32>,
    ) -> Result<(), DriverError<SPI, DC>>
    where
        F: Fn(usize, usize) -> u8,
    {
        for page in 0..PAGES {
            self.interface
                .send_command(SET_PAGE_ADDR | page as u8)
                .await?;
            self.interface.send_commands(&column_address(0)).await?;

            for column in 0..WIDTH {
                self.interface.send_data(byte(page, column)).await?;
                if let Some(ms) = column_delay_ms {
                    self.delay.delay_ms(ms).await;
                }
            }
        }

        Ok(())
    }

    pub(crate) async fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }

    pub(crate) fn ensure_initialized(&self) -> Result<(), DriverError<SPI, DC>> {
        if self.initialized {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 used before init");
            Err(DisplayError::NotInitialized)
        }
    }

    async fn hardware_reset(&mut self) -> Result<(), DriverError<SPI, DC>> {
        self.rst.set_low().map_err(|_| DisplayError::Reset)?;
        self.delay.delay_ms(self.config.reset_low_ms).await;
        self.rst.set_high().map_err(|_| DisplayError::Reset)?;
        self.delay.delay_ms(self.config.reset_settle_ms).await;
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
