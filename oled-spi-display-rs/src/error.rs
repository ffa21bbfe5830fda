//! Error types for the OLED display driver.

use core::fmt;

/// [`DisplayError`] specialised to the error types of an SPI bus and a
/// GPIO pin implementation.
pub type DriverError<SPI, PIN> = DisplayError<
    <SPI as embedded_hal_async::spi::ErrorType>::Error,
    <PIN as embedded_hal::digital::ErrorType>::Error,
>;

/// Errors that can occur during OLED display operations.
///
/// Generic over the SPI bus error and the GPIO pin error so that the
/// caller's HAL error types are preserved unchanged.
#[derive(Debug)]
pub enum DisplayError<SpiE, PinE> {
    /// Underlying SPI bus error (including transmit timeouts).
    Spi(SpiE),
    /// D/C pin could not be driven.
    Pin(PinE),
    /// Reset pin could not be driven. The reset pin may come from a
    /// different HAL than D/C, so its error is not carried.
    Reset,
    /// An operation was attempted before [`Ssd1306::init()`](crate::Ssd1306::init)
    /// was called.
    NotInitialized,
    /// Page index out of valid range (must be 0–7).
    InvalidPage,
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for DisplayError<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisplayError::Spi(e) => write!(f, "SPI error: {:?}", e),
            DisplayError::Pin(e) => write!(f, "Pin error: {:?}", e),
            DisplayError::Reset => write!(f, "Reset pin could not be driven"),
            DisplayError::NotInitialized => write!(f, "Display not initialized"),
            DisplayError::InvalidPage => write!(f, "Invalid page index (must be 0-7)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<SpiE: defmt::Format, PinE: defmt::Format> defmt::Format for DisplayError<SpiE, PinE> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DisplayError::Spi(e) => defmt::write!(f, "SPI error: {}", e),
            DisplayError::Pin(e) => defmt::write!(f, "Pin error: {}", e),
            DisplayError::Reset => defmt::write!(f, "Reset pin error"),
            DisplayError::NotInitialized => defmt::write!(f, "Not initialized"),
            DisplayError::InvalidPage => defmt::write!(f, "Invalid page index"),
        }
    }
}
