//! Command/data dispatch over a write-only SPI bus.
//!
//! The SSD1306 samples the D/C pin with each byte: low means the byte is a
//! command (or command argument), high means it is written to display RAM.
//!
//! This module is crate-private; consumers interact with [`Ssd1306`]
//! in `display.rs` instead.
//!
//! [`Ssd1306`]: crate::Ssd1306

use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiBus;

use crate::error::{DisplayError, DriverError};

/// Low-level SPI + D/C interface.
///
/// Owns the SPI bus and the D/C pin. Every byte is sent as its own
/// transfer with the D/C level reasserted first, and the bus is flushed
/// before returning so the next D/C change cannot clip a byte still being
/// shifted out.
pub(crate) struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiBus,
    DC: OutputPin,
{
    /// Create a new interface.
    ///
    /// # Arguments
    /// * `spi`: SPI bus (takes ownership for exclusive access)
    /// * `dc`: data/command select pin
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Send one command byte (D/C low).
    pub async fn send_command(&mut self, command: u8) -> Result<(), DriverError<SPI, DC>> {
        self.dc.set_low().map_err(DisplayError::Pin)?;
        self.transmit(command).await
    }

    /// Send a run of command bytes, each framed individually.
    pub async fn send_commands(&mut self, commands: &[u8]) -> Result<(), DriverError<SPI, DC>> {
        for &command in commands {
            self.send_command(command).await?;
        }
        Ok(())
    }

    /// Send one data byte (D/C high).
    pub async fn send_data(&mut self, data: u8) -> Result<(), DriverError<SPI, DC>> {
        self.dc.set_high().map_err(DisplayError::Pin)?;
        self.transmit(data).await
    }

    /// Give back the bus and pin.
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    async fn transmit(&mut self, byte: u8) -> Result<(), DriverError<SPI, DC>> {
        self.spi.write(&[byte]).await.map_err(DisplayError::Spi)?;
        self.spi.flush().await.map_err(DisplayError::Spi)
    }
}
