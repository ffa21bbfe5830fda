//! Error types for the SPI2 bus.

use core::fmt;

use embedded_hal::spi::{Error, ErrorKind};

/// Errors that can occur when transmitting on SPI2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// A status flag did not reach the expected state within
    /// [`BusConfig::poll_limit`](crate::BusConfig::poll_limit) polls.
    Timeout,

    /// A receive was requested on the transmit-only bus.
    TransmitOnly,
}

impl Error for BusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BusError::Timeout => write!(f, "SPI2 status poll timed out"),
            BusError::TransmitOnly => write!(f, "SPI2 is configured transmit-only"),
        }
    }
}
