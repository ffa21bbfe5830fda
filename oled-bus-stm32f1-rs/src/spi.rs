//! SPI2 as a transmit-only, single-line bus master.
//!
//! [`Spi2`] owns the SPI2 peripheral and its pins and implements
//! `embedded-hal-async`'s [`SpiBus`] for writes. The peripheral itself is
//! brought up on the first bus call, so a driver that pulses the display
//! reset before talking to it gets GPIO, then reset, then SPI.
//!
//! Completion is detected by polling the status register, bounded by
//! [`BusConfig::poll_limit`], so a wedged peripheral surfaces as
//! [`BusError::Timeout`] rather than hanging the caller. Every `write`
//! finishes synchronously; the futures never return `Pending`.

use embassy_stm32::pac;
use embassy_stm32::pac::spi::vals::{Bidimode, Bidioe, Br, Mstr};
use embassy_stm32::peripherals::{PB12, PB13, PB15, SPI2};
use embassy_stm32::Peri;
use embedded_hal_async::spi::{ErrorType, SpiBus};

use crate::config::BusConfig;
use crate::error::BusError;
use crate::gpio::set_alternate_push_pull;
use crate::pins::{MOSI_PIN, NSS_PIN, SCK_PIN};
use crate::poll::poll_until;

/// Spins after enabling the SPI2 clock before touching its registers.
const CLOCK_ENABLE_SPINS: u32 = 10;

/// Transmit-only SPI2 master with hardware NSS.
pub struct Spi2<'d> {
    _spi: Peri<'d, SPI2>,
    _nss: Peri<'d, PB12>,
    _sck: Peri<'d, PB13>,
    _mosi: Peri<'d, PB15>,
    config: BusConfig,
    enabled: bool,
}

impl<'d> Spi2<'d> {
    /// Claim SPI2 and its pins, and switch NSS, SCK and MOSI to the
    /// peripheral. The SPI block stays off until [`enable()`](Self::enable)
    /// or the first bus call.
    ///
    /// # Arguments
    /// * `spi`: the SPI2 peripheral
    /// * `nss`, `sck`, `mosi`: PB12, PB13, PB15
    /// * `config`: clock divider and polling bounds
    pub fn new(
        spi: Peri<'d, SPI2>,
        nss: Peri<'d, PB12>,
        sck: Peri<'d, PB13>,
        mosi: Peri<'d, PB15>,
        config: BusConfig,
    ) -> Self {
        for pin in [NSS_PIN, SCK_PIN, MOSI_PIN] {
            set_alternate_push_pull(pac::GPIOB, pin);
        }

        Self {
            _spi: spi,
            _nss: nss,
            _sck: sck,
            _mosi: mosi,
            config,
            enabled: false,
        }
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable the SPI2 clock and configure the peripheral as a one-line,
    /// transmit-only master. Does nothing if already enabled.
    ///
    /// Fields are written one at a time, in the order the reference manual
    /// lists them: baud rate, NSS output, bidirectional mode, output
    /// direction, master, enable.
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }

        pac::RCC.apb1enr().modify(|w| w.set_spi2en(true));
        spin(CLOCK_ENABLE_SPINS);

        let regs = pac::SPI2;
        regs.cr1()
            .modify(|w| w.set_br(Br::from_bits(self.config.prescaler.br_bits())));
        regs.cr2().modify(|w| w.set_ssoe(true));
        regs.cr1().modify(|w| w.set_bidimode(Bidimode::BIDIRECTIONAL));
        // Output enabled: transmit-only on the single line.
        regs.cr1().modify(|w| w.set_bidioe(Bidioe::from_bits(1)));
        regs.cr1().modify(|w| w.set_mstr(Mstr::MASTER));
        regs.cr1().modify(|w| w.set_spe(true));

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "SPI2 up: CR1={:#x} CR2={:#x}",
            regs.cr1().read().0,
            regs.cr2().read().0
        );

        self.enabled = true;
    }

    /// Write one byte to the data register, wait for the transmit buffer to
    /// drain, then settle.
    ///
    /// # Errors
    /// [`BusError::Timeout`] if `TXE` is not set within the poll limit.
    pub fn transmit_byte(&mut self, byte: u8) -> Result<(), BusError> {
        self.enable();

        let regs = pac::SPI2;
        regs.dr().write(|w| w.set_dr(byte as u16));
        self.wait("TXE", || regs.sr().read().txe())?;
        spin(self.config.settle_spins);
        Ok(())
    }

    /// Wait until the last frame has left the shift register.
    ///
    /// # Errors
    /// [`BusError::Timeout`] if `BSY` does not clear within the poll limit.
    pub fn wait_idle(&mut self) -> Result<(), BusError> {
        self.enable();

        let regs = pac::SPI2;
        self.wait("BSY clear", || !regs.sr().read().bsy())
    }

    #[allow(unused_variables)]
    fn wait(&self, what: &str, ready: impl FnMut() -> bool) -> Result<(), BusError> {
        poll_until(self.config.poll_limit, ready).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "SPI2 timeout waiting for {}, SR={:#x}",
                what,
                pac::SPI2.sr().read().0
            );
            e
        })
    }
}

impl ErrorType for Spi2<'_> {
    type Error = BusError;
}

impl SpiBus for Spi2<'_> {
    async fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(BusError::TransmitOnly)
    }

    async fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for &byte in words {
            self.transmit_byte(byte)?;
        }
        Ok(())
    }

    async fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        Err(BusError::TransmitOnly)
    }

    async fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(BusError::TransmitOnly)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.wait_idle()
    }
}

fn spin(count: u32) {
    for _ in 0..count {
        core::hint::spin_loop();
    }
}
