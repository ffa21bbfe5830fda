//! Pin setup for the display.
//!
//! D/C and RST are plain push-pull outputs and use the HAL's [`Output`].
//! The SPI2 pins are handed to the peripheral by writing their `CR` fields
//! directly, since the bus runs in a mode the HAL SPI driver does not
//! offer (one-line bidirectional with hardware NSS).

use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::pac;
use embassy_stm32::pac::gpio::vals::{CnfOut, Mode};
use embassy_stm32::peripherals::{PA8, PB14};
use embassy_stm32::Peri;

use crate::pins::{cr_slot, CNF_ALT_PUSH_PULL, MODE_OUTPUT_50MHZ};

/// The two software-driven display lines.
pub struct DisplayPins<'d> {
    /// Data/command select (low = command).
    pub dc: Output<'d>,
    /// Controller reset (active low).
    pub rst: Output<'d>,
}

impl<'d> DisplayPins<'d> {
    /// Configure PA8 and PB14 as 50 MHz push-pull outputs.
    ///
    /// RST starts high so the controller is not held in reset before the
    /// driver pulses it.
    pub fn new(dc: Peri<'d, PA8>, rst: Peri<'d, PB14>) -> Self {
        Self {
            dc: Output::new(dc, Level::Low, Speed::VeryHigh),
            rst: Output::new(rst, Level::High, Speed::VeryHigh),
        }
    }
}

/// Put `pin` of `port` into alternate-function push-pull at 50 MHz,
/// leaving the other pins of the port untouched.
pub(crate) fn set_alternate_push_pull(port: pac::gpio::Gpio, pin: u8) {
    let (cr, field) = cr_slot(pin);
    port.cr(cr).modify(|w| {
        w.set_mode(field, Mode::from_bits(MODE_OUTPUT_50MHZ));
        w.set_cnf_out(field, CnfOut::from_bits(CNF_ALT_PUSH_PULL));
    });

    #[cfg(feature = "defmt")]
    defmt::trace!("pin {} -> AF push-pull, CR{}={:#x}", pin, cr, port.cr(cr).read().0);
}
