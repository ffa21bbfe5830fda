//! Display pin map.
//!
//! | Signal   | Pin  | Mode                       |
//! |----------|------|----------------------------|
//! | NSS (CS) | PB12 | alternate push-pull        |
//! | SCK      | PB13 | alternate push-pull        |
//! | RST      | PB14 | general-purpose push-pull  |
//! | MOSI     | PB15 | alternate push-pull        |
//! | D/C (A0) | PA8  | general-purpose push-pull  |

/// D/C select on port A.
pub const DC_PIN: u8 = 8;
/// SPI2 NSS on port B.
pub const NSS_PIN: u8 = 12;
/// SPI2 SCK on port B.
pub const SCK_PIN: u8 = 13;
/// Display reset on port B.
pub const RST_PIN: u8 = 14;
/// SPI2 MOSI on port B.
pub const MOSI_PIN: u8 = 15;

/// `MODE[1:0]`: output, max speed 50 MHz.
pub const MODE_OUTPUT_50MHZ: u8 = 0b11;
/// `CNF[1:0]` in output mode: alternate-function push-pull.
pub const CNF_ALT_PUSH_PULL: u8 = 0b10;

/// Locate `pin` (0–15) in the port configuration registers: the `CR`
/// index (0 = CRL, 1 = CRH) and the field index within it.
pub const fn cr_slot(pin: u8) -> (usize, usize) {
    ((pin / 8) as usize, (pin % 8) as usize)
}
