//! Bus timing configuration.

/// Ratio of PCLK1 to the SPI clock.
///
/// The discriminant is the `BR[2:0]` field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prescaler {
    Div2 = 0b000,
    Div4 = 0b001,
    Div8 = 0b010,
    Div16 = 0b011,
    Div32 = 0b100,
    Div64 = 0b101,
    Div128 = 0b110,
    Div256 = 0b111,
}

impl Prescaler {
    /// `BR[2:0]` field value.
    pub const fn br_bits(self) -> u8 {
        self as u8
    }

    /// Divider applied to PCLK1.
    pub const fn divisor(self) -> u32 {
        2 << (self as u32)
    }
}

/// Bus timing configuration.
///
/// [`BusConfig::default()`] reproduces the stock bring-up values: PCLK1/4
/// and a ten-spin settle between bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// SPI clock divider. Default: [`Prescaler::Div4`].
    pub prescaler: Prescaler,
    /// Maximum status-register polls per wait before giving up.
    /// Default: 10 000.
    pub poll_limit: u32,
    /// Idle spins after each byte. Default: 10.
    pub settle_spins: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            prescaler: Prescaler::Div4,
            poll_limit: 10_000,
            settle_spins: 10,
        }
    }
}
