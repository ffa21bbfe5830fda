//! SPI2 bus and pin setup for an SSD1306 on an STM32F103.
//!
//! This crate brings up just enough of the microcontroller to talk to the
//! display: the D/C and reset outputs, and SPI2 as a transmit-only master
//! with hardware chip select. The result plugs straight into
//! `oled-spi-display`:
//!
//! - `Spi2` implements `embedded_hal_async::spi::SpiBus`.
//! - `DisplayPins` holds `embassy_stm32` outputs, which implement
//!   `embedded_hal::digital::OutputPin`.
//!
//! Register access goes through `embassy_stm32::pac`; peripheral ownership
//! comes from the `Peri` tokens returned by `embassy_stm32::init`.
//!
//! # Architecture
//!
//! - **[`config`]**: clock divider and polling bounds.
//! - **[`poll`]**: bounded status-flag waits.
//! - **[`pins`]**: the display pin map and `CR` field layout.
//! - **`gpio`** (chip feature): output pins and alternate-function setup.
//! - **`spi`** (chip feature): SPI2 configuration and transmitter.
//!
//! # Quick start
//!
//! ```ignore
//! use oled_bus_stm32f1::{BusConfig, DisplayPins, Spi2};
//!
//! let p = embassy_stm32::init(Default::default());
//! let pins = DisplayPins::new(p.PA8, p.PB14);
//! let spi = Spi2::new(p.SPI2, p.PB12, p.PB13, p.PB15, BusConfig::default());
//! ```
//!
//! # Features
//!
//! - **`stm32f103c8`**: build the chip-specific `gpio` and `spi` modules
//!   against `embassy-stm32`. Without it only the chip-independent modules
//!   build, which is how the host tests run.
//! - **`defmt`**: register dumps at bring-up, timeout warnings, and
//!   `defmt::Format` on public types.

#![no_std]

pub mod config;
pub mod error;
pub mod pins;
pub mod poll;

#[cfg(feature = "stm32f103c8")]
pub mod gpio;
#[cfg(feature = "stm32f103c8")]
pub mod spi;

pub use config::{BusConfig, Prescaler};
pub use error::BusError;
pub use poll::poll_until;

#[cfg(feature = "stm32f103c8")]
pub use gpio::DisplayPins;
#[cfg(feature = "stm32f103c8")]
pub use spi::Spi2;
