//! oled-hw-interface
//!
//! Bring-up firmware for an SSD1306 128×64 OLED wired to SPI2 of an
//! STM32F103 ("blue pill"). Claims the peripherals from `embassy_stm32`,
//! configures the pins and SPI2, initialises the display, then cycles
//! through the diagnostics:
//!
//! 1. Font test: every digit and letter, held for five seconds.
//! 2. Fill test: the panel lights column by column.
//! 3. Frame test: a border and diagonal drawn from a frame buffer.
//!
//! # Wiring
//!
//! | Signal   | STM32 Pin | Notes                      |
//! |----------|-----------|----------------------------|
//! | CS       | PB12      | SPI2 NSS, hardware driven  |
//! | SCK      | PB13      |                            |
//! | SDA      | PB15      | SPI2 MOSI                  |
//! | RST      | PB14      | active low                 |
//! | A0 (D/C) | PA8       | low = command              |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use oled_bus_stm32f1::{BusConfig, DisplayPins, Spi2};
use oled_spi_display::{DisplayConfig, FrameBuffer, Ssd1306};

/// How long the frame test stays on screen.
const FRAME_HOLD_MS: u64 = 3000;

/// Border around the panel plus a shallow diagonal.
fn test_frame() -> FrameBuffer {
    let mut frame = FrameBuffer::new();
    for x in 0..128 {
        frame.set_pixel(x, 0, true);
        frame.set_pixel(x, 63, true);
    }
    for y in 0..64 {
        frame.set_pixel(0, y, true);
        frame.set_pixel(127, y, true);
    }
    // Diagonal across the panel to show the page/column mapping.
    for x in 0..128 {
        frame.set_pixel(x, x / 2, true);
    }
    frame
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Default clocks: 8 MHz HSI, PCLK1 = 8 MHz, so SPI2 runs at 2 MHz.
    let p = embassy_stm32::init(Default::default());
    info!("oled-hw-interface starting");

    // -- Pins and bus ------------------------------------------------------------
    // SPI2 itself is enabled on the first byte, after the reset pulse.
    let pins = DisplayPins::new(p.PA8, p.PB14);
    let spi = Spi2::new(p.SPI2, p.PB12, p.PB13, p.PB15, BusConfig::default());

    let mut oled = Ssd1306::new(spi, pins.dc, pins.rst, Delay, DisplayConfig::default());

    // -- Display -----------------------------------------------------------------
    if let Err(e) = oled.init().await {
        error!("OLED init failed: {}", e);
        return;
    }
    info!("OLED initialised");

    let frame = test_frame();

    loop {
        if let Err(e) = oled.font_test().await {
            error!("Font test failed: {}", e);
        }
        if let Err(e) = oled.fill_test().await {
            error!("Fill test failed: {}", e);
        }
        if let Err(e) = oled.draw(frame.as_raw()).await {
            error!("Frame test failed: {}", e);
        }
        Timer::after_millis(FRAME_HOLD_MS).await;

        if let Err(e) = oled.clear().await {
            warn!("Clear failed: {}", e);
        }
    }
}
