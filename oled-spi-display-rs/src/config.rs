//! Driver configuration.

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the controller and diagnostic routines.
///
/// [`DisplayConfig::default()`] reproduces the stock bring-up values for a
/// 128×64 panel on the internal charge pump. Only `contrast` reaches the
/// controller; the rest are host-side timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Contrast sent during init. Default: 0xCF.
    pub contrast: u8,

    // ── Reset timing ─────────────────────────────────────────────────
    /// How long RST is held low. Default: 5 ms.
    pub reset_low_ms: u32,
    /// Wait after releasing RST before the first command. Default: 1 ms.
    pub reset_settle_ms: u32,

    // ── Diagnostics ──────────────────────────────────────────────────
    /// Pause after each column in [`fill_test`](crate::Ssd1306::fill_test).
    /// Default: 50 ms, slow enough to watch the bus fill the panel.
    pub fill_column_delay_ms: u32,
    /// How long [`font_test`](crate::Ssd1306::font_test) leaves its sample
    /// text up. Default: 5000 ms.
    pub font_test_hold_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            contrast: 0xCF,
            reset_low_ms: 5,
            reset_settle_ms: 1,
            fill_column_delay_ms: 50,
            font_test_hold_ms: 5000,
        }
    }
}
