//! Application-wide constants and compile-time configuration.
//!
//! All timing thresholds, display geometry, and feedback parameters
//! live here so they can be tuned in one place. The device has no
//! runtime configuration and persists nothing.

// Keying

/// Press duration separating a dot from a dash (ms). A press must be
/// strictly longer than this to count as a dash. The same span of
/// silence after a release ends the character.
pub const DASH_THRESHOLD_MS: u64 = 300;

/// Word gap expressed in dash thresholds (4 × 300 ms = 1.2 s).
pub const WORD_GAP_FACTOR: u64 = 4;

/// Secondary debounce applied after every accepted key edge (ms).
pub const DEBOUNCE_MS: u64 = 30;

// Idle / power

/// Silence after the last release before the backlight dims and the
/// display is cleared (ms).
pub const DIM_AFTER_MS: u64 = 10_000;

/// Silence after the last release before the backlight switches off
/// and the timing reference is dropped (ms).
pub const POWER_OFF_AFTER_MS: u64 = 20_000;

/// Backlight level while the device is in use.
pub const WAKE_BRIGHTNESS: f32 = 0.7;

/// Backlight level after `DIM_AFTER_MS` of inactivity.
pub const DIM_BRIGHTNESS: f32 = 0.2;

/// Number of equal steps in a backlight fade.
pub const FADE_STEPS: u32 = 10;

/// Pause between fade steps (ms). 10 × 60 ms = 0.6 s per fade.
pub const FADE_STEP_MS: u32 = 60;

// Polling cadence (must stay at or below 50 ms)

/// Poll interval while the key is held (ms).
pub const KEYING_POLL_MS: u64 = 5;

/// Poll interval in every gap / idle state (ms).
pub const IDLE_POLL_MS: u64 = 20;

// Sidetone

/// Buzzer frequency (Hz), C5.
pub const TONE_FREQUENCY_HZ: u32 = 523;

// Display geometry (1602-style two-row character panel)

pub const DISPLAY_ROWS: u8 = 2;
pub const DISPLAY_COLS: u8 = 16;

/// Columns per row used by the scrolling text area. The remaining
/// columns on row 0 hold the keystroke feedback cell.
pub const SCROLL_COLS: u8 = 13;

/// Cell reserved for echoing the most recent dot or dash.
pub const FEEDBACK_ROW: u8 = 0;
pub const FEEDBACK_COL: u8 = 15;

/// Printed in place of a sequence that has no character.
pub const ILLEGAL_MARKER: char = '?';

// Startup self-test

/// Word announced on the buzzer and display at boot.
pub const SELF_TEST_WORD: &str = "MORSE";

/// Scroll position the self-test word starts at.
pub const SELF_TEST_START: usize = 5;

/// Caption shown under the self-test word.
pub const SELF_TEST_CAPTION: &str = "(c) 2022 PG";
pub const SELF_TEST_CAPTION_ROW: u8 = 1;
pub const SELF_TEST_CAPTION_COL: u8 = 2;

/// Playback unit for the self-test (ms). A dot lasts one unit, a dash three.
pub const SELF_TEST_DOT_MS: u32 = 50;

/// How long the splash stays visible before the interactive loop (ms).
pub const SELF_TEST_HOLD_MS: u32 = 1000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*`
// pins are selected in `main.rs`. Adjust for your own board.
//
//   Internal push button  → P0.11 (active-low, pull-up)
//   Morse key contact     → P0.16 (active-high, pull-down)
//   Display backlight PWM → P0.17
//   Buzzer PWM            → P0.22
//   I²C SDA               → P0.26
//   I²C SCL               → P0.27

/// Session timing thresholds.
///
/// `Default` takes every value from the constants above; tests build
/// their own when they need a different shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub dash_threshold_ms: u64,
    pub word_gap_ms: u64,
    pub dim_after_ms: u64,
    pub power_off_after_ms: u64,
    pub debounce_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            dash_threshold_ms: DASH_THRESHOLD_MS,
            word_gap_ms: WORD_GAP_FACTOR * DASH_THRESHOLD_MS,
            dim_after_ms: DIM_AFTER_MS,
            power_off_after_ms: POWER_OFF_AFTER_MS,
            debounce_ms: DEBOUNCE_MS,
        }
    }
}

/// Total duration of one backlight fade (ms).
pub const fn fade_duration_ms() -> u64 {
    FADE_STEPS as u64 * FADE_STEP_MS as u64
}
