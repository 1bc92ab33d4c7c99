//! Backlight brightness control.
//!
//! Fades are linear, `FADE_STEPS` equal steps `FADE_STEP_MS` apart, and
//! block the caller for their whole duration. Only one fade can run at
//! a time; key input is not sampled while it does.
//!
//! Levels used by the session:
//! - Wake: `WAKE_BRIGHTNESS`, restored on every key press
//! - Dim: `DIM_BRIGHTNESS`, after `DIM_AFTER_MS` of silence
//! - Off: 0.0, after `POWER_OFF_AFTER_MS` of silence

use embedded_hal::delay::DelayNs;

use crate::config::{fade_duration_ms, FADE_STEPS, FADE_STEP_MS};
use crate::error::Error;
use crate::power_logic::{clamp_level, fade_levels};

/// Backlight output accepting a normalised level in `[0.0, 1.0]`.
pub trait Backlight {
    fn set_level(&mut self, level: f32) -> Result<(), Error>;
}

/// Tracks the current level and drives fades on a [`Backlight`].
pub struct BrightnessController<B> {
    backlight: B,
    level: f32,
}

impl<B: Backlight> BrightnessController<B> {
    /// The backlight is assumed off at power-up.
    pub fn new(backlight: B) -> Self {
        Self {
            backlight,
            level: 0.0,
        }
    }

    /// Current (last fully applied) level.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Fade from the current level to `target`.
    ///
    /// Returns how long the fade blocked, in ms: zero when the backlight
    /// is already at `target`.
    pub fn fade_to<Y: DelayNs>(&mut self, target: f32, delay: &mut Y) -> Result<u64, Error> {
        let target = clamp_level(target);
        if target == self.level {
            return Ok(0);
        }

        debug!("backlight: fade {} -> {}", self.level, target);
        for level in fade_levels(self.level, target, FADE_STEPS) {
            self.backlight.set_level(level)?;
            delay.delay_ms(FADE_STEP_MS);
        }
        self.level = target;
        Ok(fade_duration_ms())
    }

    pub fn backlight(&self) -> &B {
        &self.backlight
    }
}
