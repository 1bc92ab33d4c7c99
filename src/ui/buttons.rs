//! Key inputs.
//!
//! Two inputs key the trainer:
//!   - BUTTON - on-board push button, active-low with internal pull-up
//!   - KEY    - straight key jack, active-high with internal pull-down
//!
//! Either one held counts as key down. Debouncing happens in the
//! session, which ignores edges inside `DEBOUNCE_MS` of the last one.

use embassy_nrf::gpio::{AnyPin, Input, Pull};

pub struct Keys {
    button: Input<'static>,
    key: Input<'static>,
}

impl Keys {
    pub fn new(button: AnyPin, key: AnyPin) -> Self {
        Self {
            button: Input::new(button, Pull::Up),
            key: Input::new(key, Pull::Down),
        }
    }

    /// Sampled level of the combined key.
    pub fn is_down(&self) -> bool {
        self.button.is_low() || self.key.is_high()
    }
}
