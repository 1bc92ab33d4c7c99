//! Unified error type for the trainer.
//!
//! We avoid `alloc` - all error variants carry no data. Every variant is
//! a collaborator failure; the firmware treats them as fatal. An illegal
//! key sequence is not an error, see [`crate::morse::IllegalSequence`].

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Character display transaction failed.
    Display,

    /// Backlight level could not be applied.
    Backlight,

    /// Buzzer could not be started or stopped.
    Tone,

    /// The log stream rejected a write.
    Log,
}

// Convenience conversions

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::Log
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let what = match self {
            Error::Display => "display write failed",
            Error::Backlight => "backlight update failed",
            Error::Tone => "tone output failed",
            Error::Log => "log stream write failed",
        };
        f.write_str(what)
    }
}
