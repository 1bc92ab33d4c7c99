//! Morse trainer core.
//!
//! Everything here is pure logic that builds and tests on the host (no
//! embedded hardware required). The firmware in `main.rs` supplies the
//! display, backlight, buzzer, log stream and key input.
//!
//! Usage: `cargo test`
//!
//! ## Data flow
//!
//! ```text
//! key level ─▶ Session (classify, walk tree, gap timing) ─▶ Event
//!                                                           │
//!             Presenter ◀───────────────────────────────────┤
//!   (scroll area, feedback cell, sidetone, log)             │
//!                                                           ▼
//!                                              BrightnessController
//! ```

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod config;
pub mod device;
pub mod error;
pub mod keying;
pub mod morse;
pub mod output;
pub mod power;
pub mod power_logic;
pub mod selftest;

#[cfg(test)]
mod mock;

pub use config::Timing;
pub use device::Device;
pub use error::Error;
pub use keying::{Event, Session, SessionState};
pub use morse::{Cursor, IllegalSequence, Symbol};
pub use output::{CharacterDisplay, Presenter, ScrollBuffer, Tone};
pub use power::{Backlight, BrightnessController};
