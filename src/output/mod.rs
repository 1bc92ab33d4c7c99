//! Output subsystem - character display, sidetone and log stream.
//!
//! The core only talks to hardware through the traits below. The board
//! implementations live in the firmware binary; tests use recorders.
//!
//! The log stream is any [`core::fmt::Write`] sink.

pub mod line;
pub mod presenter;
pub mod scroll;

pub use line::LineWriter;
pub use presenter::Presenter;
pub use scroll::{ScrollBuffer, SCROLL_CAPACITY};

use crate::error::Error;

/// Two-row character display.
pub trait CharacterDisplay {
    /// Blank every cell and home the cursor.
    fn clear(&mut self) -> Result<(), Error>;

    /// Move the write position.
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error>;

    /// Write `text` at the cursor, advancing it.
    fn print(&mut self, text: &str) -> Result<(), Error>;
}

/// Sidetone generator.
pub trait Tone {
    fn start(&mut self, frequency_hz: u32) -> Result<(), Error>;
    fn stop(&mut self) -> Result<(), Error>;
}
