//! Fans decoded output out to the display, the sidetone and the log.
//!
//! - symbols go to the feedback cell and the log
//! - characters go to the scroll area and the log
//! - the sidetone follows the key

use core::fmt::Write;

use super::scroll::ScrollBuffer;
use super::{CharacterDisplay, Tone};
use crate::config::{ILLEGAL_MARKER, TONE_FREQUENCY_HZ};
use crate::error::Error;
use crate::morse::{IllegalSequence, Symbol};

pub struct Presenter<D, T, L> {
    screen: ScrollBuffer<D>,
    tone: T,
    log: L,
    sounding: bool,
}

impl<D, T, L> Presenter<D, T, L>
where
    D: CharacterDisplay,
    T: Tone,
    L: Write,
{
    pub fn new(display: D, tone: T, log: L) -> Self {
        Self {
            screen: ScrollBuffer::new(display),
            tone,
            log,
            sounding: false,
        }
    }

    /// Echo one symbol on the feedback cell.
    pub fn symbol(&mut self, symbol: Symbol) -> Result<(), Error> {
        self.log.write_str(symbol.as_str())?;
        self.screen.feedback(symbol.as_str())
    }

    /// Append a decoded character to the scroll area.
    pub fn character(&mut self, c: char) -> Result<(), Error> {
        self.log.write_char(c)?;
        self.screen.print_char(c)
    }

    /// Report input that does not spell a character.
    pub fn illegal_sequence(&mut self, illegal: IllegalSequence) -> Result<(), Error> {
        warn!(
            "illegal sequence: {:?} after {} symbols",
            illegal.symbol,
            illegal.depth
        );
        writeln!(self.log, "illegal sequence")?;
        self.character(ILLEGAL_MARKER)
    }

    /// Word gap: a space in the scroll area and a blank feedback cell.
    pub fn word_space(&mut self) -> Result<(), Error> {
        self.character(' ')?;
        self.screen.feedback(" ")
    }

    pub fn tone_on(&mut self) -> Result<(), Error> {
        if !self.sounding {
            self.tone.start(TONE_FREQUENCY_HZ)?;
            self.sounding = true;
        }
        Ok(())
    }

    pub fn tone_off(&mut self) -> Result<(), Error> {
        if self.sounding {
            self.tone.stop()?;
            self.sounding = false;
        }
        Ok(())
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    /// Text outside the scroll flow (splash caption).
    pub fn caption(&mut self, row: u8, col: u8, text: &str) -> Result<(), Error> {
        self.screen.write_at(row, col, text)
    }

    pub fn clear(&mut self) -> Result<(), Error> {
        self.screen.clear()
    }

    pub fn set_position(&mut self, position: usize) {
        self.screen.set_position(position);
    }

    pub fn position(&self) -> usize {
        self.screen.position()
    }

    pub fn display(&self) -> &D {
        self.screen.display()
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::*;
    use crate::mock::{RecordingDisplay, RecordingTone, ToneOp};

    fn presenter() -> Presenter<RecordingDisplay, RecordingTone, String> {
        Presenter::new(RecordingDisplay::new(), RecordingTone::default(), String::new())
    }

    #[test]
    fn symbol_overwrites_feedback_cell() {
        let mut p = presenter();
        p.symbol(Symbol::Dot).unwrap();
        assert_eq!(p.display().row(0), "               .");
        p.symbol(Symbol::Dash).unwrap();
        assert_eq!(p.display().row(0), "               -");
        assert_eq!(p.log(), ".-");
    }

    #[test]
    fn characters_scroll_and_are_logged() {
        let mut p = presenter();
        p.character('S').unwrap();
        p.character('O').unwrap();
        assert_eq!(p.display().row(0), "SO              ");
        assert_eq!(p.log(), "SO");
    }

    #[test]
    fn illegal_sequence_prints_marker_and_diagnostic() {
        let mut p = presenter();
        p.illegal_sequence(IllegalSequence {
            symbol: Symbol::Dash,
            depth: 3,
        })
        .unwrap();
        assert_eq!(p.display().row(0), "?               ");
        assert_eq!(p.log(), "illegal sequence\n?");
    }

    #[test]
    fn word_space_blanks_feedback() {
        let mut p = presenter();
        p.symbol(Symbol::Dot).unwrap();
        p.character('E').unwrap();
        p.word_space().unwrap();
        assert_eq!(p.display().row(0), "E               ");
        assert_eq!(p.position(), 2);
        assert_eq!(p.log(), ".E ");
    }

    #[test]
    fn tone_start_stop_is_idempotent() {
        let mut p = presenter();
        p.tone_on().unwrap();
        p.tone_on().unwrap();
        assert!(p.is_sounding());
        p.tone_off().unwrap();
        p.tone_off().unwrap();
        assert_eq!(
            p.tone().ops,
            [ToneOp::Start(TONE_FREQUENCY_HZ), ToneOp::Stop]
        );
    }
}
