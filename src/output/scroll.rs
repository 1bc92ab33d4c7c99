//! Scrolling text area on the two-row display.
//!
//! Characters are laid out on a logical strip of `2 × SCROLL_COLS`
//! cells. Position `p` lives at row `p / SCROLL_COLS`, column
//! `p % SCROLL_COLS`. When the next write would run past the end of the
//! strip the whole display is cleared and writing restarts at cell 0.

use super::CharacterDisplay;
use crate::config::{DISPLAY_ROWS, FEEDBACK_COL, FEEDBACK_ROW, SCROLL_COLS};
use crate::error::Error;

/// Number of cells in the scroll area.
pub const SCROLL_CAPACITY: usize = DISPLAY_ROWS as usize * SCROLL_COLS as usize;

pub struct ScrollBuffer<D> {
    display: D,
    position: usize,
}

impl<D: CharacterDisplay> ScrollBuffer<D> {
    pub fn new(display: D) -> Self {
        Self {
            display,
            position: 0,
        }
    }

    /// Append `text` at the current position.
    pub fn print(&mut self, text: &str) -> Result<(), Error> {
        let width = text.chars().count();
        if self.position + width > SCROLL_CAPACITY {
            self.clear()?;
        }
        let (row, col) = cell(self.position);
        self.display.set_cursor(row, col)?;
        self.display.print(text)?;
        self.position += width;
        Ok(())
    }

    pub fn print_char(&mut self, c: char) -> Result<(), Error> {
        let mut buf = [0u8; 4];
        self.print(c.encode_utf8(&mut buf))
    }

    /// Overwrite the keystroke feedback cell.
    pub fn feedback(&mut self, text: &str) -> Result<(), Error> {
        self.write_at(FEEDBACK_ROW, FEEDBACK_COL, text)
    }

    /// Write outside the scroll flow; the scroll position is untouched.
    pub fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), Error> {
        self.display.set_cursor(row, col)?;
        self.display.print(text)
    }

    /// Blank the display and restart at cell 0.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.display.clear()?;
        self.position = 0;
        Ok(())
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the scroll position without drawing anything.
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(SCROLL_CAPACITY);
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

/// Display cell of a scroll position.
#[inline]
pub fn cell(position: usize) -> (u8, u8) {
    let cols = SCROLL_COLS as usize;
    ((position / cols) as u8, (position % cols) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{DisplayOp, RecordingDisplay};

    #[test]
    fn positions_map_to_rows_of_thirteen() {
        assert_eq!(cell(0), (0, 0));
        assert_eq!(cell(12), (0, 12));
        assert_eq!(cell(13), (1, 0));
        assert_eq!(cell(25), (1, 12));
    }

    #[test]
    fn print_sets_cursor_then_advances() {
        let mut buf = ScrollBuffer::new(RecordingDisplay::new());
        buf.print("AB").unwrap();
        buf.print_char('C').unwrap();
        assert_eq!(buf.position(), 3);
        assert_eq!(buf.display().row(0), "ABC             ");
        assert_eq!(
            buf.display().ops[..2],
            [DisplayOp::SetCursor(0, 0), DisplayOp::Print("AB".into())]
        );
    }

    #[test]
    fn second_row_starts_at_cell_thirteen() {
        let mut buf = ScrollBuffer::new(RecordingDisplay::new());
        for c in "ABCDEFGHIJKLMN".chars() {
            buf.print_char(c).unwrap();
        }
        assert_eq!(buf.display().row(0), "ABCDEFGHIJKLM   ");
        assert_eq!(buf.display().row(1), "N               ");
    }

    #[test]
    fn full_strip_does_not_clear() {
        let mut buf = ScrollBuffer::new(RecordingDisplay::new());
        for _ in 0..SCROLL_CAPACITY {
            buf.print_char('E').unwrap();
        }
        assert_eq!(buf.position(), SCROLL_CAPACITY);
        assert_eq!(buf.display().clears(), 0);
    }

    #[test]
    fn overflow_clears_and_restarts_at_zero() {
        let mut buf = ScrollBuffer::new(RecordingDisplay::new());
        for _ in 0..SCROLL_CAPACITY {
            buf.print_char('E').unwrap();
        }
        buf.print_char('T').unwrap();
        assert_eq!(buf.display().clears(), 1);
        assert_eq!(buf.position(), 1);
        assert_eq!(buf.display().row(0), "T               ");
        assert_eq!(buf.display().row(1), "                ");

        buf.print_char('M').unwrap();
        assert_eq!(buf.display().row(0), "TM              ");
    }

    #[test]
    fn feedback_does_not_move_scroll_position() {
        let mut buf = ScrollBuffer::new(RecordingDisplay::new());
        buf.print_char('A').unwrap();
        buf.feedback("-").unwrap();
        assert_eq!(buf.position(), 1);
        assert_eq!(buf.display().row(0), "A              -");
    }

    #[test]
    fn set_position_is_clamped() {
        let mut buf = ScrollBuffer::new(RecordingDisplay::new());
        buf.set_position(100);
        assert_eq!(buf.position(), SCROLL_CAPACITY);
    }
}
