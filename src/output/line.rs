//! Line-buffered text sink.
//!
//! Frame-oriented transports (defmt RTT) want whole chunks rather than
//! single characters. [`LineWriter`] collects text into a fixed buffer
//! and hands it to the sink at each space or newline, or when the buffer
//! fills.

use core::fmt;

use heapless::String;

pub struct LineWriter<F, const N: usize> {
    line: String<N>,
    sink: F,
}

impl<F, const N: usize> LineWriter<F, N>
where
    F: FnMut(&str),
{
    pub fn new(sink: F) -> Self {
        Self {
            line: String::new(),
            sink,
        }
    }

    /// Hand any buffered text to the sink.
    pub fn flush(&mut self) {
        if !self.line.is_empty() {
            (self.sink)(self.line.as_str());
            self.line.clear();
        }
    }

    /// Append `c`, flushing first if the line is full.
    fn push(&mut self, c: char) -> fmt::Result {
        if self.line.push(c).is_err() {
            self.flush();
            self.line.push(c).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

impl<F, const N: usize> fmt::Write for LineWriter<F, N>
where
    F: FnMut(&str),
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            match c {
                '\n' => self.flush(),
                ' ' => {
                    self.push(c)?;
                    self.flush();
                }
                _ => self.push(c)?,
            }
        }
        Ok(())
    }
}
