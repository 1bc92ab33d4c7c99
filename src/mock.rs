//! Recording doubles for the collaborator traits (unit tests only).

use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::config::{DISPLAY_COLS, DISPLAY_ROWS};
use crate::error::Error;
use crate::output::{CharacterDisplay, Tone};
use crate::power::Backlight;

#[derive(Clone, Debug, PartialEq)]
pub enum DisplayOp {
    Clear,
    SetCursor(u8, u8),
    Print(String),
}

/// Character grid that records every call.
pub struct RecordingDisplay {
    pub ops: Vec<DisplayOp>,
    grid: [[char; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize],
    row: u8,
    col: u8,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            grid: [[' '; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize],
            row: 0,
            col: 0,
        }
    }

    pub fn row(&self, row: usize) -> String {
        self.grid[row].iter().collect()
    }

    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| **op == DisplayOp::Clear).count()
    }
}

impl CharacterDisplay for RecordingDisplay {
    fn clear(&mut self) -> Result<(), Error> {
        self.ops.push(DisplayOp::Clear);
        self.grid = [[' '; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize];
        self.row = 0;
        self.col = 0;
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        self.ops.push(DisplayOp::SetCursor(row, col));
        self.row = row;
        self.col = col;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), Error> {
        self.ops.push(DisplayOp::Print(text.into()));
        for c in text.chars() {
            if self.row < DISPLAY_ROWS && self.col < DISPLAY_COLS {
                self.grid[self.row as usize][self.col as usize] = c;
            }
            self.col = self.col.saturating_add(1);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToneOp {
    Start(u32),
    Stop,
}

#[derive(Default)]
pub struct RecordingTone {
    pub ops: Vec<ToneOp>,
}

impl RecordingTone {
    pub fn sounding(&self) -> bool {
        matches!(self.ops.last(), Some(ToneOp::Start(_)))
    }
}

impl Tone for RecordingTone {
    fn start(&mut self, frequency_hz: u32) -> Result<(), Error> {
        self.ops.push(ToneOp::Start(frequency_hz));
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Error> {
        self.ops.push(ToneOp::Stop);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingBacklight {
    pub levels: Vec<f32>,
}

impl Backlight for RecordingBacklight {
    fn set_level(&mut self, level: f32) -> Result<(), Error> {
        self.levels.push(level);
        Ok(())
    }
}

/// Backlight that always fails, for error propagation tests.
pub struct BrokenBacklight;

impl Backlight for BrokenBacklight {
    fn set_level(&mut self, _level: f32) -> Result<(), Error> {
        Err(Error::Backlight)
    }
}

/// Delay that only adds up how long it was asked to wait.
#[derive(Default)]
pub struct SpyDelay {
    pub total_ns: u64,
}

impl SpyDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for SpyDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
