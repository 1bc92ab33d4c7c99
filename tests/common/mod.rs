//! Simulated board for driving `Device` from integration tests.
//!
//! The clock only moves when the rig sleeps for the interval `tick`
//! returns or when the device blocks on the delay (fades, self-test).

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use morse_trainer::config::{DISPLAY_COLS, DISPLAY_ROWS};
use morse_trainer::{Backlight, CharacterDisplay, Device, Error, Timing, Tone};

/// 16×2 character panel kept as a grid of chars.
pub struct Panel {
    grid: [[char; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize],
    row: u8,
    col: u8,
    pub clears: usize,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            grid: [[' '; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize],
            row: 0,
            col: 0,
            clears: 0,
        }
    }

    pub fn row(&self, row: usize) -> String {
        self.grid[row].iter().collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> char {
        self.grid[row][col]
    }
}

impl CharacterDisplay for Panel {
    fn clear(&mut self) -> Result<(), Error> {
        self.grid = [[' '; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize];
        self.row = 0;
        self.col = 0;
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        self.row = row;
        self.col = col;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), Error> {
        for c in text.chars() {
            if self.row < DISPLAY_ROWS && self.col < DISPLAY_COLS {
                self.grid[self.row as usize][self.col as usize] = c;
            }
            self.col += 1;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct Buzzer {
    pub sounding: bool,
    pub frequency: u32,
    pub bursts: usize,
}

impl Tone for Buzzer {
    fn start(&mut self, frequency_hz: u32) -> Result<(), Error> {
        self.sounding = true;
        self.frequency = frequency_hz;
        self.bursts += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Error> {
        self.sounding = false;
        Ok(())
    }
}

#[derive(Default)]
pub struct Led {
    pub history: Vec<f32>,
}

impl Backlight for Led {
    fn set_level(&mut self, level: f32) -> Result<(), Error> {
        self.history.push(level);
        Ok(())
    }
}

/// Delay that advances simulated time instead of sleeping.
#[derive(Default)]
pub struct SimDelay {
    pub elapsed_ns: u64,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

pub type Trainer = Device<Panel, Buzzer, String, Led>;

pub struct Rig {
    pub device: Trainer,
    pub delay: SimDelay,
    slept_ms: u64,
}

/// Held time used for dots and dashes by [`Rig::send`].
pub const DOT_MS: u64 = 100;
pub const DASH_MS: u64 = 450;
/// Silence between elements of one character.
pub const ELEMENT_GAP_MS: u64 = 100;
/// Silence that ends a character but not the word.
pub const CHAR_GAP_MS: u64 = 500;

impl Rig {
    /// Booted device with the self-test already played.
    pub fn booted() -> Self {
        let mut rig = Self::unbooted();
        rig.device.start(&mut rig.delay).unwrap();
        rig
    }

    pub fn unbooted() -> Self {
        let device = Device::new(
            Panel::new(),
            Buzzer::default(),
            String::new(),
            Led::default(),
            Timing::default(),
        );
        Self {
            device,
            delay: SimDelay::default(),
            slept_ms: 0,
        }
    }

    /// Booted, and the first-press rule already used up on a "T" and a
    /// word gap. The log and display are left as they are.
    pub fn primed() -> Self {
        let mut rig = Self::booted();
        rig.key(DOT_MS);
        rig.silence(2_000);
        rig
    }

    pub fn now(&self) -> u64 {
        self.slept_ms + self.delay.elapsed_ns / 1_000_000
    }

    pub fn tick(&mut self, key_down: bool) {
        let now = self.now();
        let wait = self.device.tick(now, key_down, &mut self.delay).unwrap();
        assert!(wait > 0 && wait <= 50);
        self.slept_ms += wait;
    }

    pub fn run(&mut self, ms: u64, key_down: bool) {
        let end = self.now() + ms;
        while self.now() < end {
            self.tick(key_down);
        }
    }

    /// Hold the key for `ms`.
    pub fn key(&mut self, ms: u64) {
        self.run(ms, true);
    }

    pub fn silence(&mut self, ms: u64) {
        self.run(ms, false);
    }

    /// Key one character in `.`/`-` notation and wait out the char gap.
    pub fn send(&mut self, pattern: &str) {
        for (i, element) in pattern.chars().enumerate() {
            if i > 0 {
                self.silence(ELEMENT_GAP_MS);
            }
            match element {
                '.' => self.key(DOT_MS),
                '-' => self.key(DASH_MS),
                other => panic!("bad element {other}"),
            }
        }
        self.silence(CHAR_GAP_MS);
    }

    pub fn log(&self) -> &str {
        self.device.presenter().log()
    }

    pub fn panel(&self) -> &Panel {
        self.device.presenter().display()
    }

    pub fn buzzer(&self) -> &Buzzer {
        self.device.presenter().tone()
    }
}
