//! The whole trainer as one context object.
//!
//! [`Device`] owns the decode session, the presenter and the backlight
//! controller. The firmware calls [`Device::start`] once, then
//! [`Device::tick`] forever with the current time and key level, sleeping
//! for the interval each tick returns.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::config::{Timing, DIM_BRIGHTNESS, WAKE_BRIGHTNESS};
use crate::error::Error;
use crate::keying::{Event, Session, SessionState};
use crate::morse::Cursor;
use crate::output::{CharacterDisplay, Presenter, Tone};
use crate::power::{Backlight, BrightnessController};
use crate::selftest;

pub struct Device<D, T, L, B> {
    session: Session,
    presenter: Presenter<D, T, L>,
    brightness: BrightnessController<B>,
}

impl<D, T, L, B> Device<D, T, L, B>
where
    D: CharacterDisplay,
    T: Tone,
    L: Write,
    B: Backlight,
{
    pub fn new(display: D, tone: T, log: L, backlight: B, timing: Timing) -> Self {
        Self {
            session: Session::new(timing),
            presenter: Presenter::new(display, tone, log),
            brightness: BrightnessController::new(backlight),
        }
    }

    /// Bring the backlight up and play the self-test. Blocks until done.
    pub fn start<Y: DelayNs>(&mut self, delay: &mut Y) -> Result<(), Error> {
        self.brightness.fade_to(WAKE_BRIGHTNESS, delay)?;
        self.presenter.clear()?;
        selftest::run(&mut self.presenter, delay)?;
        info!("ready");
        Ok(())
    }

    /// One pass of the control loop.
    ///
    /// `key_down` is the OR of both key inputs as sampled at `now_ms`.
    /// Returns how many ms to wait before the next call.
    pub fn tick<Y: DelayNs>(
        &mut self,
        now_ms: u64,
        key_down: bool,
        delay: &mut Y,
    ) -> Result<u64, Error> {
        let mut now_ms = now_ms;

        if key_down != self.session.is_keying() && self.session.accepts_edge(now_ms) {
            if key_down {
                now_ms = self.key_down(now_ms, delay)?;
            } else {
                self.key_up(now_ms, delay)?;
            }
        }

        if let Some(event) = self.session.poll(now_ms) {
            self.apply(event, delay)?;
        }

        Ok(self.session.poll_interval_ms())
    }

    /// Wake first, then start timing the press. Returns the time the
    /// press is measured from.
    fn key_down<Y: DelayNs>(&mut self, now_ms: u64, delay: &mut Y) -> Result<u64, Error> {
        let faded = self.brightness.fade_to(WAKE_BRIGHTNESS, delay)?;
        if faded > 0 {
            info!("wake from {:?}", self.session.state());
        }
        let now_ms = now_ms + faded;
        self.presenter.tone_on()?;
        self.session.press(now_ms);
        Ok(now_ms)
    }

    fn key_up<Y: DelayNs>(&mut self, now_ms: u64, delay: &mut Y) -> Result<(), Error> {
        self.presenter.tone_off()?;
        for event in self.session.release(now_ms) {
            self.apply(event, delay)?;
        }
        Ok(())
    }

    fn apply<Y: DelayNs>(&mut self, event: Event, delay: &mut Y) -> Result<(), Error> {
        match event {
            Event::Symbol(symbol) => self.presenter.symbol(symbol),
            Event::Character(c) => self.presenter.character(c),
            Event::Illegal(illegal) => self.presenter.illegal_sequence(illegal),
            Event::WordSpace => self.presenter.word_space(),
            Event::Dim => {
                info!("idle: dimming, display cleared");
                self.brightness.fade_to(DIM_BRIGHTNESS, delay)?;
                self.presenter.clear()
            }
            Event::PowerOff => {
                info!("idle: backlight off");
                self.brightness.fade_to(0.0, delay).map(drop)
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn cursor(&self) -> &Cursor {
        self.session.cursor()
    }

    pub fn brightness(&self) -> f32 {
        self.brightness.level()
    }

    pub fn presenter(&self) -> &Presenter<D, T, L> {
        &self.presenter
    }

    pub fn backlight(&self) -> &B {
        self.brightness.backlight()
    }
}
