//! Session state machine.
//!
//! Pure logic, no hardware dependencies. Consumes key edges and the
//! passage of time, produces [`Event`]s for the presenter and the
//! backlight. Fully testable on host with synthetic timestamps.
//!
//! ```text
//!   press        release         > dash          > 4 × dash      > 10 s        > 20 s
//! ───────▶ Keying ───────▶ CharGap ──────▶ WordGap ──────▶ SleepPending ──────▶ Asleep ──────▶ (off)
//!             ▲                                                                     │
//!             └───────────────────────── press (from any state) ───────────────────┘
//! ```
//!
//! Every gap timeout is measured from the last release. State and the
//! timing reference always change together through [`Session::enter`].

use heapless::Vec;

use super::classifier::{Classifier, Debounce};
use crate::config::{Timing, IDLE_POLL_MS, KEYING_POLL_MS};
use crate::morse::{Cursor, IllegalSequence, Symbol};

/// Where the session is between key edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Key is held.
    Keying,
    /// Key released, waiting to see whether the character continues.
    CharGap,
    /// Character emitted, waiting for the word gap.
    WordGap,
    /// Word ended, waiting for the dim timeout.
    SleepPending,
    /// Backlight dimmed (and later off).
    Asleep,
}

/// Output requested by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Echo one classified symbol.
    Symbol(Symbol),
    /// A completed character.
    Character(char),
    /// The keyed sequence does not spell anything.
    Illegal(IllegalSequence),
    /// Word gap elapsed.
    WordSpace,
    /// Dim the backlight and clear the display.
    Dim,
    /// Switch the backlight off.
    PowerOff,
}

/// Events produced by one key release (symbol echo, then maybe an
/// illegal-sequence report).
pub type Events = Vec<Event, 2>;

#[derive(Clone, Copy, Debug)]
struct Press {
    started_ms: u64,
    had_reference: bool,
    dash_echoed: bool,
}

/// Decode session: tree cursor, state and last-event timestamp.
pub struct Session {
    timing: Timing,
    classifier: Classifier,
    debounce: Debounce,
    cursor: Cursor,
    state: SessionState,
    /// Timestamp of the last state-relevant edge. `None` until the first
    /// press and again after deep sleep.
    reference_ms: Option<u64>,
    press: Option<Press>,
}

impl Session {
    /// Idle session with no timing reference: nothing times out until the
    /// first press.
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            classifier: Classifier::new(timing.dash_threshold_ms),
            debounce: Debounce::new(timing.debounce_ms),
            cursor: Cursor::new(),
            state: SessionState::SleepPending,
            reference_ms: None,
            press: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Timestamp every gap is measured from, if there is one.
    pub fn reference_ms(&self) -> Option<u64> {
        self.reference_ms
    }

    #[inline]
    pub fn is_keying(&self) -> bool {
        self.state == SessionState::Keying
    }

    /// Whether a key edge at `now_ms` is outside the debounce window.
    #[inline]
    pub fn accepts_edge(&self, now_ms: u64) -> bool {
        self.debounce.accepts(now_ms)
    }

    /// How long the caller should wait before the next [`Session::poll`].
    pub fn poll_interval_ms(&self) -> u64 {
        match self.state {
            SessionState::Keying => KEYING_POLL_MS,
            _ => IDLE_POLL_MS,
        }
    }

    /// Key went down. Valid from every state except `Keying`; stops any
    /// pending gap timeout. The decode cursor is left where it is so the
    /// character can continue.
    pub fn press(&mut self, now_ms: u64) {
        if self.is_keying() {
            return;
        }
        self.debounce.edge(now_ms);
        self.press = Some(Press {
            started_ms: now_ms,
            had_reference: self.reference_ms.is_some(),
            dash_echoed: false,
        });
        self.enter(SessionState::Keying, Some(now_ms));
    }

    /// Key came up: classify the press and walk the tree.
    pub fn release(&mut self, now_ms: u64) -> Events {
        let mut events = Events::new();
        let Some(press) = self.press.take() else {
            return events;
        };
        self.debounce.edge(now_ms);

        let held = now_ms.saturating_sub(press.started_ms);
        let symbol = self.classifier.classify(held, press.had_reference);
        debug!("session: held {} ms -> {:?}", held, symbol);

        // At most one echo and one report per release, within `Events`.
        if !(symbol == Symbol::Dash && press.dash_echoed) {
            let pushed = events.push(Event::Symbol(symbol));
            debug_assert!(pushed.is_ok());
        }
        if let Err(illegal) = self.cursor.advance(symbol) {
            let pushed = events.push(Event::Illegal(illegal));
            debug_assert!(pushed.is_ok());
        }

        self.enter(SessionState::CharGap, Some(now_ms));
        events
    }

    /// Check the gap timeouts. Call on every loop iteration.
    pub fn poll(&mut self, now_ms: u64) -> Option<Event> {
        let since = self.reference_ms?;
        let elapsed = now_ms.saturating_sub(since);

        match self.state {
            SessionState::Keying => {
                // Show the dash as soon as the press qualifies.
                let press = self.press.as_mut()?;
                if !press.dash_echoed && self.classifier.exceeds_threshold(elapsed) {
                    press.dash_echoed = true;
                    return Some(Event::Symbol(Symbol::Dash));
                }
                None
            }
            SessionState::CharGap => {
                if !self.classifier.exceeds_threshold(elapsed) {
                    return None;
                }
                // Nothing to emit when an illegal symbol already reset the cursor.
                let event = self.cursor.finish().map(Event::Character);
                self.enter(SessionState::WordGap, Some(since));
                event
            }
            SessionState::WordGap => {
                if elapsed <= self.timing.word_gap_ms {
                    return None;
                }
                self.enter(SessionState::SleepPending, Some(since));
                Some(Event::WordSpace)
            }
            SessionState::SleepPending => {
                if elapsed <= self.timing.dim_after_ms {
                    return None;
                }
                self.enter(SessionState::Asleep, Some(since));
                Some(Event::Dim)
            }
            SessionState::Asleep => {
                if elapsed <= self.timing.power_off_after_ms {
                    return None;
                }
                // Deep sleep: the next press starts without a reference.
                self.enter(SessionState::Asleep, None);
                Some(Event::PowerOff)
            }
        }
    }

    fn enter(&mut self, state: SessionState, reference_ms: Option<u64>) {
        if state != self.state {
            debug!("session: {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.reference_ms = reference_ms;
    }
}
