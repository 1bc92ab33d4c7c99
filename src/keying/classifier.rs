//! Press-duration classification and secondary debounce.

use crate::morse::Symbol;

/// Turns a measured hold time into a [`Symbol`].
#[derive(Clone, Copy, Debug)]
pub struct Classifier {
    dash_threshold_ms: u64,
}

impl Classifier {
    pub const fn new(dash_threshold_ms: u64) -> Self {
        Self { dash_threshold_ms }
    }

    /// A press held strictly longer than the threshold is a dash.
    ///
    /// A press that started with no prior timing reference (first press
    /// after boot or after deep sleep) is always a dash, whatever its
    /// length.
    #[inline]
    pub fn classify(&self, held_ms: u64, had_reference: bool) -> Symbol {
        if !had_reference || self.exceeds_threshold(held_ms) {
            Symbol::Dash
        } else {
            Symbol::Dot
        }
    }

    /// True once `elapsed_ms` is past the dash threshold.
    #[inline]
    pub fn exceeds_threshold(&self, elapsed_ms: u64) -> bool {
        elapsed_ms > self.dash_threshold_ms
    }
}

/// Quiet window after each accepted key edge.
///
/// The input driver already debounces the raw pin; this rejects the
/// contact chatter that still gets through right after an edge.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    window_ms: u64,
    quiet_until: u64,
}

impl Debounce {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            quiet_until: 0,
        }
    }

    /// Whether an edge seen at `now_ms` may be accepted.
    #[inline]
    pub fn accepts(&self, now_ms: u64) -> bool {
        now_ms >= self.quiet_until
    }

    /// Record an accepted edge.
    #[inline]
    pub fn edge(&mut self, now_ms: u64) {
        self.quiet_until = now_ms.saturating_add(self.window_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_itself_is_a_dot() {
        let c = Classifier::new(300);
        assert_eq!(c.classify(300, true), Symbol::Dot);
        assert_eq!(c.classify(301, true), Symbol::Dash);
        assert_eq!(c.classify(0, true), Symbol::Dot);
    }

    #[test]
    fn press_without_reference_is_a_dash() {
        let c = Classifier::new(300);
        assert_eq!(c.classify(10, false), Symbol::Dash);
        assert_eq!(c.classify(300, false), Symbol::Dash);
        assert_eq!(c.classify(5000, false), Symbol::Dash);
    }

    #[test]
    fn debounce_rejects_edges_inside_window() {
        let mut d = Debounce::new(30);
        assert!(d.accepts(0));
        d.edge(100);
        assert!(!d.accepts(100));
        assert!(!d.accepts(129));
        assert!(d.accepts(130));
    }
}
