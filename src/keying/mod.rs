//! Key timing: press classification and the decode session.
//!
//! ## Components
//!
//! - **Classifier**: hold time → dot/dash, plus the secondary debounce
//! - **Session**: the Keying / CharGap / WordGap / SleepPending / Asleep
//!   state machine driving the decode cursor

pub mod classifier;
pub mod session;

pub use classifier::{Classifier, Debounce};
pub use session::{Event, Events, Session, SessionState};
