//! Startup announcement.
//!
//! Plays a word on the sidetone using the encode table and prints each
//! character once it has been sent, then shows the caption. Runs to
//! completion before the first key sample is taken.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::config::{
    SELF_TEST_CAPTION, SELF_TEST_CAPTION_COL, SELF_TEST_CAPTION_ROW, SELF_TEST_DOT_MS,
    SELF_TEST_HOLD_MS, SELF_TEST_START, SELF_TEST_WORD,
};
use crate::error::Error;
use crate::morse::encode;
use crate::output::{CharacterDisplay, Presenter, Tone};

/// Send `word` at `unit_ms` per dot.
///
/// Element timing: tone for 1 (dot) or 3 (dash) units, then 1 unit of
/// silence; 3 more units close each character. A space is 7 units of
/// silence. Characters outside the table are skipped.
pub fn announce<D, T, L, Y>(
    presenter: &mut Presenter<D, T, L>,
    word: &str,
    unit_ms: u32,
    delay: &mut Y,
) -> Result<(), Error>
where
    D: CharacterDisplay,
    T: Tone,
    L: Write,
    Y: DelayNs,
{
    for c in word.chars() {
        if c == ' ' {
            delay.delay_ms(7 * unit_ms);
            continue;
        }
        let Some(entry) = encode(c) else {
            warn!("self-test: no code for {}", c);
            continue;
        };
        for symbol in entry.symbols() {
            presenter.tone_on()?;
            delay.delay_ms(symbol.units() * unit_ms);
            presenter.tone_off()?;
            delay.delay_ms(unit_ms);
        }
        delay.delay_ms(3 * unit_ms);
        presenter.character(entry.character)?;
    }
    Ok(())
}

/// The full boot splash: word, caption, hold, clear.
pub fn run<D, T, L, Y>(presenter: &mut Presenter<D, T, L>, delay: &mut Y) -> Result<(), Error>
where
    D: CharacterDisplay,
    T: Tone,
    L: Write,
    Y: DelayNs,
{
    info!("self-test: {}", SELF_TEST_WORD);
    presenter.set_position(SELF_TEST_START);
    announce(presenter, SELF_TEST_WORD, SELF_TEST_DOT_MS, delay)?;
    presenter.caption(SELF_TEST_CAPTION_ROW, SELF_TEST_CAPTION_COL, SELF_TEST_CAPTION)?;
    delay.delay_ms(SELF_TEST_HOLD_MS);
    presenter.clear()
}
