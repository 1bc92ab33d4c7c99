//! Decoded-text stream over defmt-rtt.

use morse_trainer::output::LineWriter;

/// Longest chunk sent in one defmt frame.
const LINE_CAPACITY: usize = 64;

pub type RttLog = LineWriter<fn(&str), LINE_CAPACITY>;

fn emit(line: &str) {
    defmt::println!("{=str}", line);
}

pub fn rtt_log() -> RttLog {
    LineWriter::new(emit as fn(&str))
}
