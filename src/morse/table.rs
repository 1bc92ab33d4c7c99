//! Character → Morse lookup for the 36 supported characters.
//!
//! Patterns are stored in `.`/`-` notation and expanded to [`Symbol`]s on
//! iteration. Only the self-test reads this table; live input is decoded
//! through the tree.

use super::Symbol;

/// One row of the encode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeEntry {
    pub character: char,
    pub pattern: &'static str,
}

impl EncodeEntry {
    const fn new(character: char, pattern: &'static str) -> Self {
        Self { character, pattern }
    }

    /// Symbols for this character, in keying order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.pattern.bytes().filter_map(Symbol::from_ascii)
    }
}

/// A–Z then 0–9.
pub static ENCODE_TABLE: [EncodeEntry; 36] = [
    EncodeEntry::new('A', ".-"),
    EncodeEntry::new('B', "-..."),
    EncodeEntry::new('C', "-.-."),
    EncodeEntry::new('D', "-.."),
    EncodeEntry::new('E', "."),
    EncodeEntry::new('F', "..-."),
    EncodeEntry::new('G', "--."),
    EncodeEntry::new('H', "...."),
    EncodeEntry::new('I', ".."),
    EncodeEntry::new('J', ".---"),
    EncodeEntry::new('K', "-.-"),
    EncodeEntry::new('L', ".-.."),
    EncodeEntry::new('M', "--"),
    EncodeEntry::new('N', "-."),
    EncodeEntry::new('O', "---"),
    EncodeEntry::new('P', ".--."),
    EncodeEntry::new('Q', "--.-"),
    EncodeEntry::new('R', ".-."),
    EncodeEntry::new('S', "..."),
    EncodeEntry::new('T', "-"),
    EncodeEntry::new('U', "..-"),
    EncodeEntry::new('V', "...-"),
    EncodeEntry::new('W', ".--"),
    EncodeEntry::new('X', "-..-"),
    EncodeEntry::new('Y', "-.--"),
    EncodeEntry::new('Z', "--.."),
    EncodeEntry::new('0', "-----"),
    EncodeEntry::new('1', ".----"),
    EncodeEntry::new('2', "..---"),
    EncodeEntry::new('3', "...--"),
    EncodeEntry::new('4', "....-"),
    EncodeEntry::new('5', "....."),
    EncodeEntry::new('6', "-...."),
    EncodeEntry::new('7', "--..."),
    EncodeEntry::new('8', "---.."),
    EncodeEntry::new('9', "----."),
];

/// Look up a character (case-insensitive). `None` for anything outside
/// A–Z / 0–9, including space.
pub fn encode(character: char) -> Option<&'static EncodeEntry> {
    let upper = character.to_ascii_uppercase();
    ENCODE_TABLE.iter().find(|entry| entry.character == upper)
}
