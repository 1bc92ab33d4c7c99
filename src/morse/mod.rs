//! Morse symbols and the two static code tables.
//!
//! - [`tree`]: binary decode tree walked one symbol at a time
//! - [`table`]: character → symbol sequence, used to play the self-test

pub mod table;
pub mod tree;


pub use table::{encode, EncodeEntry, ENCODE_TABLE};
pub use tree::{Cursor, DecodeNode, IllegalSequence, ROOT};

/// One classified key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Short press, walks to the left child.
    Dot,
    /// Long press, walks to the right child.
    Dash,
}

impl Symbol {
    /// Text echoed for this symbol on the feedback cell and log stream.
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::Dot => ".",
            Symbol::Dash => "-",
        }
    }

    /// Parse the `.`/`-` notation used by the encode table.
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(Symbol::Dot),
            b'-' => Some(Symbol::Dash),
            _ => None,
        }
    }

    /// Playback length in dot units.
    pub const fn units(self) -> u32 {
        match self {
            Symbol::Dot => 1,
            Symbol::Dash => 3,
        }
    }
}
