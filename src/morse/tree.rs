//! Binary decode tree.
//!
//! Every node is a `static`, so the tree is built at compile time and is
//! immutable. A dot moves to the left child, a dash to the right one.
//! The tree holds the 26 letters only, four levels deep. Digits are in
//! the encode table for the self-test but do not decode: keying one
//! runs off the tree and is reported as an illegal sequence.
//!
//! ```text
//!                        (root)
//!              E                        T
//!        I          A            N            M
//!     S     U     R    W       D    K       G     O
//!    H V   F     L    P J     B X  C Y     Z Q
//! ```

use super::Symbol;

/// One position in the decode tree.
#[derive(Debug)]
pub struct DecodeNode {
    /// Character decoded when input stops at this node.
    pub value: Option<char>,
    /// Child reached by a dot.
    pub dot: Option<&'static DecodeNode>,
    /// Child reached by a dash.
    pub dash: Option<&'static DecodeNode>,
}

impl DecodeNode {
    const fn leaf(value: char) -> Self {
        Self {
            value: Some(value),
            dot: None,
            dash: None,
        }
    }

    const fn branch(
        value: Option<char>,
        dot: Option<&'static DecodeNode>,
        dash: Option<&'static DecodeNode>,
    ) -> Self {
        Self { value, dot, dash }
    }

    /// Child for `symbol`, if the tree has one.
    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<&'static DecodeNode> {
        match symbol {
            Symbol::Dot => self.dot,
            Symbol::Dash => self.dash,
        }
    }
}

// Level 4
static H: DecodeNode = DecodeNode::leaf('H');
static V: DecodeNode = DecodeNode::leaf('V');
static F: DecodeNode = DecodeNode::leaf('F');
static L: DecodeNode = DecodeNode::leaf('L');
static P: DecodeNode = DecodeNode::leaf('P');
static J: DecodeNode = DecodeNode::leaf('J');
static B: DecodeNode = DecodeNode::leaf('B');
static X: DecodeNode = DecodeNode::leaf('X');
static C: DecodeNode = DecodeNode::leaf('C');
static Y: DecodeNode = DecodeNode::leaf('Y');
static Z: DecodeNode = DecodeNode::leaf('Z');
static Q: DecodeNode = DecodeNode::leaf('Q');

// Level 3
static S: DecodeNode = DecodeNode::branch(Some('S'), Some(&H), Some(&V));
static U: DecodeNode = DecodeNode::branch(Some('U'), Some(&F), None);
static R: DecodeNode = DecodeNode::branch(Some('R'), Some(&L), None);
static W: DecodeNode = DecodeNode::branch(Some('W'), Some(&P), Some(&J));
static D: DecodeNode = DecodeNode::branch(Some('D'), Some(&B), Some(&X));
static K: DecodeNode = DecodeNode::branch(Some('K'), Some(&C), Some(&Y));
static G: DecodeNode = DecodeNode::branch(Some('G'), Some(&Z), Some(&Q));
static O: DecodeNode = DecodeNode::leaf('O');

// Level 2
static I: DecodeNode = DecodeNode::branch(Some('I'), Some(&S), Some(&U));
static A: DecodeNode = DecodeNode::branch(Some('A'), Some(&R), Some(&W));
static N: DecodeNode = DecodeNode::branch(Some('N'), Some(&D), Some(&K));
static M: DecodeNode = DecodeNode::branch(Some('M'), Some(&G), Some(&O));

// Level 1
static E: DecodeNode = DecodeNode::branch(Some('E'), Some(&I), Some(&A));
static T: DecodeNode = DecodeNode::branch(Some('T'), Some(&N), Some(&M));

/// Root of the decode tree. Carries no character.
pub static ROOT: DecodeNode = DecodeNode::branch(None, Some(&E), Some(&T));

/// A symbol arrived for which the current node has no child.
///
/// Always recoverable: the cursor is back at the root once this is
/// reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IllegalSequence {
    /// The symbol that could not be followed.
    pub symbol: Symbol,
    /// How many symbols had been accepted before the failure.
    pub depth: u8,
}

/// Traversal position inside [`ROOT`].
///
/// Holds a shared reference only; the tree itself is never mutated.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    node: &'static DecodeNode,
    depth: u8,
}

impl Cursor {
    /// A cursor parked at the root.
    pub fn new() -> Self {
        Self {
            node: &ROOT,
            depth: 0,
        }
    }

    /// Follow `symbol`. On a missing child the cursor resets to the
    /// root and the failure is returned.
    pub fn advance(&mut self, symbol: Symbol) -> Result<(), IllegalSequence> {
        match self.node.child(symbol) {
            Some(next) => {
                self.node = next;
                self.depth += 1;
                Ok(())
            }
            None => {
                let err = IllegalSequence {
                    symbol,
                    depth: self.depth,
                };
                self.reset();
                Err(err)
            }
        }
    }

    /// Character at the current node, if any.
    #[inline]
    pub fn character(&self) -> Option<char> {
        self.node.value
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        core::ptr::eq(self.node, &ROOT)
    }

    /// Number of symbols followed since the last reset.
    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Finish the current character: returns what was keyed and parks
    /// the cursor at the root. `None` when nothing was keyed.
    pub fn finish(&mut self) -> Option<char> {
        let value = self.node.value;
        self.reset();
        value
    }

    #[inline]
    pub fn reset(&mut self) {
        self.node = &ROOT;
        self.depth = 0;
    }

    /// Walk a whole symbol sequence from the root.
    pub fn decode<I>(symbols: I) -> Result<Option<char>, IllegalSequence>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut cursor = Self::new();
        for symbol in symbols {
            cursor.advance(symbol)?;
        }
        Ok(cursor.character())
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
