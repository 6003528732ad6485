//! (The internal representation of) a literal: an atom paired with a polarity.
//!
//! A literal is packed into a single u32 as `2 * atom + polarity`, so:
//! - The literals of an atom *a* are `2a` (negative) and `2a + 1` (positive).
//! - The negation of a literal is obtained by flipping the final bit.
//! - A literal is a transparent index into any structure keyed by literals, notably the watch lists of the [clause store](crate::db::clause).

use crate::structures::atom::Atom;

/// A literal, packed as `2 * atom + polarity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(u32);

impl Literal {
    /// The literal valuing `atom` with `polarity`.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal((atom << 1) | polarity as u32)
    }

    /// The atom of the literal.
    pub fn atom(self) -> Atom {
        self.0 >> 1
    }

    /// The polarity of the literal --- true if the literal values its atom with true.
    pub fn polarity(self) -> bool {
        self.0 & 1 == 1
    }

    /// The negation of the literal.
    pub fn negate(self) -> Self {
        Literal(self.0 ^ 1)
    }

    /// The literal as an index, e.g. into a watch list.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The literal corresponding to a (non-zero) integer in the DIMACS representation.
    ///
    /// DIMACS atoms are one-based, with the sign of the integer carrying the polarity.
    pub fn from_dimacs(int: i32) -> Self {
        match int.is_positive() {
            true => Literal::new((int - 1) as Atom, true),
            false => Literal::new((-int - 1) as Atom, false),
        }
    }

    /// The integer representing the literal in the DIMACS format.
    pub fn as_dimacs(self) -> i32 {
        match self.polarity() {
            true => (self.atom() + 1) as i32,
            false => -((self.atom() + 1) as i32),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}
