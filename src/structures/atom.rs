//! (The internal representation of) an atom, aka. a 'variable'.
//!
//! Atoms are identified by an unsigned integer, stable for the lifetime of the atom, with the atoms of a context always being `[0..n)` for some *n*.
//! This allows atoms to be used directly as indices into the dense parallel arrays of the [trail](crate::db::trail) and the [activity heap](crate::db::activity).
//!
//! Externally --- i.e. in the DIMACS format --- atoms are one-based, with the translation made at the [builder](crate::builder) boundary.

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, bounded so any literal over the atom fits a u32.
pub const ATOM_MAX: Atom = (u32::MAX >> 1) - 1;
