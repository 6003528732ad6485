//! Error types used in the library.
//!
//! The solve procedures themselves have no recoverable error states: a solve always terminates in a [report](crate::reports::Report), with conflicts handled as control flow and broken invariants treated as fatal assertions.
//! Errors, then, belong to the boundary: building a formula programmatically or parsing DIMACS input.

/// The top-level error, wrapping specific errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),
}

/// Noted errors when adding clauses to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An empty clause, which no valuation satisfies.
    EmptyClause,

    /// The clause contradicts the root-level valuation, so the formula is unsatisfiable.
    Unsatisfiable,

    /// A clause atom exceeds the representable bound.
    AtomsExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors when parsing a DIMACS source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Failure reading the numbered line.
    Line(usize),

    /// A malformed `p cnf <atoms> <clauses>` line.
    ProblemSpecification,

    /// A token which is not a literal, on the numbered line.
    Literal(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Build(BuildError::EmptyClause) => write!(f, "an empty clause was added"),
            ErrorKind::Build(BuildError::Unsatisfiable) => {
                write!(f, "the clause contradicts the root-level valuation")
            }
            ErrorKind::Build(BuildError::AtomsExhausted) => {
                write!(f, "a clause atom exceeds the representable bound")
            }
            ErrorKind::Parse(ParseError::Line(line)) => write!(f, "failed to read line {line}"),
            ErrorKind::Parse(ParseError::ProblemSpecification) => {
                write!(f, "malformed problem specification")
            }
            ErrorKind::Parse(ParseError::Literal(line)) => {
                write!(f, "malformed literal on line {line}")
            }
        }
    }
}
