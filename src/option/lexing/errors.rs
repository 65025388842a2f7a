//! Error types for the option lexer
//!
//! Both kinds are fatal to the call that raised them. There is no recovery
//! and no partial token sequence: the caller gets the whole stream or an
//! error.

use std::error::Error;
use std::fmt;

/// Contract guard of the indentation shape accessors: computing a level
/// from a whitespace run that does not satisfy the matching shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentShapeError {
    NotAnIndent { spaces: usize, level: usize },
    NotAnOutdent { spaces: usize, level: usize },
}

impl fmt::Display for IndentShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentShapeError::NotAnIndent { spaces, level } => write!(
                f,
                "a run of {spaces} spaces is not an indent at indent level {level}"
            ),
            IndentShapeError::NotAnOutdent { spaces, level } => write!(
                f,
                "a run of {spaces} spaces is not an outdent at indent level {level}"
            ),
        }
    }
}

impl Error for IndentShapeError {}

/// Failure of a whole `tokenize` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The scan finished in an inconsistent state: the indent level did not
    /// return to zero, or the cursor did not land exactly on the end of the
    /// input. Signals malformed input that defeated every collector (an
    /// unterminated string, for instance) or an internal defect.
    FormatInvariantViolation {
        indent_level: usize,
        cursor: usize,
        input_len: usize,
    },
    /// An indentation shape accessor was invoked outside its precondition.
    /// Unreachable through `tokenize`, which checks the predicate first.
    IndentShape(IndentShapeError),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::FormatInvariantViolation {
                indent_level,
                cursor,
                input_len,
            } => write!(
                f,
                "lexical analysis failed: scan finished at indent level {indent_level} \
                 with cursor {cursor} of {input_len}"
            ),
            LexError::IndentShape(inner) => write!(f, "indentation shape error: {inner}"),
        }
    }
}

impl Error for LexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LexError::FormatInvariantViolation { .. } => None,
            LexError::IndentShape(inner) => Some(inner),
        }
    }
}

impl From<IndentShapeError> for LexError {
    fn from(error: IndentShapeError) -> Self {
        LexError::IndentShape(error)
    }
}
