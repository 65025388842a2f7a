//! Indentation shapes for the option notation
//!
//! A newline plus its trailing space run is classified against the current
//! indent level, one unit being two spaces. Three shapes exist:
//!
//! - indent: exactly one level deeper than the current one, with a single
//!   extra space tolerated as typo slack. An indent never steps more than
//!   one level at a time.
//! - outdent: an even run shallower than the current level. An outdent may
//!   jump any number of levels in one go.
//! - aligned: at least as wide as the current level, meaning the line
//!   continues at the same depth (multi-line arrays rely on the raw space
//!   count this shape preserves).
//!
//! A run matching none of the three produces no lexical event; the scanner
//! keeps that arm explicit.
//!
//! The predicates are total. The size accessors are the fallible half of
//! the contract: calling one with a run its predicate rejects returns an
//! [`IndentShapeError`]. The scanner always checks the predicate first, so
//! through `tokenize` these errors are unreachable, but the accessors stay
//! independently testable.

use crate::option::lexing::errors::IndentShapeError;

/// Number of spaces that make up one indentation level.
pub const INDENT_UNIT: usize = 2;

fn is_space_run(run: &str) -> bool {
    run.chars().all(|c| c == ' ')
}

/// Check if `run` is an indent relative to the current `level`: the width
/// of the next level, give or take one extra space.
pub fn is_indent(run: &str, level: usize) -> bool {
    let lower = INDENT_UNIT * (level + 1);
    is_space_run(run) && run.len() >= lower && run.len() <= lower + 1
}

/// The level an indent run steps to: always exactly one deeper.
pub fn indent_size(run: &str, level: usize) -> Result<usize, IndentShapeError> {
    if is_indent(run, level) {
        Ok(level + 1)
    } else {
        Err(IndentShapeError::NotAnIndent {
            spaces: run.len(),
            level,
        })
    }
}

/// Check if `run` is an outdent relative to the current `level`: an even
/// run strictly shallower than the current level.
pub fn is_outdent(run: &str, level: usize) -> bool {
    is_space_run(run) && run.len() % INDENT_UNIT == 0 && run.len() / INDENT_UNIT < level
}

/// The level an outdent run drops to; may skip levels.
pub fn outdent_size(run: &str, level: usize) -> Result<usize, IndentShapeError> {
    if is_outdent(run, level) {
        Ok(run.len() / INDENT_UNIT)
    } else {
        Err(IndentShapeError::NotAnOutdent {
            spaces: run.len(),
            level,
        })
    }
}

/// Check if `run` continues the current `level`: at least as wide as the
/// level itself. The scanner emits the raw space count for this shape, not
/// a level.
pub fn is_aligned(run: &str, level: usize) -> bool {
    is_space_run(run) && run.len() >= INDENT_UNIT * level
}
