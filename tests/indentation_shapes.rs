//! Case tables for the indentation shape predicates and accessors
//!
//! These exercise the lower-level indentation contract directly, outside
//! the `tokenize` entry point that normally guards every accessor call with
//! its predicate.

use option_lexer::option::lexing::indentation::{
    indent_size, is_aligned, is_indent, is_outdent, outdent_size,
};
use option_lexer::option::lexing::IndentShapeError;
use option_lexer::option::testing::spaces;
use rstest::rstest;

#[rstest]
#[case(2, 0, true)] // exact next-level width
#[case(3, 0, true)] // one extra space of typo slack
#[case(4, 0, false)] // two extra spaces is no longer an indent
#[case(2, 1, false)] // too narrow for the next level
#[case(4, 1, true)]
#[case(5, 1, true)]
#[case(0, 0, false)]
fn indent_shape(#[case] run: usize, #[case] level: usize, #[case] expected: bool) {
    assert_eq!(is_indent(&spaces(run), level), expected);
}

#[rstest]
#[case(0, 1, true)] // back to the top level
#[case(0, 2, true)] // multi-level jump in one run
#[case(2, 3, true)]
#[case(1, 2, false)] // odd runs are never outdents
#[case(2, 1, false)] // current width is alignment, not an outdent
#[case(4, 1, false)] // deeper than the current level
fn outdent_shape(#[case] run: usize, #[case] level: usize, #[case] expected: bool) {
    assert_eq!(is_outdent(&spaces(run), level), expected);
}

#[rstest]
#[case(0, 0, true)]
#[case(5, 0, true)] // any run continues the top level
#[case(2, 1, true)]
#[case(3, 1, true)]
#[case(1, 1, false)]
fn aligned_shape(#[case] run: usize, #[case] level: usize, #[case] expected: bool) {
    assert_eq!(is_aligned(&spaces(run), level), expected);
}

#[test]
fn indent_size_steps_exactly_one_level() {
    assert_eq!(indent_size(&spaces(2), 0), Ok(1));
    assert_eq!(indent_size(&spaces(5), 1), Ok(2));
}

#[test]
fn indent_size_outside_its_shape_is_an_error() {
    assert_eq!(
        indent_size(&spaces(2), 1),
        Err(IndentShapeError::NotAnIndent { spaces: 2, level: 1 })
    );
}

#[test]
fn outdent_size_jumps_to_the_run_level() {
    assert_eq!(outdent_size(&spaces(4), 3), Ok(2));
    assert_eq!(outdent_size(&spaces(0), 3), Ok(0));
}

#[test]
fn outdent_size_outside_its_shape_is_an_error() {
    assert_eq!(
        outdent_size(&spaces(3), 2),
        Err(IndentShapeError::NotAnOutdent { spaces: 3, level: 2 })
    );
}
