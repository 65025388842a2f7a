//! Test support for the option lexer
//!
//! Fixture programs and small helpers shared by the unit and integration
//! tests. The programs mirror the documents the notation was designed
//! around: flat key/value pairs, nested blocks, and multi-line arrays
//! aligned by column.

/// A run of `count` plain spaces.
pub fn spaces(count: usize) -> String {
    " ".repeat(count)
}

/// Fixture programs in option notation.
pub mod programs {
    /// Line terminators only; lexes to zero tokens.
    pub const EMPTY: &str = "\n";

    /// Two flat key/value pairs.
    pub const SIMPLE: &str = "name \"John Doe\"\nage   19\n";

    /// Two nested blocks, the second with a same-level continuation.
    pub const NESTED: &str = "pilot\n  name \"John Doe\"\nco-pilot\n  name \"Joanna Dole\"\n  age 32\n";

    /// A string array aligned at column 5 and an inline number array.
    pub const SIMPLE_ARRAYS: &str =
        "crew \"John Doe\",\n     \"Joanna Dole\"\n     \"Jules Dancer\"\nages 42, 32\n";

    /// Column-aligned values, a blank line, and an inline number array.
    pub const COMPLEX_ARRAYS: &str = "array 234\n      fname \"Tinu\"\n      lname \"Elejogun\"\n\n      &sum 5, 34, 27\nstring \"natural\"\n";
}
