//! Token definitions for the option notation
//!
//! One variant per lexical kind, with the payload shape fixed by the kind:
//! text for the word-like tokens, a space count for the spacing tokens, a
//! level for the indentation tokens, and nothing for the markers. The enum
//! is closed on purpose so that every consumer has to handle all kinds
//! explicitly.

/// A lexical token of the option notation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    /// Bare word: key names and any other unquoted run of non-whitespace.
    Symbol(String),
    /// String delimiter (`"`), emitted on both sides of a `String`.
    StringLim,
    /// Raw text between two `StringLim` delimiters, no escape processing.
    String(String),
    /// Run of ASCII digits, kept verbatim as text.
    Number(String),
    /// Inline key-to-value separation: the number of spaces between a
    /// symbol and its value.
    Apply(usize),
    /// Value separator, with the length of the space run that followed it.
    Comma(usize),
    /// Same-level line break: the raw space count of the aligned run.
    Newline(usize),
    /// One step deeper; the payload is the new indent level.
    Indent(usize),
    /// Jump to a shallower level; the payload is the new indent level.
    Outdent(usize),
    /// A single tab character.
    Tab,
    /// End of program: the input terminated through the sentinel marker.
    Eop,
}

impl Token {
    /// Check if this token carries text cut from the source.
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Symbol(_) | Token::String(_) | Token::Number(_))
    }

    /// Check if this token is an indentation event (indent, outdent, or a
    /// same-level line break).
    pub fn is_indentation(&self) -> bool {
        matches!(self, Token::Indent(_) | Token::Outdent(_) | Token::Newline(_))
    }

    /// Check if this token separates a key or value from what follows it.
    pub fn is_spacing(&self) -> bool {
        matches!(self, Token::Apply(_) | Token::Comma(_))
    }
}
