//! Token stream rendering for the option notation
//!
//! Converts token streams back into text. Useful for:
//!
//! - Round-trip testing (source -> tokens -> source)
//! - Debugging and visualization of token streams
//! - Handing a serialized stream to external tooling
//!
//! Detokenization is canonical, not byte-faithful: an indent written with
//! the one-space typo slack comes back at the exact unit width, and runs
//! dropped by the silent classification arm are gone. Re-lexing the
//! rendered text yields the same token stream.

use crate::option::lexing::indentation::INDENT_UNIT;
use crate::option::token::Token;

/// Trait for converting a token to its source-text representation.
pub trait ToOptionString {
    fn to_option_string(&self) -> String;
}

impl ToOptionString for Token {
    fn to_option_string(&self) -> String {
        match self {
            Token::Symbol(text) => text.clone(),
            Token::StringLim => "\"".to_string(),
            Token::String(text) => text.clone(),
            Token::Number(text) => text.clone(),
            Token::Apply(spaces) => " ".repeat(*spaces),
            Token::Comma(spaces) => format!(",{}", " ".repeat(*spaces)),
            Token::Newline(spaces) => format!("\n{}", " ".repeat(*spaces)),
            Token::Indent(level) => format!("\n{}", " ".repeat(INDENT_UNIT * level)),
            Token::Outdent(level) => format!("\n{}", " ".repeat(INDENT_UNIT * level)),
            Token::Tab => "\t".to_string(),
            // Synthetic terminator; not part of the source text.
            Token::Eop => String::new(),
        }
    }
}

/// Render a token stream back to canonical source text.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(ToOptionString::to_option_string).collect()
}

/// Serialize a token stream to pretty-printed JSON.
pub fn to_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
