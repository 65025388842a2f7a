//! Base tokenization for the option lexer
//!
//! This module provides the raw tokenization using the logos lexer library:
//! the trimmed source string becomes a stream of character-class runs with
//! byte spans. No state is threaded here; indentation, string bodies and
//! the end-of-program marker are the scanner's business.
//!
//! The classes follow the dispatch of the notation: a comma, quote, or digit
//! only opens its own token at the start of a word. Mid-word they are
//! ordinary symbol characters, which is why [`RawToken::Word`] constrains
//! only its first character and then runs to the next whitespace.

use logos::Logos;

/// Raw character-class tokens over the trimmed source.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    /// Maximal run of plain space characters.
    #[regex(r" +")]
    Spaces,

    #[token(",")]
    Comma,

    #[token("\"")]
    Quote,

    /// Maximal run of ASCII digits.
    #[regex(r"[0-9]+")]
    Digits,

    #[token("\r")]
    Return,

    #[token("\n")]
    Newline,

    #[token("\t")]
    Tab,

    /// Maximal run of non-whitespace characters that does not start with a
    /// comma, quote, or digit.
    #[regex(r#"[^ \t\r\n,"0-9][^ \t\r\n]*"#)]
    Word,
}

/// Tokenize source text into raw tokens with their byte spans.
///
/// The scanner slices payload text out of the source through these spans,
/// so the stream must cover every character of the input. Characters logos
/// cannot match are skipped, the same silent absorption the scanner applies
/// to unhandled control characters; with the classes above this does not
/// happen for any real input.
pub fn tokenize(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
