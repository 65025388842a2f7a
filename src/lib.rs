//! # option-lexer
//!
//! Tokenizer for the option configuration notation: a small, line-oriented
//! format in which indentation carries semantic nesting. A document like
//!
//!     pilot
//!       name "John Doe"
//!     co-pilot
//!       name "Joanna Dole"
//!       age 32
//!
//! becomes a flat stream of typed tokens (SYMBOL, STRING, NUMBER, INDENT,
//! OUTDENT, ...) for a downstream parser to consume. The lexer threads a
//! single indent level through the whole scan and only succeeds when that
//! level has unwound back to zero by the end of the input.
//!
//! Lexing happens in two stages: a stateless base tokenization that groups
//! characters into class runs (see [`option::lexing::base_tokenization`]),
//! and a stateful scanner that collects those runs into semantic tokens
//! while tracking indentation (see [`option::lexing`]). The contract is a
//! single entry point, [`option::lexing::tokenize`]: the whole input either
//! lexes or the call fails, with no partial result.

pub mod option;
