//! Scan loop and collectors for the option lexer
//!
//! The scanner walks the raw token stream left to right with an explicit
//! cursor, dispatching on the class of the current raw token and delegating
//! to one collector per class. Collectors only ever advance the cursor;
//! only the indentation collector touches the level. After the loop, the
//! terminal invariant is checked once: the cursor must sit exactly on the
//! end of the stream and the indent level must have returned to zero.

use crate::option::lexing::base_tokenization::{self, RawToken};
use crate::option::lexing::errors::LexError;
use crate::option::lexing::{indentation, EOP_MARKER};
use crate::option::token::Token;

pub(crate) struct Scanner<'a> {
    source: &'a str,
    raw: Vec<(RawToken, logos::Span)>,
    pos: usize,
    level: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str, raw: Vec<(RawToken, logos::Span)>) -> Self {
        Scanner {
            source,
            raw,
            pos: 0,
            level: 0,
            tokens: Vec::new(),
        }
    }

    /// Run the dispatch loop to exhaustion, then check the terminal
    /// invariant.
    pub(crate) fn scan(mut self) -> Result<Vec<Token>, LexError> {
        while self.pos < self.raw.len() {
            match self.raw[self.pos].0 {
                RawToken::Spaces => self.collect_whitespace(),
                RawToken::Comma => self.collect_delimiter(),
                RawToken::Quote => self.collect_string(),
                RawToken::Digits => self.collect_number(),
                RawToken::Return => self.collect_end_of_program(),
                RawToken::Newline => self.collect_indentation()?,
                RawToken::Tab => self.collect_special_character(),
                RawToken::Word => self.collect_symbol(),
            }
        }

        if self.level != 0 || self.pos != self.raw.len() {
            return Err(LexError::FormatInvariantViolation {
                indent_level: self.level,
                cursor: self.pos,
                input_len: self.raw.len(),
            });
        }
        Ok(self.tokens)
    }

    /// Source text covered by the raw token at `idx`.
    fn slice(&self, idx: usize) -> &'a str {
        &self.source[self.raw[idx].1.clone()]
    }

    /// Length of a `Spaces` run at `idx`, or zero if `idx` holds anything
    /// else (including nothing).
    fn space_run_at(&self, idx: usize) -> usize {
        match self.raw.get(idx) {
            Some((RawToken::Spaces, span)) => span.len(),
            _ => 0,
        }
    }

    fn collect_symbol(&mut self) {
        let text = self.slice(self.pos).to_string();
        self.tokens.push(Token::Symbol(text));
        self.pos += 1;
    }

    fn collect_whitespace(&mut self) {
        let run = self.slice(self.pos).len();
        self.tokens.push(Token::Apply(run));
        self.pos += 1;
    }

    fn collect_number(&mut self) {
        let text = self.slice(self.pos).to_string();
        self.tokens.push(Token::Number(text));
        self.pos += 1;
    }

    /// The comma and the space run right behind it form one lexical event;
    /// that whitespace is never tokenized separately.
    fn collect_delimiter(&mut self) {
        self.pos += 1;
        let run = self.space_run_at(self.pos);
        if run > 0 {
            self.pos += 1;
        }
        self.tokens.push(Token::Comma(run));
    }

    /// Strings are delimiter, raw body, delimiter. The closing quote is
    /// searched for character-wise in the source, not in the raw stream:
    /// a word token swallows a quote glued to its tail, so the stream may
    /// hold no `Quote` at the position the body ends. Both delimiters are
    /// consumed unconditionally; when the closing quote is missing the
    /// cursor overshoots the stream and the terminal invariant reports it.
    fn collect_string(&mut self) {
        self.tokens.push(Token::StringLim);
        let body_start = self.raw[self.pos].1.end;
        self.pos += 1;

        let body_end = match self.source[body_start..].find('"') {
            Some(offset) => body_start + offset,
            None => self.source.len(),
        };
        self.tokens
            .push(Token::String(self.source[body_start..body_end].to_string()));

        self.tokens.push(Token::StringLim);
        self.resync_after(body_end + 1);
    }

    /// Park the cursor on the first raw token that starts at or after byte
    /// `at`. A token cut in the middle is re-lexed from the cut onward so
    /// scanning resumes character-exact. An `at` past the end of the source
    /// overshoots the stream by one, which the terminal invariant reports.
    fn resync_after(&mut self, at: usize) {
        if at > self.source.len() {
            self.pos = self.raw.len() + 1;
            return;
        }
        while self.pos < self.raw.len() && self.raw[self.pos].1.end <= at {
            self.pos += 1;
        }
        if self.pos < self.raw.len() && self.raw[self.pos].1.start < at {
            let tail = base_tokenization::tokenize(&self.source[at..]);
            self.raw.truncate(self.pos);
            self.raw
                .extend(tail.into_iter().map(|(t, span)| (t, span.start + at..span.end + at)));
        }
    }

    /// Tab produces a token; any other raw token routed here would be
    /// absorbed without one, a fallback for otherwise unhandled control
    /// characters.
    fn collect_special_character(&mut self) {
        if self.raw[self.pos].0 == RawToken::Tab {
            self.tokens.push(Token::Tab);
        }
        self.pos += 1;
    }

    /// Drop the carriage return, then compare the next characters of the
    /// source against the sentinel. On a match the program is over: emit
    /// EOP, consume exactly the marker, and reset the level to its terminal
    /// state. A stray return with anything else behind it stays dropped and
    /// scanning continues, since only the trimmer writes the
    /// return-plus-marker pair.
    fn collect_end_of_program(&mut self) {
        let after_return = self.raw[self.pos].1.end;
        self.pos += 1;
        if self.source[after_return..].starts_with(EOP_MARKER) {
            self.tokens.push(Token::Eop);
            self.level = 0;
            self.resync_after(after_return + EOP_MARKER.len());
        }
    }

    /// Drop the newline, capture the following space run, and classify it
    /// against the current level. The run is consumed no matter which shape
    /// fires, including none: a run matching no shape produces no lexical
    /// event at all.
    fn collect_indentation(&mut self) -> Result<(), LexError> {
        self.pos += 1;
        let source = self.source;
        let run = match self.raw.get(self.pos) {
            Some((RawToken::Spaces, span)) => {
                let span = span.clone();
                self.pos += 1;
                &source[span]
            }
            _ => "",
        };

        if indentation::is_indent(run, self.level) {
            let next = indentation::indent_size(run, self.level)?;
            self.tokens.push(Token::Indent(next));
            self.level = next;
        } else if indentation::is_outdent(run, self.level) {
            let next = indentation::outdent_size(run, self.level)?;
            self.tokens.push(Token::Outdent(next));
            self.level = next;
        } else if indentation::is_aligned(run, self.level) {
            self.tokens.push(Token::Newline(run.len()));
        }
        // No shape matched: the newline and the run are dropped silently.
        Ok(())
    }
}
