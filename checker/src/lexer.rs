//! Splitting a statement line into tokens.
//!
//! A token is any run of characters other than space and horizontal tab.
//! Delimiter runs of any length separate tokens, and leading or trailing
//! delimiters never produce empty tokens:
//!
//! ```
//! # use asm_checker::lexer::Tokenizer;
//! let tokens = Tokenizer::new("  LOOP\tADD  AREG DATA1 ", 10)
//!     .map(|token| token.src)
//!     .collect::<Vec<_>>();
//! assert_eq!(tokens, vec!["LOOP", "ADD", "AREG", "DATA1"]);
//! ```
//!
//! At most `max_tokens` tokens are produced per line. Anything after the last
//! token taken is **discarded**; [`Statement::truncated`] reports when that happened
//! so the caller can warn about it.
//!
//! Line terminators are the line source's business and should already be gone.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::{Matches, Regex};

/// Token cap used when nothing else is configured.
pub const DEFAULT_MAX_TOKENS: usize = 10;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^ \t]+").expect("Invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'input> {
    pub src: &'input str,
    /// Position of the token within its statement, from 0.
    pub index: usize,
    /// Byte offsets into the line.
    pub start: usize,
    pub end: usize,
}

/// Lazily yields the tokens of one line. Build a new one for every pass.
pub struct Tokenizer<'input> {
    matches: Matches<'static, 'input>,
    index: usize,
    max_tokens: usize,
}

impl<'input> Tokenizer<'input> {
    pub fn new(line: &'input str, max_tokens: usize) -> Tokenizer<'input> {
        Tokenizer {
            matches: TOKEN.find_iter(line),
            index: 0,
            max_tokens,
        }
    }

    /// Consumes the tokenizer, returning whether any text remains past the cap.
    fn has_remainder(mut self) -> bool {
        self.matches.next().is_some()
    }
}

impl<'input> Iterator for Tokenizer<'input> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.max_tokens {
            return None;
        }
        let found = self.matches.next()?;
        let token = Token {
            src: found.as_str(),
            index: self.index,
            start: found.start(),
            end: found.end(),
        };
        self.index += 1;
        Some(token)
    }
}

/// The tokens of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'input> {
    tokens: Vec<Token<'input>>,
    truncated: bool,
}

impl<'input> Statement<'input> {
    pub fn tokenize(line: &'input str, max_tokens: usize) -> Statement<'input> {
        let mut tokenizer = Tokenizer::new(line, max_tokens);
        let tokens = tokenizer.by_ref().collect::<Vec<_>>();
        let truncated = tokenizer.has_remainder();
        Statement { tokens, truncated }
    }

    pub fn tokens(&self) -> &[Token<'input>] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether tokens past the cap were dropped.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn texts<'s>(&'s self) -> impl Iterator<Item = &'input str> + 's {
        self.tokens.iter().map(|token| token.src)
    }

    /// The tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.texts().join(" ")
    }

    /// Byte range covering every token, or an empty range for a blank line.
    pub fn span(&self) -> (usize, usize) {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => (first.start, last.end),
            _ => (0, 0),
        }
    }
}
