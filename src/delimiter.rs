//! Dynamic delimiter sets.
//!
//! The effective delimiter set is an ordered list of literal tokens: the
//! defaults (comma and newline) plus any tokens declared in a header. The
//! tokens are escaped and combined into a single alternation so that
//! pattern-special characters like `*` or `.` match literally. The set is
//! built once per call; nothing is cached across calls.

use regex::Regex;

use crate::error::{SumError, SumResult};

/// Separators that are always active, header or not.
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// An ordered set of literal delimiter tokens compiled into one matcher.
#[derive(Debug, Clone)]
pub struct DelimiterSet {
    tokens: Vec<String>,
    matcher: Regex,
}

impl DelimiterSet {
    /// The default set: comma and newline.
    pub fn new() -> SumResult<Self> {
        Self::with_declared(Vec::new())
    }

    /// The default set extended with tokens declared in a header.
    ///
    /// Tokens are matched longest first (stable for equal lengths), so a
    /// declared token that extends another is always matched whole.
    pub fn with_declared(declared: Vec<String>) -> SumResult<Self> {
        let mut tokens: Vec<String> = DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect();
        tokens.extend(declared);
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));

        let pattern = tokens
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&pattern)
            .map_err(|e| SumError::internal(format!("invalid delimiter pattern: {}", e)))?;

        Ok(Self { tokens, matcher })
    }

    /// The tokens in matching order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Splits `input` on every occurrence of every token in the set,
    /// preserving fragment order.
    pub fn split<'a>(&'a self, input: &'a str) -> impl Iterator<Item = &'a str> {
        self.matcher.split(input)
    }
}
