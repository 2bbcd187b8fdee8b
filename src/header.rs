//! # Delimiter-Declaration Header Parsing
//!
//! An input may open with the two-character marker `//`, followed by a
//! delimiter specification and a line separator:
//!
//! * `//;\n1;2` — the whole specification is one literal token, and
//! * `//[***][%]\n1***2%3` — one or more bracketed groups, each group's
//!   inner text one literal token, however long, concatenated with nothing
//!   between them.
//!
//! The default separators (comma and newline) stay active in both forms;
//! the header only ever extends the delimiter set.
//!
//! ## Malformed Headers
//!
//! The reference behavior leaves malformed headers undefined; here they are
//! rejected: an empty specification, a marker with no following line
//! separator, or a specification containing `[` that is not a well-formed
//! sequence of bracketed groups all fail with
//! [`SumError::MalformedHeader`].

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, map},
    error::{context, VerboseError},
    multi::many1,
    sequence::delimited,
    IResult,
};

use crate::error::{SumError, SumResult};

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Marker that opens a delimiter-declaration header.
pub const HEADER_MARKER: &str = "//";

/// A recognized header: the declared delimiter tokens and the remainder of
/// the input (the number sequence).
#[derive(Debug, Clone, PartialEq)]
pub struct Header<'a> {
    pub tokens: Vec<String>,
    pub numbers: &'a str,
}

/// Splits off the delimiter-declaration header, if present.
///
/// Returns `Ok(None)` when the input does not start with [`HEADER_MARKER`];
/// the caller then treats the whole input as the number sequence.
#[tracing::instrument(level = "debug", skip(input))]
pub fn extract_header(input: &str) -> SumResult<Option<Header<'_>>> {
    let after_marker = match input.strip_prefix(HEADER_MARKER) {
        Some(rest) => rest,
        None => return Ok(None),
    };

    let separator = match after_marker.find('\n') {
        Some(pos) => pos,
        None => return Err(malformed(after_marker, "missing line separator")),
    };
    let spec = &after_marker[..separator];
    let numbers = &after_marker[separator + 1..];

    if spec.is_empty() {
        return Err(malformed(spec, "empty delimiter specification"));
    }

    let tokens = parse_spec(spec)?;
    Ok(Some(Header { tokens, numbers }))
}

/// Parses the specification segment between the marker and the separator.
///
/// A specification containing `[` must consist entirely of bracketed
/// groups; anything else is one literal token.
fn parse_spec(spec: &str) -> SumResult<Vec<String>> {
    if !spec.contains('[') {
        return Ok(vec![spec.to_string()]);
    }

    match all_consuming(parse_bracketed_tokens)(spec) {
        Ok((_, tokens)) => Ok(tokens),
        Err(_) => Err(malformed(spec, "unbalanced bracketed groups")),
    }
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_bracketed_tokens(input: &str) -> ParserResult<Vec<String>> {
    context(
        "bracketed delimiters",
        many1(map(
            delimited(char('['), take_while1(|c| c != ']'), char(']')),
            |token: &str| token.to_string(),
        )),
    )(input)
}

fn malformed(header: &str, reason: &str) -> SumError {
    SumError::MalformedHeader {
        header: header.to_string(),
        reason: reason.to_string(),
    }
}
