//! Recognizers for Prodel declaration headers and directives
//!
//! All matching here is purely textual: each recognizer either matches one
//! line or it does not, and no recognizer knows what came on other lines.
//! Keywords are case-insensitive. Identifiers start with a letter, caret,
//! or underscore and continue with letters, digits, carets, or underscores.

use crate::pattern;

/// Captures from a `proc` or `subproc` header line.
#[derive(Debug, Eq, PartialEq)]
pub struct Header<'i> {
    /// Optional return-type annotation preceding the keyword.
    pub returns: Option<&'i str>,
    pub name: &'i str,
}

/// `[int] proc Name ...` anchored at the start of the line.
pub fn procedure(line: &str) -> Option<Header<'_>> {
    let found = pattern!(r"(?i)^\s*(?:([a-z^_][a-z0-9^_]*)\s+)?proc\s+([a-z^_][a-z0-9^_]*)")
        .captures(line)?;
    Some(Header {
        returns: found
            .get(1)
            .map(|m| m.as_str()),
        name: found
            .get(2)
            .map(|m| m.as_str())?,
    })
}

/// `[int] subproc Name ...` anchored at the start of the line.
pub fn subprocedure(line: &str) -> Option<Header<'_>> {
    let found = pattern!(r"(?i)^\s*(?:([a-z^_][a-z0-9^_]*)\s+)?subproc\s+([a-z^_][a-z0-9^_]*)")
        .captures(line)?;
    Some(Header {
        returns: found
            .get(1)
            .map(|m| m.as_str()),
        name: found
            .get(2)
            .map(|m| m.as_str())?,
    })
}

/// Whole-word `forward` or `external`, anywhere on the line. Only consulted
/// once a declaration header has already been found; the match marks the
/// declaration as having no body.
pub fn forward_marker(line: &str) -> Option<String> {
    pattern!(r"(?i)\b(external|forward)\b")
        .captures(line)
        .map(|found| found[1].to_ascii_lowercase())
}

/// `?section Name`, only as the first content on the line.
pub fn section(line: &str) -> Option<&str> {
    pattern!(r"(?i)^\s*\?section\s+([a-z^_][a-z0-9^_]*)")
        .captures(line)
        .and_then(|found| {
            found
                .get(1)
                .map(|m| m.as_str())
        })
}

/// `?page "Heading"`, only as the first content on the line. A bare `?page`
/// with no heading produces no symbol, so it is not a match here.
pub fn page(line: &str) -> Option<&str> {
    pattern!(r#"(?i)^\s*\?page\s+"([^"]*)""#)
        .captures(line)
        .and_then(|found| {
            found
                .get(1)
                .map(|m| m.as_str())
        })
}
