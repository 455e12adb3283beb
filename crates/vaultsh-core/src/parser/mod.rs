//! Command line parser.
//!
//! Splits a line into a verb, an optional sub-verb, the free-text remainder
//! and its [`Flags`]:
//!
//! ```text
//! account create --vault "My Vault" --name Gmail
//! ^^^^^^^ ^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ flags
//! verb    sub-verb
//! ```
//!
//! No semantic validation happens here; the router decides what a verb means.

mod flags;
mod lexer;

pub use flags::Flags;
pub use lexer::{Lexer, Token};

// =============================================================================
// Parsed Line
// =============================================================================

/// Structured form of one submitted line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// First whitespace-separated token, original case
    pub verb: String,
    /// Second whitespace-separated token, original case
    pub sub_verb: Option<String>,
    /// Everything after the verb, trimmed
    pub remainder: String,
    pub flags: Flags,
}

// =============================================================================
// Public API
// =============================================================================

/// Parse a raw line. Returns `None` for blank input.
pub fn parse_line(input: &str) -> Option<ParsedLine> {
    let trimmed = input.trim();
    let mut words = trimmed.split_whitespace();
    let verb = words.next()?.to_string();
    let sub_verb = words.next().map(str::to_string);
    let remainder = trimmed[verb.len()..].trim().to_string();

    let tokens = Lexer::new(&remainder).tokenize();
    let flags = Flags::from_tokens(&tokens);

    Some(ParsedLine {
        verb,
        sub_verb,
        remainder,
        flags,
    })
}

// =============================================================================
// Tests
// =============================================================================
