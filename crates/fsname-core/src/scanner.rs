//! Token Scanner: splits an encoded file name into markers, escapes, and literal runs.
//!
//! At each position the scanner tries every spelling in the token alphabet and takes
//! the longest one that matches. Characters that start no token are collected into a
//! literal run, which ends where the next token begins or at end of input.
//!
//! The escape character is emitted as its own token. Deciding what it does to the
//! following unit is the decoder's job.

use serde::Serialize;

use crate::markers::{Marker, ESCAPE_TOKEN, NEWLINE_TOKEN};

/// One unit of an encoded file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token<'a> {
    /// A parenthesized marker such as `(STAR)`.
    Marker(Marker),
    /// The single backslash that encodes a newline.
    NewLine,
    /// The escape character `_`.
    Escape,
    /// A maximal run of characters that start no token. Never empty.
    Literal(&'a str),
}

impl<'a> Token<'a> {
    /// The token's spelling in the encoded file name.
    pub fn source(&self) -> &'a str {
        match *self {
            Token::Marker(marker) => marker.token(),
            Token::NewLine => NEWLINE_TOKEN,
            Token::Escape => ESCAPE_TOKEN,
            Token::Literal(text) => text,
        }
    }
}

/// Every fixed token spelling, markers first in table order. Order only matters
/// for breaking ties between equal-length matches, which this alphabet never has.
const ALPHABET: [(&str, Token<'static>); 11] = [
    (Marker::Star.token(), Token::Marker(Marker::Star)),
    (Marker::Pipe.token(), Token::Marker(Marker::Pipe)),
    (Marker::BSlash.token(), Token::Marker(Marker::BSlash)),
    (Marker::Colon.token(), Token::Marker(Marker::Colon)),
    (Marker::Quot.token(), Token::Marker(Marker::Quot)),
    (Marker::LAngle.token(), Token::Marker(Marker::LAngle)),
    (Marker::RAngle.token(), Token::Marker(Marker::RAngle)),
    (Marker::Question.token(), Token::Marker(Marker::Question)),
    (Marker::Slash.token(), Token::Marker(Marker::Slash)),
    (NEWLINE_TOKEN, Token::NewLine),
    (ESCAPE_TOKEN, Token::Escape),
];

/// Iterator over the tokens of an encoded file name.
///
/// ```
/// use fsname_core::{Marker, Scanner, Token};
/// let tokens: Vec<Token> = Scanner::new("a_(STAR)").collect();
/// assert_eq!(
///     tokens,
///     vec![Token::Literal("a"), Token::Escape, Token::Marker(Marker::Star)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let input = self.input;
        let start = self.pos;
        let mut cursor = start;
        while let Some(c) = input[cursor..].chars().next() {
            if let Some((spelling, token)) = longest_match(&input[cursor..]) {
                if cursor > start {
                    // Flush the run first; the token is matched again on the next call.
                    self.pos = cursor;
                    return Some(Token::Literal(&input[start..cursor]));
                }
                self.pos = cursor + spelling.len();
                return Some(token);
            }
            cursor += c.len_utf8();
        }
        self.pos = cursor;
        if cursor > start {
            Some(Token::Literal(&input[start..cursor]))
        } else {
            None
        }
    }
}

/// The longest alphabet entry that `rest` starts with. Earlier entries win ties.
fn longest_match(rest: &str) -> Option<(&'static str, Token<'static>)> {
    let mut best: Option<(&'static str, Token<'static>)> = None;
    for (spelling, token) in ALPHABET {
        if !rest.starts_with(spelling) {
            continue;
        }
        match best {
            Some((current, _)) if current.len() >= spelling.len() => {}
            _ => best = Some((spelling, token)),
        }
    }
    best
}

/// Scan `name` into a vector of tokens.
pub fn tokenize(name: &str) -> Vec<Token<'_>> {
    Scanner::new(name).collect()
}

/// The full token alphabet's spellings, in scan-priority order.
pub fn alphabet() -> impl Iterator<Item = &'static str> {
    ALPHABET.into_iter().map(|(spelling, _)| spelling)
}
