//! Decoder: encoded file name → original text.
//!
//! The decoder folds the [`Scanner`](crate::scanner::Scanner) output left to right
//! with one piece of state, the pending-escape flag:
//!
//! - After an escape token, the next token is copied as its encoded spelling
//!   (`_(STAR)` → `(STAR)`, `__` → `_`).
//! - Otherwise markers translate to their characters, the backslash token to a
//!   newline, and literal runs are copied unchanged.
//!
//! A trailing escape with nothing after it is kept as a literal `_`.
//!
//! Decoding is total: any string decodes to some text. Only strings produced by
//! [`crate::encode`] are guaranteed to round-trip.

use crate::markers::ESCAPE;
use crate::scanner::{Scanner, Token};

/// Decode an encoded file name back into the text it was produced from.
///
/// ```
/// use fsname_core::decode;
/// assert_eq!(decode("a(STAR)b"), "a*b");
/// assert_eq!(decode("_(STAR)"), "(STAR)");
/// assert_eq!(decode("__"), "_");
/// assert_eq!(decode("a\\b"), "a\nb");
/// ```
pub fn decode(name: &str) -> String {
    let mut text = String::with_capacity(name.len());
    let mut escaped = false;

    for token in Scanner::new(name) {
        if escaped {
            text.push_str(token.source());
            escaped = false;
            continue;
        }
        match token {
            Token::Escape => escaped = true,
            Token::Marker(marker) => text.push(marker.literal()),
            Token::NewLine => text.push('\n'),
            Token::Literal(run) => text.push_str(run),
        }
    }

    if escaped {
        text.push(ESCAPE);
    }
    text
}
