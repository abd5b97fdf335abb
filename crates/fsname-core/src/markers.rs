//! The Marker Table: forbidden file-name characters and the tokens that stand in for them.
//!
//! Nine characters are rejected by common filesystems (Windows being the strictest)
//! and are replaced by parenthesized ASCII markers. Newline is special-cased: it is
//! written as a single backslash, which is only safe because a literal backslash is
//! itself always written as `(BSLASH)`.
//!
//! | Literal | Token        |
//! |---------|--------------|
//! | `*`     | `(STAR)`     |
//! | `\|`    | `(PIPE)`     |
//! | `\`     | `(BSLASH)`   |
//! | `:`     | `(COLON)`    |
//! | `"`     | `(QUOT)`     |
//! | `<`     | `(LANGLE)`   |
//! | `>`     | `(RANGLE)`   |
//! | `?`     | `(QUESTION)` |
//! | `/`     | `(SLASH)`    |
//! | newline | `\`          |
//!
//! The table order is significant: the encoder walks it in this order for both the
//! look-alike escaping pass and the substitution pass.

use serde::Serialize;

/// The escape character. Marks the next scanned unit as literal text.
pub const ESCAPE: char = '_';

/// Encoded spelling of the escape character as a token.
pub const ESCAPE_TOKEN: &str = "_";

/// Encoded spelling of a newline.
pub const NEWLINE_TOKEN: &str = "\\";

/// A forbidden file-name character and its parenthesized marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Star,
    Pipe,
    BSlash,
    Colon,
    Quot,
    LAngle,
    RAngle,
    Question,
    Slash,
}

impl Marker {
    /// Every marker, in table order.
    pub const ALL: [Marker; 9] = [
        Marker::Star,
        Marker::Pipe,
        Marker::BSlash,
        Marker::Colon,
        Marker::Quot,
        Marker::LAngle,
        Marker::RAngle,
        Marker::Question,
        Marker::Slash,
    ];

    /// The forbidden character this marker represents.
    pub const fn literal(self) -> char {
        match self {
            Marker::Star => '*',
            Marker::Pipe => '|',
            Marker::BSlash => '\\',
            Marker::Colon => ':',
            Marker::Quot => '"',
            Marker::LAngle => '<',
            Marker::RAngle => '>',
            Marker::Question => '?',
            Marker::Slash => '/',
        }
    }

    /// The marker's spelling inside an encoded file name.
    pub const fn token(self) -> &'static str {
        match self {
            Marker::Star => "(STAR)",
            Marker::Pipe => "(PIPE)",
            Marker::BSlash => "(BSLASH)",
            Marker::Colon => "(COLON)",
            Marker::Quot => "(QUOT)",
            Marker::LAngle => "(LANGLE)",
            Marker::RAngle => "(RANGLE)",
            Marker::Question => "(QUESTION)",
            Marker::Slash => "(SLASH)",
        }
    }

    pub fn from_literal(c: char) -> Option<Marker> {
        Marker::ALL.into_iter().find(|m| m.literal() == c)
    }

    pub fn from_token(token: &str) -> Option<Marker> {
        Marker::ALL.into_iter().find(|m| m.token() == token)
    }
}

/// Whether `c` may not appear in an encoded file name.
///
/// A backslash is allowed even though it is a marker literal: in an encoded name
/// it is the newline token.
pub fn is_forbidden(c: char) -> bool {
    match c {
        '\n' => true,
        '\\' => false,
        _ => Marker::from_literal(c).is_some(),
    }
}

/// Locate the first forbidden character in `name`, returning its byte offset.
pub fn find_forbidden(name: &str) -> Option<(usize, char)> {
    name.char_indices().find(|&(_, c)| is_forbidden(c))
}

/// Whether `name` contains no forbidden characters.
///
/// Everything produced by [`crate::encode`] is legal.
pub fn is_legal(name: &str) -> bool {
    find_forbidden(name).is_none()
}
