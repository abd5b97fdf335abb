//! Encoder: arbitrary text → filesystem-legal file name.
//!
//! Encoding runs four whole-string passes, in order. Each pass completes before the
//! next starts, because later passes introduce escape characters and markers that
//! earlier passes must not see:
//!
//! 1. Double every escape character (`_` → `__`).
//! 2. Escape marker look-alikes already present in the text (`(STAR)` → `_(STAR)`).
//! 3. Replace each forbidden character by its marker (`*` → `(STAR)`).
//! 4. Replace each newline by a single backslash.
//!
//! # Example
//! ```
//! use fsname_core::encode;
//! assert_eq!(encode("a*b"), "a(STAR)b");
//! assert_eq!(encode("(STAR)"), "_(STAR)");
//! assert_eq!(encode("a\nb"), "a\\b");
//! ```

use crate::markers::{Marker, ESCAPE, NEWLINE_TOKEN};

/// Encode `text` into a string free of forbidden file-name characters.
///
/// Total: every input produces an output, and [`crate::decode`] restores the input
/// exactly.
pub fn encode(text: &str) -> String {
    let doubled = double_escapes(text);
    let escaped = escape_look_alikes(doubled);
    let substituted = substitute_markers(escaped);
    substitute_newlines(substituted)
}

/// Pass 1: every `_` becomes `__`.
fn double_escapes(text: &str) -> String {
    text.replace(ESCAPE, "__")
}

/// Pass 2: prefix user-authored marker spellings with one escape character so the
/// decoder keeps them as text.
fn escape_look_alikes(mut text: String) -> String {
    for marker in Marker::ALL {
        let token = marker.token();
        if text.contains(token) {
            text = text.replace(token, &escaped(token));
        }
    }
    text
}

/// Pass 3: forbidden characters become their markers.
fn substitute_markers(mut text: String) -> String {
    for marker in Marker::ALL {
        let literal = marker.literal();
        if text.contains(literal) {
            text = text.replace(literal, marker.token());
        }
    }
    text
}

/// Pass 4: newlines become a single backslash. Runs after pass 3 so that these
/// backslashes are not themselves replaced by `(BSLASH)`.
fn substitute_newlines(text: String) -> String {
    if text.contains('\n') {
        text.replace('\n', NEWLINE_TOKEN)
    } else {
        text
    }
}

fn escaped(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 1);
    out.push(ESCAPE);
    out.push_str(token);
    out
}
