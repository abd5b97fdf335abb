//! # fsname-core
//!
//! Lossless conversion between arbitrary text and a string that is legal as a single
//! file-name component on common filesystems.
//!
//! Nine characters (`* | \ : " < > ? /`) are replaced by parenthesized markers such as
//! `(STAR)`, and newline by a single backslash. The underscore is the escape
//! character: it is doubled in the encoded form, and it marks marker look-alikes
//! that were part of the original text so they survive decoding unchanged.
//!
//! ## Quick start
//!
//! ```rust
//! use fsname_core::{decode, encode};
//!
//! let name = encode("star*pipe|bslash\\.slash/colon:");
//! assert_eq!(name, "star(STAR)pipe(PIPE)bslash(BSLASH).slash(SLASH)colon(COLON)");
//! assert_eq!(decode(&name), "star*pipe|bslash\\.slash/colon:");
//!
//! // Text that already looks like a marker is escaped, not translated.
//! assert_eq!(encode("star_(STAR)pipe(PIPE)"), "star___(STAR)pipe_(PIPE)");
//! assert_eq!(decode("star___(STAR)pipe_(PIPE)"), "star_(STAR)pipe(PIPE)");
//! ```
//!
//! ## Modules
//!
//! - [`markers`] — the Marker Table and file-name legality checks
//! - [`encoder`] — text → file name
//! - [`scanner`] — longest-match tokenizer over encoded names
//! - [`decoder`] — file name → text
//! - [`filename`] — `FileName`, a validated encoded name
//! - [`error`] — `RecognitionError`

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod filename;
pub mod markers;
pub mod scanner;

pub use decoder::decode;
pub use encoder::encode;
pub use error::RecognitionError;
pub use filename::FileName;
pub use markers::{find_forbidden, is_forbidden, is_legal, Marker, ESCAPE};
pub use scanner::{tokenize, Scanner, Token};
