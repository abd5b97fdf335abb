//! Error types for file-name recognition.

use thiserror::Error;

/// Raised when a string offered as an encoded file name cannot be one.
///
/// [`crate::encode`] and [`crate::decode`] never fail; this error only comes from
/// constructing a [`crate::FileName`] out of caller-supplied text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    /// The string contains a character that no encoded file name may contain.
    #[error("forbidden character {ch:?} at byte offset {offset}")]
    ForbiddenCharacter { ch: char, offset: usize },
}

/// Convenience alias used throughout fsname-core.
pub type Result<T> = std::result::Result<T, RecognitionError>;
