//! `FileName`: a string proven free of forbidden file-name characters.
//!
//! A `FileName` is built either by encoding arbitrary text ([`FileName::from_text`],
//! which cannot fail) or by validating a string that is already supposed to be an
//! encoded name ([`FileName::parse`], which rejects forbidden characters). Either
//! way the stored string is safe to use as a single path component, and
//! [`FileName::to_text`] recovers the text it stands for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::{RecognitionError, Result};
use crate::markers::find_forbidden;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    /// Encode arbitrary text into a file name.
    pub fn from_text(text: &str) -> Self {
        FileName(encode(text))
    }

    /// Accept `name` as an already-encoded file name.
    ///
    /// Fails with [`RecognitionError::ForbiddenCharacter`] on the first character
    /// that an encoded name can never contain.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if let Some((offset, ch)) = find_forbidden(&name) {
            tracing::debug!(?ch, offset, "rejected file name");
            return Err(RecognitionError::ForbiddenCharacter { ch, offset });
        }
        Ok(FileName(name))
    }

    /// The encoded, filesystem-legal spelling.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Decode back to the text this name represents.
    pub fn to_text(&self) -> String {
        decode(&self.0)
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FileName {
    type Err = RecognitionError;

    fn from_str(s: &str) -> Result<Self> {
        FileName::parse(s)
    }
}

impl TryFrom<String> for FileName {
    type Error = RecognitionError;

    fn try_from(value: String) -> Result<Self> {
        FileName::parse(value)
    }
}

impl TryFrom<&str> for FileName {
    type Error = RecognitionError;

    fn try_from(value: &str) -> Result<Self> {
        FileName::parse(value)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> String {
        name.0
    }
}
