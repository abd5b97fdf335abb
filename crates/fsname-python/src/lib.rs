//! # fsname-python
//!
//! Python bindings for fsname-core, built with PyO3.
//!
//! Exposes the following functions to Python as the `fsname` module:
//!
//! - `encode(text)` -- text -> filesystem-legal file name
//! - `decode(name, strict=False)` -- file name -> text
//! - `is_legal(name)` -- whether a name has no forbidden characters
//! - `tokens(name)` -- scanner output as a JSON string

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Encode arbitrary text into a filesystem-legal file name.
///
/// Args:
///     text: Any string, including newlines and characters such as `*` or `/`.
///
/// Returns:
///     The encoded file name.
#[pyfunction]
fn encode(text: &str) -> String {
    fsname_core::encode(text)
}

/// Decode a file name back into the text it was encoded from.
///
/// Args:
///     name: An encoded file name.
///     strict: Reject names containing forbidden characters instead of
///         decoding them leniently.
///
/// Returns:
///     The decoded text.
///
/// Raises:
///     ValueError: If `strict` is set and the name contains a forbidden character.
#[pyfunction]
#[pyo3(signature = (name, strict=false))]
fn decode(name: &str, strict: bool) -> PyResult<String> {
    if strict {
        fsname_core::FileName::parse(name)
            .map(|name| name.to_text())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    } else {
        Ok(fsname_core::decode(name))
    }
}

/// Whether `name` contains no forbidden file-name characters.
#[pyfunction]
fn is_legal(name: &str) -> bool {
    fsname_core::is_legal(name)
}

/// Tokenize an encoded file name, returned as a JSON string.
///
/// Each token is an object with a `kind` field (`literal`, `marker`, `escape`,
/// `new_line`) and, for literals and markers, a `value` field.
#[pyfunction]
fn tokens(name: &str) -> PyResult<String> {
    serde_json::to_string(&fsname_core::tokenize(name))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The `fsname` Python module, implemented in Rust via PyO3.
#[pymodule]
fn fsname(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(is_legal, m)?)?;
    m.add_function(wrap_pyfunction!(tokens, m)?)?;
    Ok(())
}
