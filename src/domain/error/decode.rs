// SPDX-License-Identifier: MPL-2.0
//! Upload decoding errors.

use std::fmt;

/// Why an uploaded file could not become the session image.
///
/// Any of these aborts the upload and leaves the previous session state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The file's MIME type is not in the `image/` family.
    NotAnImage(String),
    /// The bytes claim to be an image but the header cannot be read.
    Unreadable(String),
    /// The file could not be read from disk.
    Io(String),
}

impl DecodeError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DecodeError::NotAnImage(_) => "error-upload-not-an-image",
            DecodeError::Unreadable(_) => "error-upload-unreadable",
            DecodeError::Io(_) => "error-upload-io",
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotAnImage(mime) if mime.is_empty() => {
                write!(f, "File is not an image")
            }
            DecodeError::NotAnImage(mime) => write!(f, "File is not an image ({mime})"),
            DecodeError::Unreadable(reason) => write!(f, "Image could not be decoded: {reason}"),
            DecodeError::Io(reason) => write!(f, "Image could not be read: {reason}"),
        }
    }
}

impl std::error::Error for DecodeError {}
