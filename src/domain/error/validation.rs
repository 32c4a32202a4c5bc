// SPDX-License-Identifier: MPL-2.0
//! Request validation errors.

use std::fmt;

/// A user request that cannot be carried out as entered.
///
/// Validation errors are reported inline and never move the session into
/// its errored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Processing was requested before any image was uploaded.
    NoImage,
    /// The edit tool needs a non-blank instruction.
    EmptyPrompt,
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::NoImage => "validation-no-image",
            ValidationError::EmptyPrompt => "validation-empty-prompt",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoImage => write!(f, "Upload an image first"),
            ValidationError::EmptyPrompt => write!(f, "Describe the edit you want to make"),
        }
    }
}

impl std::error::Error for ValidationError {}
