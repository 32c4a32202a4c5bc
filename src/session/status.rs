// SPDX-License-Identifier: MPL-2.0
//! Session status.

use crate::application::port::TransformError;

/// Lifecycle status of the session.
///
/// An original image is held exactly when the status is `Ready`,
/// `Processing` or `Errored`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing uploaded yet.
    #[default]
    Idle,
    /// A first upload is being read.
    Uploading,
    /// An image is loaded and no transform is running.
    Ready,
    /// A transform is in flight. Single global lock, not per tool.
    Processing,
    /// The last transform failed. Rendered through the error's i18n key.
    Errored(TransformError),
}

impl Status {
    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(self, Status::Processing)
    }

    /// Whether the status implies an uploaded image.
    #[must_use]
    pub fn has_image(&self) -> bool {
        matches!(self, Status::Ready | Status::Processing | Status::Errored(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&TransformError> {
        match self {
            Status::Errored(err) => Some(err),
            _ => None,
        }
    }
}
