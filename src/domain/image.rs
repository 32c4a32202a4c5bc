// SPDX-License-Identifier: MPL-2.0
//! Encoded image value objects.
//!
//! Images travel through the session in their encoded form (PNG, JPEG, ...)
//! together with their MIME type. Pixel decoding only happens in the
//! presentation layer; the domain keeps the bytes, the type and the
//! dimensions read from the header.

use std::fmt;
use std::sync::Arc;

/// Extension used when a MIME subtype is absent or unusable.
pub const FALLBACK_EXTENSION: &str = "png";

// =============================================================================
// MimeType
// =============================================================================

/// A MIME type string such as `image/png`, normalized to lowercase with any
/// parameters (`; charset=...`) stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType(String);

impl MimeType {
    /// Normalizes a raw MIME type.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let essence = raw.split(';').next().unwrap_or_default();
        Self(essence.trim().to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the type belongs to the `image/` family.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.0
            .strip_prefix("image/")
            .is_some_and(|subtype| !subtype.is_empty())
    }

    /// The subtype without structured-syntax suffix (`svg+xml` → `svg`).
    #[must_use]
    pub fn subtype(&self) -> Option<&str> {
        let (_, subtype) = self.0.split_once('/')?;
        let subtype = subtype.split('+').next().unwrap_or_default();
        (!subtype.is_empty()).then_some(subtype)
    }

    /// File extension derived from the subtype (`x-icon` stays `x-icon`),
    /// falling back to [`FALLBACK_EXTENSION`] when the subtype is missing or
    /// would not make a safe file name.
    #[must_use]
    pub fn extension(&self) -> &str {
        match self.subtype() {
            Some(subtype) if is_extension_token(subtype) => subtype,
            _ => FALLBACK_EXTENSION,
        }
    }
}

/// ASCII alphanumerics and inner hyphens only.
fn is_extension_token(subtype: &str) -> bool {
    subtype.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !subtype.starts_with('-')
        && !subtype.ends_with('-')
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ImageId
// =============================================================================

/// Process-unique identity of an encoded image.
///
/// Every upload and every transform result gets a fresh id, so presentation
/// caches can key on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Dimensions
// =============================================================================

/// Intrinsic pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Degenerate sizes report a square ratio.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

// =============================================================================
// EncodedImage
// =============================================================================

/// An immutable encoded image: the uploaded original or a transform result.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    id: ImageId,
    bytes: Arc<[u8]>,
    mime_type: MimeType,
    dimensions: Dimensions,
}

/// A cached transform result. Same shape as the original upload.
pub type ResultImage = EncodedImage;

impl EncodedImage {
    #[must_use]
    pub fn new(bytes: impl Into<Arc<[u8]>>, mime_type: MimeType, dimensions: Dimensions) -> Self {
        Self {
            id: ImageId::new(),
            bytes: bytes.into(),
            mime_type,
            dimensions,
        }
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    #[must_use]
    pub fn mime_type(&self) -> &MimeType {
        &self.mime_type
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}
