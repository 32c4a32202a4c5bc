// SPDX-License-Identifier: MPL-2.0
//! Reading uploads from disk and probing encoded images.
//!
//! The MIME type of a file on disk is derived from its extension, the way a
//! file picker reports it, with a content sniff as fallback. Probing reads
//! only the image header: enough to reject garbage and learn the intrinsic
//! size without decoding pixels.

use crate::domain::{DecodeError, Dimensions, MimeType};
use image_rs::{ImageFormat, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// MIME type reported when neither the extension nor the content is known.
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// A file read from disk, not yet validated as an image.
#[derive(Debug, Clone)]
pub struct RawUpload {
    pub bytes: Vec<u8>,
    pub mime_type: MimeType,
}

/// Reads a user-selected file.
///
/// # Errors
///
/// Returns [`DecodeError::Io`] if the file cannot be read. Content is not
/// validated here; see [`probe`].
pub fn read_image(path: &Path) -> Result<RawUpload, DecodeError> {
    let bytes = fs::read(path).map_err(|e| DecodeError::Io(e.to_string()))?;
    let mime_type = mime_type_for(path, &bytes);
    Ok(RawUpload { bytes, mime_type })
}

/// Determines the MIME type of a file from its extension, then its content.
#[must_use]
pub fn mime_type_for(path: &Path, bytes: &[u8]) -> MimeType {
    if path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        return MimeType::new("image/svg+xml");
    }

    let format = ImageFormat::from_path(path)
        .ok()
        .or_else(|| image_rs::guess_format(bytes).ok());

    match format {
        Some(format) => MimeType::new(format.to_mime_type()),
        None => MimeType::new(UNKNOWN_MIME_TYPE),
    }
}

/// Detects an image MIME type from the leading bytes alone.
#[must_use]
pub fn sniff_mime_type(bytes: &[u8]) -> Option<MimeType> {
    image_rs::guess_format(bytes)
        .ok()
        .map(|format| MimeType::new(format.to_mime_type()))
}

/// Validates encoded bytes as a readable image and returns its size.
///
/// # Errors
///
/// - [`DecodeError::NotAnImage`] if `mime_type` is not an `image/` type
/// - [`DecodeError::Unreadable`] if the header cannot be parsed
pub fn probe(bytes: &[u8], mime_type: &MimeType) -> Result<Dimensions, DecodeError> {
    if !mime_type.is_image() {
        return Err(DecodeError::NotAnImage(mime_type.to_string()));
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Unreadable(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::Unreadable(format!(
            "unrecognized {mime_type} data"
        )));
    }

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| DecodeError::Unreadable(e.to_string()))?;

    if width == 0 || height == 0 {
        return Err(DecodeError::Unreadable("image has empty dimensions".into()));
    }

    Ok(Dimensions::new(width, height))
}
