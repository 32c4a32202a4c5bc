// SPDX-License-Identifier: MPL-2.0
//! File handling around the session: reading uploads, probing encoded
//! images and writing downloads.

pub mod download;
pub mod upload;

// Re-export commonly used types
pub use download::write_download;
pub use upload::{mime_type_for, probe, read_image, sniff_mime_type, RawUpload};

/// Extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];
