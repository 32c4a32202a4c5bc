// SPDX-License-Identifier: MPL-2.0
//! Download naming for cached results.

use crate::domain::image::FALLBACK_EXTENSION;
use crate::domain::{MimeType, Tool};
use std::sync::Arc;

/// Suffix appended to the tool id in download file names.
pub const RESULT_SUFFIX: &str = "resultado";

/// The active tool's result, ready to be written out.
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: String,
    pub bytes: Arc<[u8]>,
}

/// `<tool>-resultado.<ext>`, with the extension taken from the MIME subtype
/// and falling back to `png`.
#[must_use]
pub fn download_file_name(tool: Tool, mime_type: Option<&MimeType>) -> String {
    let extension = mime_type.map_or(FALLBACK_EXTENSION, MimeType::extension);
    format!("{}-{RESULT_SUFFIX}.{extension}", tool.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_png_result() {
        let mime = MimeType::new("image/png");
        assert_eq!(
            download_file_name(Tool::Colorize, Some(&mime)),
            "colorize-resultado.png"
        );
    }

    #[test]
    fn jpeg_keeps_subtype() {
        let mime = MimeType::new("image/jpeg");
        assert_eq!(
            download_file_name(Tool::RemoveText, Some(&mime)),
            "removeText-resultado.jpeg"
        );
    }

    #[test]
    fn missing_or_odd_mime_defaults_to_png() {
        assert_eq!(download_file_name(Tool::Edit, None), "edit-resultado.png");
        let odd = MimeType::new("garbage");
        assert_eq!(
            download_file_name(Tool::Restore, Some(&odd)),
            "restore-resultado.png"
        );
    }
}
