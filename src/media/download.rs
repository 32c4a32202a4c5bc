// SPDX-License-Identifier: MPL-2.0
//! Writing downloaded results to disk.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes result bytes to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the directory or file cannot be
/// written.
pub fn write_download(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(path.to_path_buf())
}
