// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::{TransformError, TransformedImage};
use crate::domain::DecodeError;
use crate::media::RawUpload;
use crate::session::{Ticket, UploadTicket};
use crate::ui::notifications;
use crate::ui::studio;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// studio and toast messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Studio(studio::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast expiry and the spinner.
    Tick(Instant),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from the open file dialog.
    OpenDialogResult(Option<PathBuf>),
    /// A background file read finished.
    ImageRead {
        ticket: UploadTicket,
        result: Result<RawUpload, DecodeError>,
    },
    /// The image service answered (or failed) for a dispatched request.
    TransformCompleted {
        ticket: Ticket,
        result: Result<TransformedImage, TransformError>,
    },
    /// Result from the download save dialog.
    SaveDialogResult(Option<PathBuf>),
    /// The result file was written, or why it was not.
    DownloadWritten(Result<PathBuf, String>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_RETOUCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional image to open on startup.
    pub image_path: Option<PathBuf>,
}
