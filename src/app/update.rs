// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The studio resolves every synchronous transition itself and hands back an
//! [`Event`]; the handlers here turn those events into tasks (file dialogs,
//! background reads and writes, the transform call) and route the results
//! back into the studio.

use super::Message;
use crate::application::port::{ImageTransformer, TransformError, TransformedImage};
use crate::domain::DecodeError;
use crate::i18n::fluent::I18n;
use crate::media::{self, RawUpload};
use crate::session::{Completion, Dispatch, Download, Ticket, UploadTicket};
use crate::ui::notifications::{self, Notification};
use crate::ui::studio::{self, Event, UploadOutcome};
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Prefix shared by the upload error keys, cleared once an upload succeeds.
pub const UPLOAD_ERROR_PREFIX: &str = "error-upload-";

/// Longest step fed to the spinner, so resuming the tick after an idle
/// stretch does not make it jump.
const MAX_TICK_STEP: Duration = Duration::from_millis(250);

/// The transformer, or the reason it could not be built.
pub type SharedTransformer = Result<Arc<dyn ImageTransformer>, TransformError>;

/// Mutable view over the parts of `App` the handlers touch.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub studio: &'a mut studio::State,
    pub notifications: &'a mut notifications::Manager,
    pub transformer: &'a SharedTransformer,
    pub pending_download: &'a mut Option<Download>,
    pub last_tick: &'a mut Option<Instant>,
}

pub fn handle_studio_message(ctx: &mut UpdateContext<'_>, message: studio::Message) -> Task<Message> {
    match ctx.studio.update(message) {
        Event::None => Task::none(),
        Event::OpenImage => open_dialog(ctx.i18n),
        Event::Dispatch(dispatch) => dispatch_transform(ctx.transformer, dispatch),
        Event::Download(download) => {
            let task = save_dialog(ctx.i18n, &download.file_name);
            *ctx.pending_download = Some(download);
            task
        }
        Event::SessionReset => {
            *ctx.pending_download = None;
            Task::none()
        }
    }
}

/// Starts reading `path` in the background.
pub fn start_upload(studio: &mut studio::State, path: PathBuf) -> Task<Message> {
    let ticket = studio.begin_upload();
    debug!(path = %path.display(), %ticket, "reading image");

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::read_image(&path))
                .await
                .map_err(|e| DecodeError::Io(e.to_string()))?
        },
        move |result| Message::ImageRead { ticket, result },
    )
}

pub fn handle_open_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => start_upload(ctx.studio, path),
        None => Task::none(),
    }
}

pub fn handle_image_read(
    ctx: &mut UpdateContext<'_>,
    ticket: UploadTicket,
    result: Result<RawUpload, DecodeError>,
) -> Task<Message> {
    match ctx.studio.apply_upload(ticket, result) {
        UploadOutcome::Accepted => {
            ctx.notifications.clear_with_prefix(UPLOAD_ERROR_PREFIX);
            *ctx.pending_download = None;
        }
        UploadOutcome::Rejected(err) => {
            ctx.notifications
                .push(Notification::error(err.i18n_key()).with_arg("reason", err.to_string()));
        }
        UploadOutcome::Stale => {}
    }
    Task::none()
}

/// Sends a request to the image service. A transformer that could not be
/// built fails the ticket right away.
pub fn dispatch_transform(transformer: &SharedTransformer, dispatch: Dispatch) -> Task<Message> {
    let Dispatch { ticket, request } = dispatch;
    match transformer {
        Ok(transformer) => Task::perform(transformer.transform(request), move |result| {
            Message::TransformCompleted { ticket, result }
        }),
        Err(err) => Task::done(Message::TransformCompleted {
            ticket,
            result: Err(err.clone()),
        }),
    }
}

pub fn handle_transform_completed(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    result: Result<TransformedImage, TransformError>,
) -> Task<Message> {
    match ctx.studio.apply_completion(ticket, result) {
        Completion::Stored { tool, image } => {
            debug!(%tool, image = ?image, "result shown");
        }
        Completion::Failed { tool, error } => {
            debug!(%tool, %error, "failure shown inline");
        }
        Completion::Stale => {
            debug!(tool = %ticket.tool, "late result dropped");
        }
    }
    Task::none()
}

fn open_dialog(i18n: &I18n) -> Task<Message> {
    let filter_name = i18n.tr("dialog-filter-images");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

fn save_dialog(i18n: &I18n, file_name: &str) -> Task<Message> {
    let filter_name = i18n.tr("dialog-filter-images");
    let file_name = file_name.to_string();
    let filter_ext: Vec<String> = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| vec![ext.to_string()])
        .unwrap_or_default();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&file_name);
            if !filter_ext.is_empty() {
                dialog = dialog.add_filter(filter_name, &filter_ext);
            }
            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(download) = ctx.pending_download.take() else {
        return Task::none();
    };
    let Some(path) = path else {
        debug!("save dialog cancelled");
        return Task::none();
    };

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                media::write_download(&path, &download.bytes).map_err(|e| e.to_string())
            })
            .await
            .map_err(|e| e.to_string())?
        },
        Message::DownloadWritten,
    )
}

pub fn handle_download_written(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, String>,
) -> Task<Message> {
    let notification = match result {
        Ok(path) => {
            info!(path = %path.display(), "result saved");
            Notification::success("notification-download-saved")
                .with_arg("path", path.display().to_string())
        }
        Err(reason) => Notification::error("notification-download-failed").with_arg("reason", reason),
    };
    ctx.notifications.push(notification);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let elapsed = ctx
        .last_tick
        .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
        .min(MAX_TICK_STEP);
    *ctx.last_tick = Some(now);

    ctx.studio.tick(elapsed);
    ctx.notifications.tick(now);
    Task::none()
}
