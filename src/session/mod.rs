// SPDX-License-Identifier: MPL-2.0
//! Session controller.
//!
//! [`Session`] is the single owned aggregate behind the studio screen: the
//! uploaded image, the active tool, one cached result per tool and the
//! processing status. Every operation is a synchronous state transition;
//! the only asynchronous work (the transform call) is described by a
//! [`Dispatch`] that the caller runs and hands back through
//! [`Session::complete`] together with its [`Ticket`].
//!
//! # Captured identity
//!
//! A transform is bound to the tool that was active when it was *issued*,
//! not when it *completes*. The user may switch tools while waiting; the
//! result still lands in the issuing tool's slot. The ticket also carries
//! the session [`Generation`]: `upload()` and `reset()` advance it, so a
//! completion that arrives afterwards is ignored instead of resurrecting
//! stale state.

mod download;
mod status;
mod ticket;

#[cfg(test)]
mod tests;

pub use download::{download_file_name, Download, RESULT_SUFFIX};
pub use status::Status;
pub use ticket::{Completion, Dispatch, Generation, ProcessRejection, Ticket, UploadTicket};

use crate::application::port::{TransformError, TransformRequest, TransformedImage};
use crate::domain::{
    DecodeError, EncodedImage, MimeType, ResultImage, Tool, ValidationError,
};
use crate::media;
use tracing::{debug, info, warn};

/// In-memory retouching session. Lives as long as the application.
#[derive(Debug, Clone, Default)]
pub struct Session {
    original: Option<EncodedImage>,
    results: [Option<ResultImage>; Tool::ALL.len()],
    active_tool: Tool,
    edit_prompt: String,
    status: Status,
    generation: Generation,
    /// Number of reads started so far. Survives uploads and resets.
    upload_sequence: u64,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Upload
    // =========================================================================

    /// Marks the start of reading a file and returns the ticket the read
    /// must present once it finishes. Any read started earlier is superseded.
    ///
    /// Only an empty session shows `Uploading`; a session that already holds
    /// an image keeps showing it until the new one is accepted.
    pub fn begin_upload(&mut self) -> UploadTicket {
        if self.original.is_none() {
            self.status = Status::Uploading;
        }
        self.upload_sequence = self.upload_sequence.wrapping_add(1);
        UploadTicket {
            generation: self.generation,
            sequence: self.upload_sequence,
        }
    }

    /// Whether `ticket` is the most recently started read and no upload or
    /// reset happened since it began.
    #[must_use]
    pub fn is_latest_upload(&self, ticket: UploadTicket) -> bool {
        self.is_current(ticket.generation) && ticket.sequence == self.upload_sequence
    }

    /// Abandons a pending upload, returning an empty session to `Idle`.
    pub fn cancel_upload(&mut self) {
        if self.status == Status::Uploading {
            self.status = Status::Idle;
        }
    }

    /// Replaces the session image.
    ///
    /// On success every cached result is discarded, the active tool and edit
    /// prompt return to their defaults and the session becomes `Ready`. Any
    /// transform still in flight is orphaned.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `mime_type` is not an image type or the
    /// bytes cannot be decoded. The session is left as it was, apart from an
    /// abandoned `Uploading` status returning to `Idle`.
    pub fn upload(&mut self, bytes: Vec<u8>, mime_type: &str) -> Result<(), DecodeError> {
        let mime_type = MimeType::new(mime_type);
        let dimensions = match media::probe(&bytes, &mime_type) {
            Ok(dimensions) => dimensions,
            Err(err) => {
                warn!(%mime_type, error = %err, "upload rejected");
                self.cancel_upload();
                return Err(err);
            }
        };

        let image = EncodedImage::new(bytes, mime_type, dimensions);
        info!(
            mime_type = %image.mime_type(),
            width = dimensions.width,
            height = dimensions.height,
            "image uploaded"
        );

        *self = Self {
            original: Some(image),
            status: Status::Ready,
            generation: self.generation.next(),
            upload_sequence: self.upload_sequence,
            ..Self::default()
        };
        Ok(())
    }

    // =========================================================================
    // Tool selection & prompt
    // =========================================================================

    /// Switches the active tool. Never starts or cancels a transform and never
    /// touches any cached result.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.active_tool != tool {
            debug!(from = %self.active_tool, to = %tool, "tool selected");
            self.active_tool = tool;
        }
    }

    /// Stores the edit instruction verbatim.
    pub fn set_edit_prompt(&mut self, text: impl Into<String>) {
        self.edit_prompt = text.into();
    }

    // =========================================================================
    // Processing
    // =========================================================================

    /// Starts a transform for the active tool.
    ///
    /// On success the session is `Processing`, the active tool's slot is
    /// cleared and the returned [`Dispatch`] describes the call to make.
    ///
    /// # Errors
    ///
    /// - [`ProcessRejection::Busy`] while another transform is in flight
    /// - [`ProcessRejection::Invalid`] with [`ValidationError::NoImage`] when
    ///   nothing is uploaded
    /// - [`ProcessRejection::Invalid`] with [`ValidationError::EmptyPrompt`]
    ///   when the edit tool has a blank prompt
    ///
    /// A rejection leaves the session untouched.
    pub fn process(&mut self) -> Result<Dispatch, ProcessRejection> {
        if self.status.is_processing() {
            debug!("process ignored, transform already in flight");
            return Err(ProcessRejection::Busy);
        }

        let Some(original) = &self.original else {
            return Err(ValidationError::NoImage.into());
        };

        let tool = self.active_tool;
        if tool.takes_prompt() && self.edit_prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt.into());
        }

        let request = TransformRequest {
            tool,
            image: original.bytes().clone(),
            mime_type: original.mime_type().clone(),
            prompt: tool.takes_prompt().then(|| self.edit_prompt.clone()),
        };
        let ticket = Ticket {
            tool,
            generation: self.generation,
        };

        self.results[tool.index()] = None;
        self.status = Status::Processing;
        info!(%tool, generation = %ticket.generation, "transform dispatched");

        Ok(Dispatch { ticket, request })
    }

    /// Applies the outcome of a dispatched transform.
    ///
    /// The result is stored under `ticket.tool`, whatever tool is active now.
    /// A ticket from an older generation changes nothing.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<TransformedImage, TransformError>,
    ) -> Completion {
        if !self.is_current(ticket.generation) || !self.status.is_processing() {
            debug!(
                tool = %ticket.tool,
                ticket = %ticket.generation,
                current = %self.generation,
                "stale transform completion ignored"
            );
            return Completion::Stale;
        }

        match outcome.and_then(into_result_image) {
            Ok(image) => {
                let id = image.id();
                info!(
                    tool = %ticket.tool,
                    mime_type = %image.mime_type(),
                    bytes = image.bytes().len(),
                    "transform result stored"
                );
                self.results[ticket.tool.index()] = Some(image);
                self.status = Status::Ready;
                Completion::Stored {
                    tool: ticket.tool,
                    image: id,
                }
            }
            Err(err) => {
                warn!(tool = %ticket.tool, error = %err, "transform failed");
                self.status = Status::Errored(err.clone());
                Completion::Failed {
                    tool: ticket.tool,
                    error: err,
                }
            }
        }
    }

    /// Returns the session to its initial empty state. Work still in flight
    /// will be ignored when it completes.
    pub fn reset(&mut self) {
        info!("session reset");
        *self = Self {
            generation: self.generation.next(),
            upload_sequence: self.upload_sequence,
            ..Self::default()
        };
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn original(&self) -> Option<&EncodedImage> {
        self.original.as_ref()
    }

    #[must_use]
    pub fn source_mime_type(&self) -> Option<&MimeType> {
        self.original.as_ref().map(EncodedImage::mime_type)
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.original.is_some()
    }

    #[must_use]
    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    #[must_use]
    pub fn edit_prompt(&self) -> &str {
        &self.edit_prompt
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.status.is_processing()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether `generation` is still the session's current epoch.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    #[must_use]
    pub fn result_for(&self, tool: Tool) -> Option<&ResultImage> {
        self.results[tool.index()].as_ref()
    }

    /// The cached result of the active tool.
    #[must_use]
    pub fn current_result(&self) -> Option<&ResultImage> {
        self.result_for(self.active_tool)
    }

    /// Every cached result with its tool, in tool order.
    pub fn results(&self) -> impl Iterator<Item = (Tool, &ResultImage)> {
        Tool::ALL
            .into_iter()
            .filter_map(|tool| self.result_for(tool).map(|image| (tool, image)))
    }

    /// Before/after pair for the comparator, when the active tool compares
    /// and has a result.
    #[must_use]
    pub fn comparison(&self) -> Option<(&EncodedImage, &ResultImage)> {
        if !self.active_tool.compares() {
            return None;
        }
        Some((self.original.as_ref()?, self.current_result()?))
    }

    /// The active tool's result as a named download.
    #[must_use]
    pub fn download(&self) -> Option<Download> {
        let result = self.current_result()?;
        Some(Download {
            file_name: download_file_name(self.active_tool, Some(result.mime_type())),
            bytes: result.bytes().clone(),
        })
    }
}

/// Probes collaborator output before it is cached. A missing or non-image
/// MIME type is recovered from the content.
fn into_result_image(output: TransformedImage) -> Result<ResultImage, TransformError> {
    let mime_type = if output.mime_type.is_image() {
        output.mime_type
    } else {
        media::sniff_mime_type(&output.bytes)
            .ok_or_else(|| TransformError::InvalidResponse("result is not an image".into()))?
    };

    let dimensions = media::probe(&output.bytes, &mime_type)
        .map_err(|e| TransformError::InvalidResponse(e.to_string()))?;

    Ok(EncodedImage::new(output.bytes, mime_type, dimensions))
}
