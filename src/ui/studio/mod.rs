// SPDX-License-Identifier: MPL-2.0
//! Retouch studio screen.
//!
//! Binds the [`Session`] controller to the view following the "state down,
//! messages up" pattern: widgets emit [`Message`]s, [`State::update`] applies
//! the synchronous part and returns an [`Event`] for the side effects the
//! application owns (dialogs, the transform call, file IO).
//!
//! The screen also keeps presentation-only state next to the session: one
//! decoded image handle per [`ImageId`] so textures are uploaded once, the
//! inline validation message and the comparator mount counter.

mod messages;
mod view;


pub use messages::{Event, Message, UploadOutcome};

use crate::application::port::{TransformError, TransformedImage};
use crate::domain::{DecodeError, EncodedImage, ImageId, Tool, ValidationError};
use crate::i18n::fluent::I18n;
use crate::media::RawUpload;
use crate::session::{Completion, ProcessRejection, Session, Ticket, UploadTicket};
use crate::ui::comparator::ComparisonKey;
use crate::ui::widgets::animated_spinner;
use iced::widget::image::Handle;
use iced::Element;
use std::collections::HashMap;
use std::time::Duration;

/// Contextual data needed to render the studio.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Default)]
pub struct State {
    session: Session,
    handles: HashMap<ImageId, Handle>,
    /// Bumped whenever the comparator leaves and re-enters the screen.
    comparator_mount: u64,
    notice: Option<ValidationError>,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SelectTool(tool) => {
                if tool != self.session.active_tool() {
                    self.session.select_tool(tool);
                    self.notice = None;
                    self.comparator_mount = self.comparator_mount.wrapping_add(1);
                }
                Event::None
            }
            Message::PromptChanged(text) => {
                self.session.set_edit_prompt(text);
                if self.notice == Some(ValidationError::EmptyPrompt) {
                    self.notice = None;
                }
                Event::None
            }
            Message::Process => match self.session.process() {
                Ok(dispatch) => {
                    self.notice = None;
                    self.sync_handles();
                    Event::Dispatch(dispatch)
                }
                Err(ProcessRejection::Invalid(err)) => {
                    self.notice = Some(err);
                    Event::None
                }
                Err(ProcessRejection::Busy) => Event::None,
            },
            Message::OpenRequested => Event::OpenImage,
            Message::DownloadRequested => self
                .session
                .download()
                .map_or(Event::None, Event::Download),
            Message::ResetRequested => {
                self.session.reset();
                self.notice = None;
                self.comparator_mount = self.comparator_mount.wrapping_add(1);
                self.sync_handles();
                Event::SessionReset
            }
        }
    }

    /// Marks the start of a file read. The returned ticket goes back into
    /// [`State::apply_upload`].
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.session.begin_upload()
    }

    /// Applies a finished file read. Only the most recently started read is
    /// applied; anything older, or started before a reset, is stale.
    pub fn apply_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<RawUpload, DecodeError>,
    ) -> UploadOutcome {
        if !self.session.is_latest_upload(ticket) {
            tracing::debug!(%ticket, "stale upload ignored");
            return UploadOutcome::Stale;
        }

        let upload = result.and_then(|raw| {
            self.session
                .upload(raw.bytes, raw.mime_type.as_str())
        });

        match upload {
            Ok(()) => {
                self.notice = None;
                self.comparator_mount = self.comparator_mount.wrapping_add(1);
                self.sync_handles();
                UploadOutcome::Accepted
            }
            Err(err) => {
                self.session.cancel_upload();
                UploadOutcome::Rejected(err)
            }
        }
    }

    /// Applies the outcome of a dispatched transform.
    pub fn apply_completion(
        &mut self,
        ticket: Ticket,
        result: Result<TransformedImage, TransformError>,
    ) -> Completion {
        let completion = self.session.complete(ticket, result);
        if let Completion::Stored { tool, .. } = completion {
            if tool == self.session.active_tool() {
                self.comparator_mount = self.comparator_mount.wrapping_add(1);
            }
        }
        self.sync_handles();
        completion
    }

    /// Advances the spinner while something is pending.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.is_busy() {
            self.spinner_rotation = animated_spinner::advance(self.spinner_rotation, elapsed);
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn active_tool(&self) -> Tool {
        self.session.active_tool()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.session.has_image()
    }

    /// Whether a read or a transform is pending.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(
            self.session.status(),
            crate::session::Status::Uploading | crate::session::Status::Processing
        )
    }

    #[must_use]
    pub fn notice(&self) -> Option<ValidationError> {
        self.notice
    }

    pub(crate) fn handle(&self, image: &EncodedImage) -> Option<&Handle> {
        self.handles.get(&image.id())
    }

    pub(crate) fn comparison_key(&self) -> Option<ComparisonKey> {
        let (before, after) = self.session.comparison()?;
        Some(ComparisonKey {
            before: before.id(),
            after: after.id(),
            mount: self.comparator_mount,
        })
    }

    /// Keeps exactly one handle per image the session still holds.
    fn sync_handles(&mut self) {
        let live: Vec<&EncodedImage> = self
            .session
            .original()
            .into_iter()
            .chain(self.session.results().map(|(_, image)| image))
            .collect();

        self.handles
            .retain(|id, _| live.iter().any(|image| image.id() == *id));
        for image in live {
            self.handles
                .entry(image.id())
                .or_insert_with(|| Handle::from_bytes(image.bytes().to_vec()));
        }
    }
}
