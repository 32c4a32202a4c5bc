// SPDX-License-Identifier: MPL-2.0
//! Studio message/event types re-exported by the facade.

use crate::domain::{DecodeError, Tool};
use crate::session::{Dispatch, Download};

/// Messages emitted directly by the studio widgets.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTool(Tool),
    PromptChanged(String),
    /// Call to action of the active tool.
    Process,
    OpenRequested,
    DownloadRequested,
    ResetRequested,
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Show the open dialog.
    OpenImage,
    /// Run this transform and hand the outcome back with its ticket.
    Dispatch(Dispatch),
    /// Show the save dialog for the active tool's result.
    Download(Download),
    /// The session was torn down to its initial state.
    SessionReset,
}

/// What happened to a finished file read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Accepted,
    /// The file was not usable; the previous image (if any) is kept.
    Rejected(DecodeError),
    /// The session moved on while the file was read.
    Stale,
}
