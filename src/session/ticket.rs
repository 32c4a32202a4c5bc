// SPDX-License-Identifier: MPL-2.0
//! Captured identity of asynchronous work.
//!
//! A [`Ticket`] is taken when a transform is dispatched and handed back on
//! completion. It names the tool that was active at dispatch time and the
//! session generation the work belongs to, so the result lands in the right
//! cache slot and late arrivals after a reset or a new upload are dropped.
//!
//! An [`UploadTicket`] plays the same role for file reads. Reads are numbered
//! separately from generations so that starting a read never orphans a
//! transform, while a newer read still supersedes an older one.

use crate::application::port::{TransformError, TransformRequest};
use crate::domain::{ImageId, Tool, ValidationError};
use std::fmt;

/// Session epoch. Bumped by every upload and every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of one file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub generation: Generation,
    /// Position of the read among every read started by the session.
    pub sequence: u64,
}

impl fmt::Display for UploadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.generation, self.sequence)
    }
}

/// Identity of one in-flight transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub tool: Tool,
    pub generation: Generation,
}

/// A transform the caller must now run against the collaborator.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub request: TransformRequest,
}

/// Why `process()` did not dispatch anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessRejection {
    /// The request is invalid as entered; shown inline to the user.
    Invalid(ValidationError),
    /// A transform is already in flight.
    Busy,
}

impl From<ValidationError> for ProcessRejection {
    fn from(err: ValidationError) -> Self {
        ProcessRejection::Invalid(err)
    }
}

/// What applying a completed transform did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The result was cached under the dispatching tool.
    Stored { tool: Tool, image: ImageId },
    /// The transform failed; the session is now errored.
    Failed { tool: Tool, error: TransformError },
    /// The ticket belongs to an older generation and was ignored.
    Stale,
}
