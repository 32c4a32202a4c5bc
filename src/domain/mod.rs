// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`DecodeError`](error::DecodeError),
//!   [`ValidationError`](error::ValidationError))
//! - [`image`]: Encoded images ([`EncodedImage`](image::EncodedImage),
//!   [`MimeType`](image::MimeType), [`Dimensions`](image::Dimensions))
//! - [`tool`]: The closed set of retouching tools ([`Tool`](tool::Tool))

pub mod error;
pub mod image;
pub mod tool;

pub use error::{DecodeError, ValidationError};
pub use image::{Dimensions, EncodedImage, ImageId, MimeType, ResultImage};
pub use tool::{Tool, ToolInfo};
