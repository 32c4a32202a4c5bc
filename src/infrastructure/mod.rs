// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Image transformation over HTTP (implements [`ImageTransformer`])
//!
//! [`ImageTransformer`]: crate::application::port::ImageTransformer

pub mod gemini;

pub use gemini::GeminiTransformer;
