// SPDX-License-Identifier: MPL-2.0
//! `iced_retouch` is an AI-assisted photo retouching studio built with the
//! Iced GUI framework.
//!
//! A photo is uploaded once; six tools (text removal, background removal,
//! enhancement, restoration, colorization and a free-text edit) send it to a
//! generative image service. Each tool keeps its own last result, which can
//! be compared against the original with a split slider and saved to disk.
//!
//! # Layers
//!
//! - [`domain`] - Tools, encoded images and user-facing errors
//! - [`application`] - The image transformation port
//! - [`session`] - Upload, per-tool result cache and processing lock
//! - [`infrastructure`] - HTTP client for the image service
//! - [`media`] - File reads, format sniffing and result writes
//! - [`ui`] and [`app`] - Iced presentation and orchestration
//! - [`config`] and [`i18n`] - Preferences and Fluent localization

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod session;
pub mod ui;
