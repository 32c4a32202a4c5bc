// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Uses the Fluent localization system with bundles embedded at build time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded from `assets/i18n/`
//! - Missing keys render as `MISSING: <key>` so gaps are visible

pub mod fluent;

pub use fluent::I18n;
