// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Service**: Endpoint, model and credentials of the image service
//! - **Timeouts**: Request timeout bounds

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Base URL of the Generative Language models API.
pub const DEFAULT_SERVICE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Image-capable model used for every tool.
pub const DEFAULT_SERVICE_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Environment variable holding the API key. The key itself is never stored
/// in the config file.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

// ==========================================================================
// Timeout Defaults
// ==========================================================================

/// Default request timeout (in seconds). Image generation is slow.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;
