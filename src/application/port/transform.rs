// SPDX-License-Identifier: MPL-2.0
//! Transform collaborator port.
//!
//! This module defines the [`ImageTransformer`] trait: the external service
//! that turns an encoded image into a retouched one for a given [`Tool`].
//!
//! # Design Notes
//!
//! - The call is network-bound, so the trait hands back a boxed `'static`
//!   future that the caller drives with an Iced `Task`
//! - Requests own their data (`Arc` bytes), so the future never borrows
//!   from the session
//! - Failures of any kind collapse into [`TransformError`], which the UI
//!   renders through its i18n key

use crate::domain::{MimeType, Tool};
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// TransformError
// =============================================================================

/// Errors reported by a transform collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// No credentials are configured for the service.
    MissingApiKey(String),

    /// The request never reached the service or the connection dropped.
    Network(String),

    /// The service answered with a non-success HTTP status.
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// The service refused the content (safety filters, policy).
    Blocked(String),

    /// The service answered but returned no image.
    NoImage,

    /// The response (or the image inside it) could not be understood.
    InvalidResponse(String),

    /// Anything else.
    Other(String),
}

impl TransformError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TransformError::MissingApiKey(_) => "error-transform-missing-key",
            TransformError::Network(_) => "error-transform-network",
            TransformError::Api { message, .. } if message.is_empty() => {
                "error-transform-api-status"
            }
            TransformError::Api { .. } => "error-transform-api",
            TransformError::Blocked(_) => "error-transform-blocked",
            TransformError::NoImage => "error-transform-no-image",
            TransformError::InvalidResponse(_) => "error-transform-invalid-response",
            TransformError::Other(_) => "error-transform-other",
        }
    }

    /// Arguments referenced by the message behind [`Self::i18n_key`].
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            TransformError::MissingApiKey(variable) => vec![("variable", variable.clone())],
            TransformError::Api { status, message } => vec![
                ("status", status.to_string()),
                ("reason", message.clone()),
            ],
            TransformError::Network(reason)
            | TransformError::Blocked(reason)
            | TransformError::InvalidResponse(reason)
            | TransformError::Other(reason) => vec![("reason", reason.clone())],
            TransformError::NoImage => Vec::new(),
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::MissingApiKey(variable) => write!(f, "missing API key ({variable})"),
            TransformError::Network(reason) => write!(f, "network error: {reason}"),
            TransformError::Api { status, message } => write!(f, "HTTP {status}: {message}"),
            TransformError::Blocked(reason) => write!(f, "blocked: {reason}"),
            TransformError::NoImage => write!(f, "no image in response"),
            TransformError::InvalidResponse(reason) => write!(f, "invalid response: {reason}"),
            TransformError::Other(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for TransformError {}

// =============================================================================
// Request / Response
// =============================================================================

/// Everything the collaborator needs for one call.
#[derive(Debug, Clone)]
pub struct TransformRequest {
    pub tool: Tool,
    pub image: Arc<[u8]>,
    pub mime_type: MimeType,
    /// Free-text instruction, present only for [`Tool::Edit`].
    pub prompt: Option<String>,
}

/// Raw collaborator output, before the session probes and caches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedImage {
    pub bytes: Vec<u8>,
    pub mime_type: MimeType,
}

// =============================================================================
// ImageTransformer Trait
// =============================================================================

/// Port for the AI image transformation service.
///
/// # Example
///
/// ```ignore
/// use iced_retouch::application::port::transform::{ImageTransformer, TransformRequest};
///
/// async fn run(transformer: &dyn ImageTransformer, request: TransformRequest) {
///     match transformer.transform(request).await {
///         Ok(image) => println!("{} bytes of {}", image.bytes.len(), image.mime_type),
///         Err(err) => eprintln!("{err}"),
///     }
/// }
/// ```
pub trait ImageTransformer: Send + Sync {
    /// Runs one transformation.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformError`] for any failure: network, quota,
    /// refused content or an unusable response.
    fn transform(
        &self,
        request: TransformRequest,
    ) -> BoxFuture<'static, Result<TransformedImage, TransformError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn api_error_carries_status_and_reason() {
        let err = TransformError::Api {
            status: 429,
            message: "quota exceeded".into(),
        };
        assert_eq!(err.i18n_key(), "error-transform-api");
        assert_eq!(
            err.i18n_args(),
            vec![("status", "429".to_string()), ("reason", "quota exceeded".to_string())]
        );
    }

    #[test]
    fn api_error_without_body_uses_status_only_message() {
        let err = TransformError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.i18n_key(), "error-transform-api-status");
    }

    #[test]
    fn missing_key_names_variable() {
        let err = TransformError::MissingApiKey("GEMINI_API_KEY".into());
        assert_eq!(err.i18n_key(), "error-transform-missing-key");
        assert_eq!(
            err.i18n_args(),
            vec![("variable", "GEMINI_API_KEY".to_string())]
        );
    }

    #[test]
    fn no_image_has_no_arguments() {
        assert!(TransformError::NoImage.i18n_args().is_empty());
    }

    #[test]
    fn other_displays_message_verbatim() {
        let err = TransformError::Other("boom".into());
        assert_eq!(err.i18n_args(), vec![("reason", "boom".to_string())]);
        assert_eq!(err.to_string(), "boom");
    }

    // Mock implementation for testing
    struct EchoTransformer;

    impl ImageTransformer for EchoTransformer {
        fn transform(
            &self,
            request: TransformRequest,
        ) -> BoxFuture<'static, Result<TransformedImage, TransformError>> {
            async move {
                Ok(TransformedImage {
                    bytes: request.image.to_vec(),
                    mime_type: request.mime_type,
                })
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn mock_transformer_echoes_input() {
        let request = TransformRequest {
            tool: Tool::Enhance,
            image: Arc::from(vec![7u8, 8, 9]),
            mime_type: MimeType::new("image/png"),
            prompt: None,
        };
        let result = EchoTransformer.transform(request).await.expect("echo");
        assert_eq!(result.bytes, vec![7, 8, 9]);
        assert_eq!(result.mime_type.as_str(), "image/png");
    }
}
