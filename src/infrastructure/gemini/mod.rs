// SPDX-License-Identifier: MPL-2.0
//! Gemini image transformer.
//!
//! Implements [`ImageTransformer`] on top of the Generative Language
//! `generateContent` endpoint. The source image travels as a base64
//! `inlineData` part next to a text instruction; the first image part of the
//! first candidate is the result.
//!
//! The API key is read from the environment variable named in the service
//! config and sent in the `x-goog-api-key` header. It is never logged.

mod prompts;

pub use prompts::instruction;

use crate::application::port::{
    ImageTransformer, TransformError, TransformRequest, TransformedImage,
};
use crate::config::ServiceConfig;
use crate::domain::MimeType;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Finish reasons that mean the service refused to produce content.
const BLOCKING_FINISH_REASONS: [&str; 5] = [
    "SAFETY",
    "PROHIBITED_CONTENT",
    "IMAGE_SAFETY",
    "BLOCKLIST",
    "SPII",
];

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum RequestPart {
    InlineData(InlineData),
    Text(String),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default, alias = "mime_type")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: [&'static str; 2],
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default, alias = "prompt_feedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default, alias = "finish_reason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, alias = "inline_data")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default, alias = "block_reason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

// =============================================================================
// Transformer
// =============================================================================

/// HTTP client for the image service.
#[derive(Debug, Clone)]
pub struct GeminiTransformer {
    client: Client,
    url: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl GeminiTransformer {
    /// Creates a transformer with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Other`] if the HTTP client cannot be built.
    pub fn new(service: &ServiceConfig, api_key: Option<String>) -> Result<Self, TransformError> {
        let client = Client::builder()
            .timeout(service.request_timeout())
            .build()
            .map_err(|e| TransformError::Other(format!("HTTP client: {e}")))?;

        let url = format!(
            "{}/{}:generateContent",
            service.endpoint.trim_end_matches('/'),
            service.model
        );

        Ok(Self {
            client,
            url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_key_env: service.api_key_env.clone(),
        })
    }

    /// Creates a transformer reading the API key from the configured
    /// environment variable. A missing key is reported on the first call,
    /// not here.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Other`] if the HTTP client cannot be built.
    pub fn from_config(service: &ServiceConfig) -> Result<Self, TransformError> {
        let transformer = Self::new(service, std::env::var(&service.api_key_env).ok())?;
        if transformer.has_api_key() {
            info!(url = transformer.url(), "image service configured");
        } else {
            warn!(variable = %service.api_key_env, "no API key in environment");
        }
        Ok(transformer)
    }

    /// Full `generateContent` URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl ImageTransformer for GeminiTransformer {
    fn transform(
        &self,
        request: TransformRequest,
    ) -> BoxFuture<'static, Result<TransformedImage, TransformError>> {
        let client = self.client.clone();
        let url = self.url.clone();
        let api_key = self.api_key.clone();
        let api_key_env = self.api_key_env.clone();

        async move {
            let Some(api_key) = api_key else {
                return Err(TransformError::MissingApiKey(api_key_env));
            };
            send(&client, &url, &api_key, request).await
        }
        .boxed()
    }
}

async fn send(
    client: &Client,
    url: &str,
    api_key: &str,
    request: TransformRequest,
) -> Result<TransformedImage, TransformError> {
    let body = build_request(&request);

    info!(tool = %request.tool, bytes = request.image.len(), "sending transform request");

    let response = client
        .post(url)
        .header(API_KEY_HEADER, api_key)
        .json(&body)
        .send()
        .await
        .map_err(network_error)?;

    let status = response.status();
    let text = response.text().await.map_err(network_error)?;
    debug!(%status, bytes = text.len(), "transform response received");

    if !status.is_success() {
        let message = api_error_message(&text);
        error!(%status, %message, "image service error");
        return Err(TransformError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
        error!(error = %e, "failed to parse transform response");
        TransformError::InvalidResponse(e.to_string())
    })?;

    extract_image(parsed)
}

fn build_request(request: &TransformRequest) -> GenerateContentRequest {
    let text = instruction(request.tool, request.prompt.as_deref());
    GenerateContentRequest {
        contents: vec![RequestContent {
            parts: vec![
                RequestPart::InlineData(InlineData {
                    mime_type: request.mime_type.to_string(),
                    data: BASE64.encode(&request.image),
                }),
                RequestPart::Text(text),
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: ["IMAGE", "TEXT"],
        },
    }
}

fn extract_image(response: GenerateContentResponse) -> Result<TransformedImage, TransformError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        warn!(%reason, "prompt blocked");
        return Err(TransformError::Blocked(reason));
    }

    let mut refusal = None;
    for candidate in response.candidates {
        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        for part in parts {
            if let Some(inline) = part.inline_data {
                let bytes = BASE64
                    .decode(inline.data.as_bytes())
                    .map_err(|e| TransformError::InvalidResponse(format!("base64: {e}")))?;
                return Ok(TransformedImage {
                    bytes,
                    mime_type: MimeType::new(&inline.mime_type),
                });
            }
            if let Some(text) = part.text {
                debug!(%text, "text part in transform response");
            }
        }
        if let Some(reason) = candidate
            .finish_reason
            .filter(|reason| BLOCKING_FINISH_REASONS.contains(&reason.as_str()))
        {
            refusal.get_or_insert(reason);
        }
    }

    match refusal {
        Some(reason) => Err(TransformError::Blocked(reason)),
        None => Err(TransformError::NoImage),
    }
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.chars().take(200).collect::<String>().trim().to_string(),
    }
}

fn network_error(err: reqwest::Error) -> TransformError {
    if err.is_timeout() {
        TransformError::Network("request timed out".into())
    } else {
        TransformError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tool;
    use std::sync::Arc;

    fn request(tool: Tool, prompt: Option<&str>) -> TransformRequest {
        TransformRequest {
            tool,
            image: Arc::from(vec![1u8, 2, 3]),
            mime_type: MimeType::new("image/jpeg"),
            prompt: prompt.map(str::to_string),
        }
    }

    #[test]
    fn request_body_carries_image_and_instruction() {
        let body = build_request(&request(Tool::Edit, Some("add snow")));
        let json = serde_json::to_value(&body).expect("serialize");

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], BASE64.encode([1u8, 2, 3]));
        assert_eq!(parts[1]["text"], "add snow");
        assert_eq!(
            json["generationConfig"]["responseModalities"],
            serde_json::json!(["IMAGE", "TEXT"])
        );
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let service = ServiceConfig {
            endpoint: "http://localhost:1234/v1beta/models/".into(),
            model: "m".into(),
            ..ServiceConfig::default()
        };
        let transformer = GeminiTransformer::new(&service, Some("k".into())).expect("client");
        assert_eq!(
            transformer.url(),
            "http://localhost:1234/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let transformer =
            GeminiTransformer::new(&ServiceConfig::default(), Some("  ".into())).expect("client");
        assert!(!transformer.has_api_key());
    }

    #[test]
    fn extracts_camel_case_inline_data() {
        let json = format!(
            r#"{{"candidates":[{{"content":{{"parts":[{{"text":"here"}},{{"inlineData":{{"mimeType":"image/png","data":"{}"}}}}]}}}}]}}"#,
            BASE64.encode([9u8, 9])
        );
        let parsed: GenerateContentResponse = serde_json::from_str(&json).expect("parse");
        let image = extract_image(parsed).expect("image");
        assert_eq!(image.bytes, vec![9, 9]);
        assert_eq!(image.mime_type.as_str(), "image/png");
    }

    #[test]
    fn extracts_snake_case_inline_data() {
        let json = format!(
            r#"{{"candidates":[{{"content":{{"parts":[{{"inline_data":{{"mime_type":"image/webp","data":"{}"}}}}]}}}}]}}"#,
            BASE64.encode([4u8])
        );
        let parsed: GenerateContentResponse = serde_json::from_str(&json).expect("parse");
        let image = extract_image(parsed).expect("image");
        assert_eq!(image.mime_type.as_str(), "image/webp");
    }

    #[test]
    fn text_only_answer_is_no_image() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"I cannot do that"}]},"finishReason":"STOP"}]}"#,
        )
        .expect("parse");
        assert_eq!(extract_image(parsed).unwrap_err(), TransformError::NoImage);
    }

    #[test]
    fn block_reason_is_reported() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).expect("parse");
        assert_eq!(
            extract_image(parsed).unwrap_err(),
            TransformError::Blocked("SAFETY".into())
        );
    }

    #[test]
    fn safety_finish_reason_is_blocked() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"IMAGE_SAFETY"}]}"#)
                .expect("parse");
        assert_eq!(
            extract_image(parsed).unwrap_err(),
            TransformError::Blocked("IMAGE_SAFETY".into())
        );
    }

    #[test]
    fn api_error_message_prefers_error_envelope() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body), "API key not valid");
        assert_eq!(api_error_message("  gateway down "), "gateway down");
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let service = ServiceConfig {
            api_key_env: "SOME_UNSET_VARIABLE".into(),
            ..ServiceConfig::default()
        };
        let transformer = GeminiTransformer::new(&service, None).expect("client");
        let err = transformer
            .transform(request(Tool::Enhance, None))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingApiKey("SOME_UNSET_VARIABLE".into())
        );
    }
}
