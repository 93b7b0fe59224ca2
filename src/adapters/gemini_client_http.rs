//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, GeminiApiConfig};
use crate::ports::{GenerationFailure, GenerationRequest, TextGenerator};

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// Finish reasons that mean the candidate text was withheld.
const BLOCKING_FINISH_REASONS: &[&str] =
    &["SAFETY", "RECITATION", "LANGUAGE", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

/// HTTP transport for the Gemini API.
///
/// This client performs a single request per call and never retries.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    config: GeminiApiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("api_url", &self.config.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { api_key, config: config.clone(), client })
    }

    /// Create from the environment variable named by `config.api_key_env`.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(config.api_key_env.clone()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, model: &str, request: &ApiRequest) -> Result<String, GenerationFailure> {
        let url = self
            .config
            .generate_content_url(model)
            .map_err(|e| GenerationFailure::new(e.to_string(), None))?;

        tracing::debug!(%url, model, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| GenerationFailure::new(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                GenerationFailure::new(
                    format!("Failed to parse response: {}", e),
                    Some(status.as_u16()),
                )
            })?;

            return api_response
                .into_text()
                .map_err(|message| GenerationFailure::new(message, Some(status.as_u16())));
        }

        let detail = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        let message = format!(
            "[{} {}] {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status"),
            detail
        );

        Err(GenerationFailure::new(message, Some(status.as_u16())))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    generation_config: ApiGenerationConfig,
    safety_settings: Vec<ApiSafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerationConfig {
    temperature: f64,
    top_p: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiSafetySetting {
    category: String,
    threshold: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl ApiResponse {
    /// Text of the first candidate, or the reason it is not available.
    fn into_text(self) -> Result<String, String> {
        if let Some(candidate) = self.candidates.into_iter().next() {
            if let Some(reason) = candidate
                .finish_reason
                .as_deref()
                .filter(|reason| BLOCKING_FINISH_REASONS.contains(reason))
            {
                return Err(format!("Candidate was blocked due to {}", reason));
            }

            let text: String = candidate
                .content
                .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
                .unwrap_or_default();
            return Ok(text);
        }

        if let Some(feedback) = self.prompt_feedback {
            let reason = feedback
                .block_reason
                .map(|reason| format!("Response was blocked due to {}", reason))
                .unwrap_or_else(|| "Response was blocked".to_string());
            return Err(format!("Text not available. {}", reason));
        }

        Ok(String::new())
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let error = parsed.get("error")?;
    let mut message = error.get("message").and_then(|message| message.as_str())?.to_string();

    let reasons: Vec<&str> = error
        .get("details")
        .and_then(|details| details.as_array())
        .map(|details| {
            details
                .iter()
                .filter_map(|detail| detail.get("reason").and_then(|reason| reason.as_str()))
                .collect()
        })
        .unwrap_or_default();

    for reason in reasons {
        message.push_str(&format!(" [{}]", reason));
    }

    Some(message)
}

impl TextGenerator for HttpGeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        let api_request = ApiRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(request.prompt.clone()) }],
            }],
            generation_config: ApiGenerationConfig {
                temperature: request.generation.temperature,
                top_p: request.generation.top_p,
                max_output_tokens: request.generation.max_output_tokens,
            },
            safety_settings: request
                .safety_settings
                .iter()
                .map(|setting| ApiSafetySetting {
                    category: setting.category.clone(),
                    threshold: setting.threshold.clone(),
                })
                .collect(),
        };

        self.send_request(&request.model, &api_request)
    }
}
