//! Text generation port definition.

use std::fmt;

/// Sampling configuration sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { temperature: 0.9, top_p: 0.95, max_output_tokens: 300 }
    }
}

/// Safety category threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    /// The single relaxed filter the assessment runs with.
    pub fn relaxed_harassment() -> Self {
        Self {
            category: "HARM_CATEGORY_HARASSMENT".to_string(),
            threshold: "BLOCK_ONLY_HIGH".to_string(),
        }
    }
}

/// Request to generate text from a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier (e.g., "gemini-1.5-flash").
    pub model: String,
    /// Fully rendered prompt.
    pub prompt: String,
    pub generation: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerationRequest {
    /// Build a request with the fixed assessment sampling and safety settings.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            generation: GenerationConfig::default(),
            safety_settings: vec![SafetySetting::relaxed_harassment()],
        }
    }
}

/// Unclassified failure reported by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    /// Human-readable failure description, as reported upstream.
    pub message: String,
    /// HTTP status, when the failure came from a response.
    pub status: Option<u16>,
}

impl GenerationFailure {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self { message: message.into(), status }
    }
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for GenerationFailure {}

/// Port for text generation backends.
///
/// One call is one outbound request. Implementations never retry.
pub trait TextGenerator {
    /// Generate text for the request, returning the raw response text.
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        (**self).generate(request)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        (**self).generate(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_uses_fixed_sampling() {
        let request = GenerationRequest::new("gemini-1.5-flash", "hi");

        assert_eq!(request.generation.temperature, 0.9);
        assert_eq!(request.generation.top_p, 0.95);
        assert_eq!(request.generation.max_output_tokens, 300);
        assert_eq!(request.safety_settings, vec![SafetySetting::relaxed_harassment()]);
    }

    #[test]
    fn failure_display_includes_status() {
        assert_eq!(GenerationFailure::new("nope", Some(503)).to_string(), "nope (status 503)");
        assert_eq!(GenerationFailure::new("nope", None).to_string(), "nope");
    }
}
