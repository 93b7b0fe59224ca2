//! Assessment requester: profile in, one generation call, classified result out.

use crate::domain::{Assessment, AssessmentError, ProfileInput, render_prompt};
use crate::ports::{GenerationRequest, TextGenerator};

/// Issues the single text-generation call for a profile.
///
/// Holds no state between calls: no caching, no retry.
#[derive(Debug, Clone)]
pub struct AssessmentRequester<G: TextGenerator> {
    generator: G,
    model: String,
}

impl<G: TextGenerator> AssessmentRequester<G> {
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Self { generator, model: model.into() }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request that [`AssessmentRequester::request`] would send.
    pub fn build_request(&self, profile: &ProfileInput) -> Result<GenerationRequest, AssessmentError> {
        let prompt = render_prompt(profile)
            .map_err(|e| AssessmentError::classify(&e.to_string()))?;
        Ok(GenerationRequest::new(self.model.clone(), prompt))
    }

    /// Render the prompt, call the generator once and classify any failure.
    pub fn request(&self, profile: &ProfileInput) -> Result<Assessment, AssessmentError> {
        let request = self.build_request(profile)?;

        match self.generator.generate(&request) {
            Ok(text) => {
                tracing::debug!(chars = text.len(), "assessment generated");
                Ok(Assessment::new(text))
            }
            Err(failure) => {
                tracing::error!(status = ?failure.status, "Dowry calculation failed: {}", failure.message);
                Err(AssessmentError::classify(&failure.message))
            }
        }
    }
}
