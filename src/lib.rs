//! dahej: fill a marriage-market profile, get a Gemini-generated dowry roast.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::HttpGeminiClient;
pub use app::api::{
    AssessOptions, assess, build_profile, create_form, load_app_config, presets, prompt_preview,
};
pub use app::{AssessmentRequester, FormController, FormState, SubmitOutcome};
pub use domain::{
    AppConfig, AppError, Assessment, AssessmentError, GeminiApiConfig, LineMarker, Preset,
    ProfileField, ProfileInput, ResultLine, render_prompt,
};
pub use ports::{GenerationConfig, GenerationFailure, GenerationRequest, SafetySetting, TextGenerator};
