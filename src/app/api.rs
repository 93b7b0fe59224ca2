//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! the Gemini transport and the form controller.

use std::path::{Path, PathBuf};

use crate::adapters::HttpGeminiClient;
use crate::app::config::load_config;
use crate::app::{AssessmentRequester, FormController, FormState, SubmitOutcome};
use crate::domain::{AppConfig, Assessment, Preset, ProfileField, ProfileInput, render_prompt};

pub use crate::domain::AppError;

/// Inputs for a one-shot assessment.
#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    /// Explicit config file; `dahej.toml` in the working directory otherwise.
    pub config_path: Option<PathBuf>,
    /// Preset loaded before field overrides are applied.
    pub preset: Option<String>,
    /// Field values applied in order over the preset.
    pub fields: Vec<(ProfileField, String)>,
}

/// All presets in display order.
pub fn presets() -> &'static [Preset] {
    Preset::all()
}

/// Build the profile described by a preset plus field overrides.
pub fn build_profile(
    preset: Option<&str>,
    fields: &[(ProfileField, String)],
) -> Result<ProfileInput, AppError> {
    let mut profile = match preset {
        Some(id) => Preset::find(id)?.profile(),
        None => ProfileInput::new(),
    };
    for (field, value) in fields {
        profile.set(*field, value.clone());
    }
    Ok(profile)
}

/// Render the prompt for a profile without contacting the API.
pub fn prompt_preview(profile: &ProfileInput) -> Result<String, AppError> {
    render_prompt(profile)
}

/// Load configuration for the current directory.
pub fn load_app_config(config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    load_config(config_path, &std::env::current_dir()?)
}

/// Create a form controller wired to the Gemini API.
pub fn create_form(config: &AppConfig) -> Result<FormController<HttpGeminiClient>, AppError> {
    let client = HttpGeminiClient::from_env_with_config(&config.gemini)?;
    let requester = AssessmentRequester::new(client, config.gemini.model.clone());
    Ok(FormController::new(requester))
}

/// Fill the form from `options`, submit it once and return the assessment.
pub fn assess(options: &AssessOptions) -> Result<Assessment, AppError> {
    let config = load_app_config(options.config_path.as_deref())?;
    let form = create_form(&config)?;

    if let Some(id) = &options.preset {
        form.load_preset(Preset::find(id)?);
    }
    for (field, value) in &options.fields {
        form.set_field(*field, value.clone());
    }

    match form.submit() {
        SubmitOutcome::Resolved(FormState::ShowingResult(assessment)) => Ok(assessment),
        SubmitOutcome::Resolved(FormState::ShowingError(err)) => Err(AppError::Assessment(err)),
        other => unreachable!("fresh form resolved to {:?}", other),
    }
}
