//! Interactive form session.

use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::adapters::HttpGeminiClient;
use crate::app::api;
use crate::app::{FormController, FormState, SubmitOutcome};
use crate::domain::{AppError, Preset, ProfileField};

use super::print_assessment;

pub(super) fn run_form(config_path: Option<&Path>) -> Result<(), AppError> {
    let config = api::load_app_config(config_path)?;
    let form = api::create_form(&config)?;

    match fill_and_submit(&form) {
        Err(AppError::Interrupted) => Ok(()),
        other => other,
    }
}

fn fill_and_submit(form: &FormController<HttpGeminiClient>) -> Result<(), AppError> {
    loop {
        if let Some(preset) = prompt_preset()? {
            form.load_preset(preset);
        }

        let current = form.profile();
        for field in ProfileField::ALL {
            let value = prompt_field(field, current.get(field))?;
            form.set_field(field, value);
        }

        println!("⏳ Calculating...");
        match form.submit() {
            SubmitOutcome::Resolved(FormState::ShowingResult(assessment)) => {
                println!();
                print_assessment(&assessment);
            }
            SubmitOutcome::Resolved(FormState::ShowingError(err)) => eprintln!("{}", err),
            _ => {}
        }

        if !confirm("Calculate again?")? {
            return Ok(());
        }
        form.reset();
    }
}

/// `None` means "enter details manually".
fn prompt_preset() -> Result<Option<&'static Preset>, AppError> {
    let presets = api::presets();
    let mut items: Vec<String> =
        presets.iter().map(|preset| format!("{} {}", preset.emoji, preset.name)).collect();
    items.push("✍️  Enter details manually".to_string());

    let selection = Select::new()
        .with_prompt("Start from a sample profile?")
        .items(&items)
        .default(items.len() - 1)
        .interact_opt()
        .map_err(map_dialoguer_error)?
        .ok_or(AppError::Interrupted)?;

    Ok(presets.get(selection))
}

fn prompt_field(field: ProfileField, current: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(field.label())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(map_dialoguer_error)
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact_opt()
        .map_err(map_dialoguer_error)
        .map(|answer| answer.unwrap_or(false))
}

fn map_dialoguer_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => AppError::Interrupted,
        other => AppError::Io(std::io::Error::other(other.to_string())),
    }
}
