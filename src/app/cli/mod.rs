//! CLI Adapter.

mod form;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, AssessOptions};
use crate::domain::{AppError, Assessment, LineMarker, ProfileField};

#[derive(Parser)]
#[command(name = "dahej")]
#[command(version)]
#[command(about = "Calculate My Dahej: a roast of your marriage-market profile", long_about = None)]
struct Cli {
    /// Config file (defaults to ./dahej.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a profile once and print the assessment
    #[clap(visible_alias = "a")]
    Assess {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Print the prompt that would be sent, without calling the API
    #[clap(visible_alias = "p")]
    Prompt {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// List the sample profiles
    Presets,
    /// Fill the form interactively
    #[clap(visible_alias = "f")]
    Form,
}

/// Profile values taken from the command line.
#[derive(Args, Debug, Default)]
struct ProfileArgs {
    /// Start from a sample profile (see `dahej presets`)
    #[arg(long)]
    preset: Option<String>,
    #[arg(long)]
    salary: Option<String>,
    #[arg(long)]
    caste: Option<String>,
    #[arg(long)]
    complexion: Option<String>,
    /// Height in cm
    #[arg(long)]
    height: Option<String>,
    #[arg(long)]
    property_value: Option<String>,
    #[arg(long)]
    education: Option<String>,
    #[arg(long)]
    family_status: Option<String>,
    #[arg(long)]
    foreign_status: Option<String>,
    /// Set any field as NAME=VALUE (repeatable)
    #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
    fields: Vec<String>,
}

impl ProfileArgs {
    /// Field assignments in application order: named flags first, then `--field`.
    fn assignments(&self) -> Result<Vec<(ProfileField, String)>, AppError> {
        let named = [
            (ProfileField::Salary, &self.salary),
            (ProfileField::Caste, &self.caste),
            (ProfileField::Complexion, &self.complexion),
            (ProfileField::Height, &self.height),
            (ProfileField::PropertyValue, &self.property_value),
            (ProfileField::Education, &self.education),
            (ProfileField::FamilyStatus, &self.family_status),
            (ProfileField::ForeignStatus, &self.foreign_status),
        ];

        let mut assignments: Vec<(ProfileField, String)> = named
            .into_iter()
            .filter_map(|(field, value)| value.clone().map(|value| (field, value)))
            .collect();

        for raw in &self.fields {
            let (name, value) = raw.split_once('=').ok_or_else(|| {
                AppError::config_error(format!("Expected NAME=VALUE for --field, got '{}'", raw))
            })?;
            assignments.push((ProfileField::parse(name)?, value.to_string()));
        }

        Ok(assignments)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Assess { profile } => run_assess(cli.config, &profile),
        Commands::Prompt { profile } => run_prompt(&profile),
        Commands::Presets => {
            run_presets();
            Ok(())
        }
        Commands::Form => form::run_form(cli.config.as_deref()),
    };

    if let Err(e) = result {
        match e {
            AppError::Assessment(err) => eprintln!("{}", err),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn run_assess(config_path: Option<PathBuf>, profile: &ProfileArgs) -> Result<(), AppError> {
    let options = AssessOptions {
        config_path,
        preset: profile.preset.clone(),
        fields: profile.assignments()?,
    };

    let assessment = api::assess(&options)?;
    print_assessment(&assessment);
    Ok(())
}

fn run_prompt(profile: &ProfileArgs) -> Result<(), AppError> {
    let input = api::build_profile(profile.preset.as_deref(), &profile.assignments()?)?;
    println!("{}", api::prompt_preview(&input)?);
    Ok(())
}

fn run_presets() {
    for preset in api::presets() {
        println!("{} {} ({})", preset.emoji, preset.name, preset.id);
        let profile = preset.profile();
        for field in ProfileField::ALL {
            println!("  {}: {}", field.label(), profile.get(field));
        }
    }
}

/// Print an assessment, spacing out the final-burn lines.
pub(crate) fn print_assessment(assessment: &Assessment) {
    for line in assessment.lines() {
        match line.marker {
            Some(LineMarker::Important) => println!("\n{}", line.text),
            Some(_) => println!("{}", line.text),
            None if line.text.trim().is_empty() => println!(),
            None => println!("  {}", line.text),
        }
    }
}
