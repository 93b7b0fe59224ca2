pub mod assessment;
pub mod config;
pub mod error;
pub mod preset;
pub mod profile;
pub mod prompt;

pub use assessment::{Assessment, AssessmentError, LineMarker, ResultLine};
pub use config::{AppConfig, CONFIG_FILE, GeminiApiConfig};
pub use error::AppError;
pub use preset::Preset;
pub use profile::{ProfileField, ProfileInput};
pub use prompt::render_prompt;
