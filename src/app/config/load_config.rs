//! Configuration loading from the working directory or an explicit path.

use std::fs;
use std::path::Path;

use crate::domain::config::{self, CONFIG_FILE};
use crate::domain::{AppConfig, AppError};

/// Load `AppConfig`.
///
/// An explicit path must exist. Without one, `dahej.toml` in `work_dir` is used
/// when present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<AppConfig, AppError> {
    let config_path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = work_dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!(dir = %work_dir.display(), "no config file, using defaults");
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %config_path.display(), "loading config");
    let content = fs::read_to_string(&config_path)?;
    config::parse_config_content(&content)
}
