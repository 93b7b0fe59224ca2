//! Shared testing utilities for dahej CLI and library tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variable the tests point the API key lookup at.
pub const TEST_KEY_ENV: &str = "DAHEJ_TEST_API_KEY";

/// Gemini method path for the default model.
pub const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

/// Testing harness providing an isolated working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let original_cwd = env::current_dir().expect("Failed to get current directory");

        Self { root, work_dir, original_cwd }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `dahej` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dahej").expect("Failed to locate dahej binary");
        cmd.current_dir(self.work_dir()).env_remove("GEMINI_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Write `dahej.toml` pointing the client at `api_url` and the test key variable.
    pub fn write_config(&self, api_url: &str) {
        let content = format!(
            "[gemini]\napi_url = \"{}\"\ntimeout_secs = 5\napi_key_env = \"{}\"\n",
            api_url, TEST_KEY_ENV
        );
        fs::write(self.work_dir.join("dahej.toml"), content).expect("Failed to write config");
    }

    /// Run a closure with the work directory as the process CWD.
    pub fn with_work_dir<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        env::set_current_dir(&self.work_dir).expect("Failed to change directory");
        let result = f();
        env::set_current_dir(&self.original_cwd).expect("Failed to restore directory");
        result
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_cwd);
    }
}

/// Gemini success body wrapping `text` in a single candidate.
#[allow(dead_code)]
pub fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
