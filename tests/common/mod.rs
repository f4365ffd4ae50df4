pub mod mock_model;
pub mod mock_transcriber;

use std::path::PathBuf;
use std::process::{Command, Output};
use std::fs;
use tempfile::TempDir;

/// Linear model used by CLI tests: risk grows with absences, shrinks with grade
pub const TEST_MODEL_JSON: &str = r#"{
    "columns": ["edad", "faltas", "nota_media", "repite", "trabaja", "horas_estudio", "motivacion"],
    "coefficients": [0.0, 0.05, -0.1, 0.25, 0.0, 0.0, -0.125],
    "intercept": 0.75
}"#;

/// Isolated config dir plus a model file for running the binary
pub struct TestContext {
    pub temp_dir: TempDir,
    pub model_path: PathBuf,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let model_path = temp_dir.path().join("modelo_abandono.json");
        fs::write(&model_path, TEST_MODEL_JSON).expect("Failed to write model");

        // Never created, so the binary runs on defaults
        let config_path = temp_dir.path().join("config/config.json");

        TestContext {
            temp_dir,
            model_path,
            config_path,
        }
    }

    /// Run the binary with our config and model, plus `args`
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_abandono"))
            .arg("--config")
            .arg(&self.config_path)
            .arg("--model")
            .arg(&self.model_path)
            .args(args)
            .env("XDG_CONFIG_HOME", self.temp_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("DEEPGRAM_API_KEY")
            .output()
            .expect("Failed to run abandono")
    }
}
