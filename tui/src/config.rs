use std::{env, fs::File, path::PathBuf};

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use predictor::ArtifactPaths;

const ARTIFACTS_VAR: &str = "PAYLYTICS_ARTIFACTS";
const LOG_VAR: &str = "PAYLYTICS_LOG";

const DEFAULT_ARTIFACTS_DIR: &str = ".";
const DEFAULT_LOG_PATH: &str = "paylytics.log";
const DEFAULT_FILTER: &str = "info";

/// Runtime settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub artifacts_dir: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let var = |name: &str, default: &str| {
            env::var_os(name)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            artifacts_dir: var(ARTIFACTS_VAR, DEFAULT_ARTIFACTS_DIR),
            log_path: var(LOG_VAR, DEFAULT_LOG_PATH),
        }
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.artifacts_dir)
    }
}

/// Sends `log` output to the configured file; the terminal belongs to the UI.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(config: &Config) -> Result<()> {
    let file = File::create(&config.log_path)
        .with_context(|| format!("cannot create log file {}", config.log_path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
