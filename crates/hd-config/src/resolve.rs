//! Model configuration resolution.
//!
//! Precedence, highest first:
//! 1. Explicit path from the command line
//! 2. `HEREDITY_MODEL` environment variable
//! 3. `<config dir>/heredity/model.json` (XDG on Linux)
//! 4. Embedded defaults

use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::ModelParams;
use crate::validate::ValidationError;

/// Environment variable naming a model file.
pub const MODEL_ENV_VAR: &str = "HEREDITY_MODEL";

/// File name looked up in the user config directory.
pub const MODEL_FILE_NAME: &str = "model.json";

/// Candidate locations for the model file.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub cli: Option<PathBuf>,
    pub env: Option<PathBuf>,
    pub user_dir: Option<PathBuf>,
}

impl ConfigPaths {
    /// Collect candidates from the CLI argument, environment and config dir.
    pub fn discover(cli: Option<&Path>) -> Self {
        Self {
            cli: cli.map(Path::to_path_buf),
            env: std::env::var_os(MODEL_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            user_dir: dirs::config_dir().map(|d| d.join("heredity")),
        }
    }
}

/// Where the resolved model came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    Cli(PathBuf),
    Env(PathBuf),
    UserConfig(PathBuf),
    Default,
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::Cli(p) => write!(f, "cli:{}", p.display()),
            ModelSource::Env(p) => write!(f, "env:{}", p.display()),
            ModelSource::UserConfig(p) => write!(f, "user:{}", p.display()),
            ModelSource::Default => write!(f, "default"),
        }
    }
}

/// A validated model together with its origin.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub model: ModelParams,
    pub source: ModelSource,
}

/// Resolve and validate the model parameters.
///
/// Explicit CLI and environment paths must exist; the user config file is
/// optional and silently skipped when absent.
pub fn resolve_config(paths: &ConfigPaths) -> Result<ResolvedModel, ValidationError> {
    let (model, source) = if let Some(path) = &paths.cli {
        (ModelParams::from_file(path)?, ModelSource::Cli(path.clone()))
    } else if let Some(path) = &paths.env {
        (ModelParams::from_file(path)?, ModelSource::Env(path.clone()))
    } else {
        match paths
            .user_dir
            .as_ref()
            .map(|dir| dir.join(MODEL_FILE_NAME))
            .filter(|p| p.is_file())
        {
            Some(path) => (ModelParams::from_file(&path)?, ModelSource::UserConfig(path)),
            None => (ModelParams::default(), ModelSource::Default),
        }
    };

    model.validate()?;
    Ok(ResolvedModel { model, source })
}
