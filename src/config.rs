//! Startup configuration: where the model artifacts live.
//!
//! Resolution order for the models directory, first match wins:
//!
//! 1. the `--models-dir` flag
//! 2. `DIAGNOSE_MODELS_DIR`
//! 3. `models_dir` in the YAML file named by `DIAGNOSE_CONFIG`
//! 4. `saved_models/` next to the executable
//!
//! The YAML file may also point individual tasks at other artifact files:
//!
//! ```yaml
//! models_dir: ./models
//! artifacts:
//!   heart_disease: heart_v2.json
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::ports::filesystem::FileSystem;
use crate::registry::ArtifactPaths;
use crate::task::Task;

/// Environment variable overriding the models directory.
pub const MODELS_DIR_ENV: &str = "DIAGNOSE_MODELS_DIR";
/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "DIAGNOSE_CONFIG";
/// Models directory name inside the install directory.
pub const INSTALL_MODELS_DIR: &str = "saved_models";

/// Contents of the YAML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Models directory; relative paths resolve against the config file.
    #[serde(default)]
    pub models_dir: Option<PathBuf>,
    /// Per-task artifact overrides; relative paths resolve against the
    /// models directory.
    #[serde(default)]
    pub artifacts: ArtifactOverrides,
}

/// Optional per-task artifact paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactOverrides {
    /// Diabetes artifact.
    #[serde(default)]
    pub diabetes: Option<PathBuf>,
    /// Heart disease artifact.
    #[serde(default)]
    pub heart_disease: Option<PathBuf>,
    /// Parkinson's artifact.
    #[serde(default)]
    pub parkinsons: Option<PathBuf>,
}

impl ArtifactOverrides {
    fn get(&self, task: Task) -> Option<&Path> {
        match task {
            Task::Diabetes => self.diabetes.as_deref(),
            Task::HeartDisease => self.heart_disease.as_deref(),
            Task::Parkinsons => self.parkinsons.as_deref(),
        }
    }
}

/// Raw inputs to configuration resolution.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    /// Value of `--models-dir`.
    pub flag: Option<PathBuf>,
    /// Value of `DIAGNOSE_MODELS_DIR`.
    pub env_models_dir: Option<PathBuf>,
    /// Value of `DIAGNOSE_CONFIG`.
    pub config_file: Option<PathBuf>,
    /// Directory holding the running executable.
    pub install_dir: Option<PathBuf>,
}

impl Sources {
    /// Reads the environment and locates the executable.
    ///
    /// Empty environment values are treated as unset.
    #[must_use]
    pub fn from_env(flag: Option<PathBuf>) -> Self {
        let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            flag,
            env_models_dir: var(MODELS_DIR_ENV),
            config_file: var(CONFIG_ENV),
            install_dir: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the artifacts are read from.
    pub models_dir: PathBuf,
    /// Artifact path per task.
    pub artifacts: ArtifactPaths,
}

/// Resolves settings from `sources`, reading the config file through `fs`.
///
/// # Errors
///
/// Returns [`ConfigError`] if a named config file cannot be read or parsed,
/// or if no source yields a models directory.
pub fn resolve(fs: &dyn FileSystem, sources: &Sources) -> Result<Settings, ConfigError> {
    let file = match &sources.config_file {
        Some(path) => Some((path.as_path(), load_file(fs, path)?)),
        None => None,
    };

    let from_file = file.as_ref().and_then(|(path, cfg)| {
        cfg.models_dir.as_ref().map(|dir| relative_to(path.parent().unwrap_or(Path::new("")), dir))
    });

    let models_dir = sources
        .flag
        .clone()
        .or_else(|| sources.env_models_dir.clone())
        .or(from_file)
        .or_else(|| sources.install_dir.as_ref().map(|dir| dir.join(INSTALL_MODELS_DIR)))
        .ok_or(ConfigError::NoModelsDir)?;

    let mut artifacts = ArtifactPaths::in_dir(&models_dir);
    if let Some((_, cfg)) = &file {
        for task in Task::ALL {
            if let Some(path) = cfg.artifacts.get(task) {
                artifacts = artifacts.with(task, relative_to(&models_dir, path));
            }
        }
    }

    debug!("models directory: {}", models_dir.display());
    Ok(Settings { models_dir, artifacts })
}

fn load_file(fs: &dyn FileSystem, path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs.read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_yaml::from_str(&contents)
        .map_err(|e| ConfigError::Invalid { path: path.to_path_buf(), reason: e.to_string() })
}

fn relative_to(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
