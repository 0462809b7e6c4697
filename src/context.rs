//! Service context bundling the port trait objects used at startup.

use log::{error, info};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::config::{self, Sources};
use crate::ports::filesystem::FileSystem;
use crate::registry::ModelRegistry;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations: live for the
/// binary, in-memory ones for tests.
pub struct ServiceContext {
    /// Filesystem for config files and model artifacts.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context over the given filesystem.
    #[must_use]
    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Resolves configuration and loads all three models.
    ///
    /// This is the only way into a serving state: no registry is returned
    /// unless every artifact loaded.
    ///
    /// # Errors
    ///
    /// Returns a diagnostic naming the config problem or the artifact that
    /// failed to load.
    pub fn start(&self, sources: &Sources) -> Result<ModelRegistry, String> {
        let settings = config::resolve(self.fs.as_ref(), sources).map_err(|e| {
            error!("configuration failed: {e}");
            e.to_string()
        })?;
        let registry = ModelRegistry::load(self.fs.as_ref(), &settings.artifacts).map_err(|e| {
            error!("model loading failed: {e}");
            e.to_string()
        })?;
        info!("models ready from {}", settings.models_dir.display());
        Ok(registry)
    }
}
