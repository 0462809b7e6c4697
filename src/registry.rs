//! Model registry: one loaded classifier per task.
//!
//! Built once at startup, then only ever borrowed. Loading is all-or-nothing:
//! a registry value exists only if all three artifacts loaded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::adapters::live::linear::LinearModel;
use crate::error::ModelLoadError;
use crate::ports::filesystem::FileSystem;
use crate::ports::model::ModelHandle;
use crate::task::Task;

/// Where each task's artifact lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    paths: HashMap<Task, PathBuf>,
}

impl ArtifactPaths {
    /// Default artifact file names inside `models_dir`.
    #[must_use]
    pub fn in_dir(models_dir: &Path) -> Self {
        let paths = Task::ALL.into_iter().map(|t| (t, models_dir.join(t.artifact_file()))).collect();
        Self { paths }
    }

    /// Replaces the path for one task.
    #[must_use]
    pub fn with(mut self, task: Task, path: PathBuf) -> Self {
        self.paths.insert(task, path);
        self
    }

    /// Path of `task`'s artifact.
    #[must_use]
    pub fn get(&self, task: Task) -> &Path {
        // Every constructor fills all tasks.
        &self.paths[&task]
    }
}

/// Turns the text of one artifact into a model handle.
pub type ArtifactParser = fn(&str) -> Result<Box<dyn ModelHandle>, String>;

/// Parses the JSON linear-model artifact format shipped in `saved_models/`.
///
/// # Errors
///
/// Returns the reason the artifact is malformed.
pub fn parse_linear(json: &str) -> Result<Box<dyn ModelHandle>, String> {
    let model = LinearModel::from_json(json)?;
    debug!("parsed {:?} artifact", model.kind());
    Ok(Box::new(model))
}

/// The three loaded model handles.
pub struct ModelRegistry {
    diabetes: Box<dyn ModelHandle>,
    heart_disease: Box<dyn ModelHandle>,
    parkinsons: Box<dyn ModelHandle>,
}

impl ModelRegistry {
    /// Assembles a registry from already-loaded handles.
    #[must_use]
    pub fn from_handles(
        diabetes: Box<dyn ModelHandle>,
        heart_disease: Box<dyn ModelHandle>,
        parkinsons: Box<dyn ModelHandle>,
    ) -> Self {
        Self { diabetes, heart_disease, parkinsons }
    }

    /// Loads every artifact through `fs`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelLoadError`] in task order. Each error names
    /// the task and the artifact path.
    pub fn load(fs: &dyn FileSystem, paths: &ArtifactPaths) -> Result<Self, ModelLoadError> {
        Self::load_with(fs, paths, parse_linear)
    }

    /// Loads every artifact through `fs`, decoding each with `parse`.
    ///
    /// # Errors
    ///
    /// Same as [`ModelRegistry::load`]; a `parse` failure is `Corrupt`.
    pub fn load_with(
        fs: &dyn FileSystem,
        paths: &ArtifactPaths,
        parse: ArtifactParser,
    ) -> Result<Self, ModelLoadError> {
        Ok(Self {
            diabetes: load_artifact(fs, Task::Diabetes, paths.get(Task::Diabetes), parse)?,
            heart_disease: load_artifact(
                fs,
                Task::HeartDisease,
                paths.get(Task::HeartDisease),
                parse,
            )?,
            parkinsons: load_artifact(fs, Task::Parkinsons, paths.get(Task::Parkinsons), parse)?,
        })
    }

    /// Handle serving `task`.
    #[must_use]
    pub fn handle(&self, task: Task) -> &dyn ModelHandle {
        match task {
            Task::Diabetes => self.diabetes.as_ref(),
            Task::HeartDisease => self.heart_disease.as_ref(),
            Task::Parkinsons => self.parkinsons.as_ref(),
        }
    }
}

fn load_artifact(
    fs: &dyn FileSystem,
    task: Task,
    path: &Path,
    parse: ArtifactParser,
) -> Result<Box<dyn ModelHandle>, ModelLoadError> {
    if !fs.exists(path) {
        return Err(ModelLoadError::Missing { task, path: path.to_path_buf() });
    }
    let json = fs.read_to_string(path).map_err(|e| ModelLoadError::Unreadable {
        task,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let model = parse(&json).map_err(|reason| ModelLoadError::Corrupt {
        task,
        path: path.to_path_buf(),
        reason,
    })?;
    let actual = model.n_features();
    if actual != task.field_count() {
        return Err(ModelLoadError::FeatureCount {
            task,
            path: path.to_path_buf(),
            expected: task.field_count(),
            actual,
        });
    }
    info!("loaded {task} model ({actual} features) from {}", path.display());
    Ok(model)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory filesystem for loading artifacts without touching disk.
    #[derive(Default)]
    pub(crate) struct MemFs {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl MemFs {
        pub(crate) fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
            self.files.lock().unwrap().insert(path.into(), contents.into());
        }
    }

    impl FileSystem for MemFs {
        fn read_to_string(
            &self,
            path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| format!("file not found: {}", path.display()).into())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    pub(crate) fn svc_json(n: usize) -> String {
        let coefficients = vec!["1.0"; n].join(", ");
        format!(r#"{{"kind": "linear_svc", "coefficients": [{coefficients}], "intercept": -1.0}}"#)
    }

    fn seeded_fs(dir: &Path) -> MemFs {
        let fs = MemFs::default();
        for task in Task::ALL {
            fs.insert(dir.join(task.artifact_file()), svc_json(task.field_count()));
        }
        fs
    }

    #[test]
    fn loads_all_three_models() {
        let dir = Path::new("/opt/diagnose/saved_models");
        let fs = seeded_fs(dir);
        let registry = ModelRegistry::load(&fs, &ArtifactPaths::in_dir(dir)).unwrap();
        for task in Task::ALL {
            assert_eq!(registry.handle(task).n_features(), task.field_count());
        }
    }

    #[test]
    fn missing_artifact_names_task_and_path() {
        let dir = Path::new("/models");
        let fs = MemFs::default();
        fs.insert(dir.join("diabetes_model.json"), svc_json(8));
        let err = ModelRegistry::load(&fs, &ArtifactPaths::in_dir(dir)).err().unwrap();
        match err {
            ModelLoadError::Missing { task, path } => {
                assert_eq!(task, Task::HeartDisease);
                assert_eq!(path, dir.join("heart_disease_model.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn corrupt_artifact_is_reported() {
        let dir = Path::new("/models");
        let fs = seeded_fs(dir);
        fs.insert(dir.join("parkinsons_model.json"), "\u{0}\u{1}pickle");
        let err = ModelRegistry::load(&fs, &ArtifactPaths::in_dir(dir)).err().unwrap();
        assert!(matches!(err, ModelLoadError::Corrupt { task: Task::Parkinsons, .. }));
    }

    #[test]
    fn mis_sized_artifact_is_reported() {
        let dir = Path::new("/models");
        let fs = seeded_fs(dir);
        fs.insert(dir.join("diabetes_model.json"), svc_json(9));
        let err = ModelRegistry::load(&fs, &ArtifactPaths::in_dir(dir)).err().unwrap();
        match err {
            ModelLoadError::FeatureCount { task, expected, actual, .. } => {
                assert_eq!(task, Task::Diabetes);
                assert_eq!((expected, actual), (8, 9));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn other_artifact_formats_plug_in() {
        fn parse_width(text: &str) -> Result<Box<dyn ModelHandle>, String> {
            let width = text.trim().parse::<usize>().map_err(|_| format!("not a width: {text}"))?;
            let mut model = crate::predict::tests::FixedModel::new(Task::Diabetes, 1);
            model.width = width;
            Ok(Box::new(model))
        }

        let dir = Path::new("/models");
        let fs = MemFs::default();
        for task in Task::ALL {
            fs.insert(dir.join(task.artifact_file()), task.field_count().to_string());
        }
        let paths = ArtifactPaths::in_dir(dir);
        let registry = ModelRegistry::load_with(&fs, &paths, parse_width).unwrap();
        assert_eq!(registry.handle(Task::Parkinsons).n_features(), 22);

        fs.insert(dir.join("heart_disease_model.json"), "thirteen");
        let err = ModelRegistry::load_with(&fs, &paths, parse_width).err().unwrap();
        assert!(matches!(err, ModelLoadError::Corrupt { task: Task::HeartDisease, .. }));
    }

    #[test]
    fn path_overrides_are_used() {
        let dir = Path::new("/models");
        let fs = seeded_fs(dir);
        fs.insert("/elsewhere/heart.json", svc_json(13));
        let paths = ArtifactPaths::in_dir(dir).with(Task::HeartDisease, "/elsewhere/heart.json".into());
        assert_eq!(paths.get(Task::HeartDisease), Path::new("/elsewhere/heart.json"));
        assert!(ModelRegistry::load(&fs, &paths).is_ok());
    }
}
