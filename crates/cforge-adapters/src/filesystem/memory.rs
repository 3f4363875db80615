//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use cforge_core::{application::Filesystem, error::CoreResult};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut inner = self.inner.write().expect("lock poisoned");

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        let mut inner = self.inner.write().expect("lock poisoned");

        // Mirror the real filesystem: the parent must exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(cforge_core::application::ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cforge_core::{
        domain::{Language, ProjectConfig},
        application::Materializer,
        planner,
    };

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_ok());
        assert_eq!(fs.read_file(Path::new("a/b.txt")).unwrap(), "x");
    }

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();
        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
    }

    #[test]
    fn materializes_a_full_plan_in_memory() {
        let config = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .copyright_year(2026)
            .build();
        let plan = planner::plan(&config);

        let fs = MemoryFilesystem::new();
        let materializer = Materializer::new(Box::new(fs.clone()));
        materializer.materialize(&plan).unwrap();

        assert!(fs.exists(Path::new("demo/src")));
        let main = fs.read_file(Path::new("demo/src/main.cpp")).unwrap();
        assert!(main.contains("Hello from demo!"));
    }

    #[test]
    fn stale_files_from_a_prior_run_are_left_alone() {
        // Rerunning with a smaller configuration overwrites what it
        // declares and does not clean up files it no longer knows about.
        let rich = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .sanitizers(true)
            .copyright_year(2026)
            .build();
        let lean = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .copyright_year(2026)
            .build();

        let fs = MemoryFilesystem::new();
        let materializer = Materializer::new(Box::new(fs.clone()));
        materializer.materialize(&planner::plan(&rich)).unwrap();
        materializer.materialize(&planner::plan(&lean)).unwrap();

        // The sanitizers module survives even though the lean plan no
        // longer declares it.
        assert!(fs.read_file(Path::new("demo/cmake/Sanitizers.cmake")).is_some());
    }

    #[test]
    fn rerunning_materialization_is_idempotent() {
        let config = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .copyright_year(2026)
            .build();
        let plan = planner::plan(&config);

        let fs = MemoryFilesystem::new();
        let materializer = Materializer::new(Box::new(fs.clone()));
        materializer.materialize(&plan).unwrap();
        let first: std::collections::BTreeMap<_, _> = fs
            .list_files()
            .into_iter()
            .map(|p| (p.clone(), fs.read_file(&p).unwrap()))
            .collect();

        materializer.materialize(&plan).unwrap();
        let second: std::collections::BTreeMap<_, _> = fs
            .list_files()
            .into_iter()
            .map(|p| (p.clone(), fs.read_file(&p).unwrap()))
            .collect();

        assert_eq!(first, second);
    }
}
