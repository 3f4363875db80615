//! Materializer - writes a [`FilePlan`] to disk through the
//! [`Filesystem`] port.
//!
//! Semantics:
//! - directory creation is idempotent; pre-existing output is reused
//! - files are overwritten without confirmation
//! - files with empty content are skipped
//! - the first I/O failure aborts the run and surfaces the failing path;
//!   whatever was already written stays on disk (no rollback, no
//!   transactional guarantee)
//! - files from a previous run that the current plan no longer declares
//!   are left alone

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{FilePlan, PlanEntry},
    error::CoreResult,
};

/// Writes file plans through a filesystem port.
pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
}

impl Materializer {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Whether the plan's output root already exists on disk.
    pub fn output_exists(&self, plan: &FilePlan) -> bool {
        self.filesystem.exists(plan.root())
    }

    /// Write every entry of the plan beneath its root.
    #[instrument(skip_all, fields(root = %plan.root().display()))]
    pub fn materialize(&self, plan: &FilePlan) -> CoreResult<()> {
        plan.validate()?;

        self.filesystem.create_dir_all(plan.root())?;

        let mut files_written = 0usize;
        for entry in &plan.entries {
            match entry {
                PlanEntry::Directory(dir) => {
                    let path = plan.root().join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                }
                PlanEntry::File(file) => {
                    if file.is_empty() {
                        debug!(path = %file.path.display(), "skipping empty file");
                        continue;
                    }

                    let path = plan.root().join(&file.path);
                    self.ensure_parent(&path)?;
                    self.filesystem.write_file(&path, &file.content)?;
                    files_written += 1;
                }
            }
        }

        info!(files = files_written, "materialization complete");
        Ok(())
    }

    fn ensure_parent(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::application::ApplicationError;
    use std::path::PathBuf;

    fn small_plan() -> FilePlan {
        let mut plan = FilePlan::new("out");
        plan.add_directory("src");
        plan.add_file("src/main.cpp", "int main() { return 0; }\n".into());
        plan.add_file("empty.txt", String::new());
        plan
    }

    #[test]
    fn writes_directories_then_files() {
        let mut fs = MockFilesystem::new();
        // root + declared dir + parent of src/main.cpp
        fs.expect_create_dir_all().times(3).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("out/src/main.cpp") && content.contains("int main")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let materializer = Materializer::new(Box::new(fs));
        materializer.materialize(&small_plan()).unwrap();
    }

    #[test]
    fn empty_files_are_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // Only src/main.cpp — never empty.txt.
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let materializer = Materializer::new(Box::new(fs));
        materializer.materialize(&small_plan()).unwrap();
    }

    #[test]
    fn first_write_failure_aborts_with_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|path, _| {
            Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let materializer = Materializer::new(Box::new(fs));
        let err = materializer.materialize(&small_plan()).unwrap_err();
        assert!(err.to_string().contains("out/src/main.cpp"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn invalid_plan_is_rejected_before_any_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut plan = FilePlan::new("out");
        plan.add_file("/abs/path", "nope".into());

        let materializer = Materializer::new(Box::new(fs));
        assert!(materializer.materialize(&plan).is_err());
    }

    #[test]
    fn output_exists_queries_the_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|path| path == Path::new("out"))
            .return_const(true);

        let materializer = Materializer::new(Box::new(fs));
        assert!(materializer.output_exists(&FilePlan::new(PathBuf::from("out"))));
    }
}
