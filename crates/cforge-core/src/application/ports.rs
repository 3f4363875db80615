//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cforge-adapters` crate provides implementations.

use crate::error::CoreResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cforge_adapters::filesystem::LocalFilesystem` (production)
/// - `cforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` must be idempotent: a pre-existing directory is not
///   an error.
/// - `write_file` overwrites without confirmation.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
