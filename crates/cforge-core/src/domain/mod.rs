//! Domain layer: the configuration model and the file-plan data types.
//!
//! Pure logic, no I/O, no observability. Everything downstream (planner,
//! materializer, CLI) depends on this module; it depends on nothing but
//! `std`, `serde`, and `chrono` (for the construction-time year capture).

pub mod config;
pub mod error;
pub mod plan;
pub mod value_objects;

pub use config::{ConfigBuilder, HasLanguage, NoLanguage, Preset, ProjectConfig, validate_project_name};
pub use error::{DomainError, ErrorCategory};
pub use plan::{DirectoryToCreate, FilePlan, FileToWrite, PlanEntry};
pub use value_objects::{
    CTestFramework, CxxTestFramework, Language, License, PackageManager, ProjectKind,
    TestFramework,
};
