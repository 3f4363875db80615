//! cforge Core
//!
//! This crate provides the domain and application layers for the cforge
//! project scaffolding tool, following a ports-and-adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           cforge-cli (CLI)              │
//! │   flags / wizard → ProjectConfig        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Planner (pure function)         │
//! │      ProjectConfig → FilePlan           │
//! └──────────────────┬──────────────────────┘
//!                    │ feeds
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Materializer (service)          │
//! │    FilePlan → Filesystem port calls     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     cforge-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cforge_core::{
//!     application::Materializer,
//!     domain::{Language, ProjectConfig},
//!     planner,
//! };
//!
//! // 1. Build the configuration once.
//! let config = ProjectConfig::builder()
//!     .language(Language::Cxx)
//!     .project_name("myapp")
//!     .build();
//!
//! // 2. Plan the file set (pure computation).
//! let plan = planner::plan(&config);
//!
//! // 3. Materialize through an injected filesystem adapter.
//! # let filesystem: Box<dyn cforge_core::application::Filesystem> = unimplemented!();
//! let materializer = Materializer::new(filesystem);
//! materializer.materialize(&plan).unwrap();
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// The file-set planner (the core rule table)
pub mod planner;

// Template bodies (opaque string producers)
pub mod templates;

// Application layer (materialization + ports)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ApplicationError, Filesystem, Materializer};
    pub use crate::domain::{
        DomainError, FilePlan, Language, License, PackageManager, Preset, ProjectConfig,
        ProjectKind, TestFramework, validate_project_name,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::planner::plan;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
