//! The `ProjectConfig` aggregate root and its typestate builder.
//!
//! A `ProjectConfig` is the fully-resolved description of the project the
//! user wants to scaffold. It is constructed exactly once — from CLI flags
//! or from the interactive wizard — optionally adjusted by one preset, and
//! then handed to the planner by immutable reference. Nothing mutates it
//! after planning begins.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoLanguage` / `HasLanguage`)
//! to enforce at *compile time* that the language is chosen before any
//! language-dependent field (standard, test framework). `build()` fills
//! every unset field from the default policy; each default is keyed only on
//! explicitly supplied values, never on another defaulted field.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the application and CLI layers, not the domain.

use std::marker::PhantomData;
use std::path::PathBuf;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Language, License, PackageManager, ProjectKind, TestFramework},
};

/// Characters rejected anywhere in a project name.
///
/// The name doubles as a directory name and as the stem of generated
/// identifiers, so path separators and shell-special characters are out.
const FORBIDDEN_NAME_CHARS: &[char] = &[' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Validate a project name against the character-safety rule.
///
/// Applied uniformly to both entry points (flags and wizard) — an
/// unvalidated name would otherwise flow straight into filesystem paths
/// and generated source identifiers.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') || name.starts_with('-') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.' or '-'".into(),
        });
    }
    if name.contains(FORBIDDEN_NAME_CHARS) {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain spaces, path separators, or shell-special characters"
                .into(),
        });
    }
    Ok(())
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-resolved project configuration.
///
/// Every field is filled at construction; the planner reads but never
/// writes. The ten boolean toggles are independent — the only coupling
/// between them and the rest of the config lives in the planner rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    project_name: String,
    description: String,
    author_name: String,
    language: Language,
    standard: String,
    project_type: ProjectKind,
    test_framework: TestFramework,
    package_manager: PackageManager,
    license: License,

    // Feature toggles
    use_clang_format: bool,
    use_clang_tidy: bool,
    use_sanitizers: bool,
    use_coverage: bool,
    use_doxygen: bool,
    use_docker: bool,
    use_pre_commit: bool,
    include_ci: bool,
    include_vscode: bool,
    include_benchmark: bool,

    // Captured at construction so planning stays a pure function of the
    // config (the license template interpolates it).
    copyright_year: i32,

    output_dir: PathBuf,
}

impl ProjectConfig {
    /// Start building a new `ProjectConfig`.
    pub fn builder() -> ConfigBuilder<NoLanguage> {
        ConfigBuilder::new()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn author_name(&self) -> &str {
        &self.author_name
    }
    pub const fn language(&self) -> Language {
        self.language
    }
    pub fn standard(&self) -> &str {
        &self.standard
    }
    pub const fn project_type(&self) -> ProjectKind {
        self.project_type
    }
    pub const fn test_framework(&self) -> TestFramework {
        self.test_framework
    }
    pub const fn package_manager(&self) -> PackageManager {
        self.package_manager
    }
    pub const fn license(&self) -> License {
        self.license
    }
    pub const fn use_clang_format(&self) -> bool {
        self.use_clang_format
    }
    pub const fn use_clang_tidy(&self) -> bool {
        self.use_clang_tidy
    }
    pub const fn use_sanitizers(&self) -> bool {
        self.use_sanitizers
    }
    pub const fn use_coverage(&self) -> bool {
        self.use_coverage
    }
    pub const fn use_doxygen(&self) -> bool {
        self.use_doxygen
    }
    pub const fn use_docker(&self) -> bool {
        self.use_docker
    }
    pub const fn use_pre_commit(&self) -> bool {
        self.use_pre_commit
    }
    pub const fn include_ci(&self) -> bool {
        self.include_ci
    }
    pub const fn include_vscode(&self) -> bool {
        self.include_vscode
    }
    pub const fn include_benchmark(&self) -> bool {
        self.include_benchmark
    }
    pub const fn copyright_year(&self) -> i32 {
        self.copyright_year
    }
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// The identifier used for C/C++ namespaces and symbol prefixes.
    ///
    /// Hyphens are legal in project (and target) names but not in C
    /// identifiers, so they map to underscores here. Everything that links
    /// against the *target* uses `project_name()` verbatim; everything that
    /// names a *symbol* goes through this.
    pub fn module_name(&self) -> String {
        self.project_name
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect()
    }

    /// UPPER_SNAKE token for include guards.
    pub fn guard_name(&self) -> String {
        let mut out = String::with_capacity(self.project_name.len() + 4);
        for (i, c) in self.project_name.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                out.push('_');
            }
            if c == '-' || c == ' ' {
                out.push('_');
            } else {
                out.push(c.to_ascii_uppercase());
            }
        }
        out
    }

    /// Apply a preset adjustment, consuming the config.
    ///
    /// Each preset is a total override of the toggle set, not a merge.
    /// At most one preset is ever applied (the CLI enforces mutual
    /// exclusion of `--full` / `--minimal`).
    pub fn with_preset(mut self, preset: Preset) -> Self {
        match preset {
            Preset::Full => {
                self.use_clang_format = true;
                self.use_clang_tidy = true;
                self.use_sanitizers = true;
                self.use_coverage = true;
                self.use_doxygen = true;
                self.use_docker = true;
                self.use_pre_commit = true;
                self.include_ci = true;
                self.include_vscode = true;
                self.include_benchmark = true;
                if !self.test_framework.is_some() {
                    self.test_framework = TestFramework::default_for(self.language);
                }
            }
            Preset::Minimal => {
                self.use_clang_format = false;
                self.use_clang_tidy = false;
                self.use_sanitizers = false;
                self.use_coverage = false;
                self.use_doxygen = false;
                self.use_docker = false;
                self.use_pre_commit = false;
                self.include_ci = false;
                self.include_vscode = false;
                self.include_benchmark = false;
            }
        }
        self
    }
}

// ── Presets ───────────────────────────────────────────────────────────────────

/// Named bulk-override of the toggle set, applied once after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Everything on; test framework upgraded to the language default if unset.
    Full,
    /// Everything off; test framework left untouched.
    Minimal,
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: language has not yet been set.
pub struct NoLanguage;
/// Marker: language has been set; language-dependent fields may now follow.
pub struct HasLanguage;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`ProjectConfig`].
///
/// Compile-time guarantee: `standard` and `test_framework` are only
/// reachable once the language is known, because their vocabulary depends
/// on it.
pub struct ConfigBuilder<L> {
    project_name: String,
    description: Option<String>,
    author_name: Option<String>,
    language: Option<Language>,
    standard: Option<String>,
    project_type: Option<ProjectKind>,
    test_framework: Option<TestFramework>,
    package_manager: Option<PackageManager>,
    license: Option<License>,
    use_clang_format: Option<bool>,
    use_clang_tidy: Option<bool>,
    use_sanitizers: Option<bool>,
    use_coverage: Option<bool>,
    use_doxygen: Option<bool>,
    use_docker: Option<bool>,
    use_pre_commit: Option<bool>,
    include_ci: Option<bool>,
    include_vscode: Option<bool>,
    include_benchmark: Option<bool>,
    copyright_year: Option<i32>,
    output_dir: Option<PathBuf>,
    _marker: PhantomData<L>,
}

impl ConfigBuilder<NoLanguage> {
    pub fn new() -> Self {
        Self {
            project_name: String::new(),
            description: None,
            author_name: None,
            language: None,
            standard: None,
            project_type: None,
            test_framework: None,
            package_manager: None,
            license: None,
            use_clang_format: None,
            use_clang_tidy: None,
            use_sanitizers: None,
            use_coverage: None,
            use_doxygen: None,
            use_docker: None,
            use_pre_commit: None,
            include_ci: None,
            include_vscode: None,
            include_benchmark: None,
            copyright_year: None,
            output_dir: None,
            _marker: PhantomData,
        }
    }

    /// Set the language. This transitions the builder to `HasLanguage`.
    pub fn language(self, language: Language) -> ConfigBuilder<HasLanguage> {
        ConfigBuilder {
            project_name: self.project_name,
            description: self.description,
            author_name: self.author_name,
            language: Some(language),
            standard: self.standard,
            project_type: self.project_type,
            test_framework: self.test_framework,
            package_manager: self.package_manager,
            license: self.license,
            use_clang_format: self.use_clang_format,
            use_clang_tidy: self.use_clang_tidy,
            use_sanitizers: self.use_sanitizers,
            use_coverage: self.use_coverage,
            use_doxygen: self.use_doxygen,
            use_docker: self.use_docker,
            use_pre_commit: self.use_pre_commit,
            include_ci: self.include_ci,
            include_vscode: self.include_vscode,
            include_benchmark: self.include_benchmark,
            copyright_year: self.copyright_year,
            output_dir: self.output_dir,
            _marker: PhantomData,
        }
    }
}

impl Default for ConfigBuilder<NoLanguage> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder<HasLanguage> {
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author_name(mut self, author: impl Into<String>) -> Self {
        self.author_name = Some(author.into());
        self
    }

    /// Set the language standard. Purely textual — out-of-set values
    /// propagate verbatim into the generated build files.
    pub fn standard(mut self, standard: impl Into<String>) -> Self {
        self.standard = Some(standard.into());
        self
    }

    pub fn project_type(mut self, kind: ProjectKind) -> Self {
        self.project_type = Some(kind);
        self
    }

    /// Set the test framework from a user-supplied name.
    ///
    /// Goes through [`TestFramework::parse_for`], so the stored value is
    /// always valid for the chosen language.
    pub fn test_framework_name(mut self, name: &str) -> Self {
        let lang = self.language.expect("typestate guarantees language is set");
        self.test_framework = Some(TestFramework::parse_for(lang, name));
        self
    }

    pub fn test_framework(mut self, framework: TestFramework) -> Self {
        let lang = self.language.expect("typestate guarantees language is set");
        // A framework belonging to the other language is ignored and
        // replaced by this language's fallback.
        self.test_framework = Some(match framework.language() {
            Some(fw_lang) if fw_lang != lang => TestFramework::fallback_for(lang),
            _ => framework,
        });
        self
    }

    pub fn package_manager(mut self, pm: PackageManager) -> Self {
        self.package_manager = Some(pm);
        self
    }

    pub fn license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }

    pub fn clang_format(mut self, on: bool) -> Self {
        self.use_clang_format = Some(on);
        self
    }
    pub fn clang_tidy(mut self, on: bool) -> Self {
        self.use_clang_tidy = Some(on);
        self
    }
    pub fn sanitizers(mut self, on: bool) -> Self {
        self.use_sanitizers = Some(on);
        self
    }
    pub fn coverage(mut self, on: bool) -> Self {
        self.use_coverage = Some(on);
        self
    }
    pub fn doxygen(mut self, on: bool) -> Self {
        self.use_doxygen = Some(on);
        self
    }
    pub fn docker(mut self, on: bool) -> Self {
        self.use_docker = Some(on);
        self
    }
    pub fn pre_commit(mut self, on: bool) -> Self {
        self.use_pre_commit = Some(on);
        self
    }
    pub fn ci(mut self, on: bool) -> Self {
        self.include_ci = Some(on);
        self
    }
    pub fn vscode(mut self, on: bool) -> Self {
        self.include_vscode = Some(on);
        self
    }
    pub fn benchmark(mut self, on: bool) -> Self {
        self.include_benchmark = Some(on);
        self
    }

    /// Pin the copyright year (tests use this for byte-level determinism).
    pub fn copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = Some(year);
        self
    }

    /// Override the output directory (defaults to the project name).
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Build the `ProjectConfig`, filling unset fields from the default
    /// policy.
    ///
    /// Defaults per field, each keyed only on the language (never on
    /// another defaulted field):
    /// - `standard`: "11" for C, "17" for C++
    /// - `description`: "A modern C project" / "A modern C++ project"
    /// - `test_framework` / `package_manager`: none; `license`: MIT
    /// - toggles: clang-format and clang-tidy on, everything else off
    ///
    /// Construction never fails; name validation is a separate concern
    /// ([`validate_project_name`]) applied at the entry points.
    pub fn build(self) -> ProjectConfig {
        let language = self.language.expect("typestate guarantees language is set");

        let output_dir = self
            .output_dir
            .unwrap_or_else(|| PathBuf::from(&self.project_name));

        ProjectConfig {
            description: self
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| language.default_description().to_string()),
            author_name: self.author_name.unwrap_or_default(),
            standard: self
                .standard
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| language.default_standard().to_string()),
            project_type: self.project_type.unwrap_or_default(),
            test_framework: self.test_framework.unwrap_or_default(),
            package_manager: self.package_manager.unwrap_or_default(),
            license: self.license.unwrap_or_default(),
            use_clang_format: self.use_clang_format.unwrap_or(true),
            use_clang_tidy: self.use_clang_tidy.unwrap_or(true),
            use_sanitizers: self.use_sanitizers.unwrap_or(false),
            use_coverage: self.use_coverage.unwrap_or(false),
            use_doxygen: self.use_doxygen.unwrap_or(false),
            use_docker: self.use_docker.unwrap_or(false),
            use_pre_commit: self.use_pre_commit.unwrap_or(false),
            include_ci: self.include_ci.unwrap_or(false),
            include_vscode: self.include_vscode.unwrap_or(false),
            include_benchmark: self.include_benchmark.unwrap_or(false),
            copyright_year: self
                .copyright_year
                .unwrap_or_else(|| chrono::Utc::now().year()),
            project_name: self.project_name,
            language,
            output_dir,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CTestFramework, CxxTestFramework};

    fn cxx(name: &str) -> ConfigBuilder<HasLanguage> {
        ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name(name)
    }

    fn c(name: &str) -> ConfigBuilder<HasLanguage> {
        ProjectConfig::builder()
            .language(Language::C)
            .project_name(name)
    }

    // ── Default policy ────────────────────────────────────────────────────────

    #[test]
    fn cxx_defaults() {
        let cfg = cxx("myapp").build();
        assert_eq!(cfg.standard(), "17");
        assert_eq!(cfg.description(), "A modern C++ project");
        assert_eq!(cfg.project_type(), ProjectKind::Executable);
        assert_eq!(cfg.test_framework(), TestFramework::None);
        assert_eq!(cfg.package_manager(), PackageManager::None);
        assert_eq!(cfg.license(), License::Mit);
    }

    #[test]
    fn c_defaults() {
        let cfg = c("myapp").build();
        assert_eq!(cfg.standard(), "11");
        assert_eq!(cfg.description(), "A modern C project");
    }

    #[test]
    fn toggle_defaults_are_format_and_tidy_only() {
        let cfg = cxx("myapp").build();
        assert!(cfg.use_clang_format());
        assert!(cfg.use_clang_tidy());
        assert!(!cfg.use_sanitizers());
        assert!(!cfg.use_coverage());
        assert!(!cfg.use_doxygen());
        assert!(!cfg.use_docker());
        assert!(!cfg.use_pre_commit());
        assert!(!cfg.include_ci());
        assert!(!cfg.include_vscode());
        assert!(!cfg.include_benchmark());
    }

    #[test]
    fn output_dir_defaults_to_project_name() {
        let cfg = cxx("myapp").build();
        assert_eq!(cfg.output_dir(), &PathBuf::from("myapp"));

        let cfg = cxx("myapp").output_dir("/tmp/elsewhere").build();
        assert_eq!(cfg.output_dir(), &PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = cxx("myapp")
            .standard("20")
            .description("custom")
            .license(License::Gpl3)
            .clang_format(false)
            .build();
        assert_eq!(cfg.standard(), "20");
        assert_eq!(cfg.description(), "custom");
        assert_eq!(cfg.license(), License::Gpl3);
        assert!(!cfg.use_clang_format());
    }

    #[test]
    fn empty_description_falls_back_to_language_default() {
        let cfg = c("myapp").description("").build();
        assert_eq!(cfg.description(), "A modern C project");
    }

    #[test]
    fn out_of_set_standard_propagates_verbatim() {
        // No cross-validation against compiler capability.
        let cfg = cxx("myapp").standard("26").build();
        assert_eq!(cfg.standard(), "26");
    }

    // ── Identifier derivation ─────────────────────────────────────────────────

    #[test]
    fn module_name_replaces_hyphens() {
        let cfg = cxx("my-lib").build();
        assert_eq!(cfg.module_name(), "my_lib");
    }

    #[test]
    fn guard_name_is_upper_snake() {
        assert_eq!(cxx("mylib").build().guard_name(), "MYLIB");
        assert_eq!(cxx("my-lib").build().guard_name(), "MY_LIB");
        assert_eq!(cxx("MyLib").build().guard_name(), "MY_LIB");
    }

    // ── Presets ───────────────────────────────────────────────────────────────

    #[test]
    fn full_preset_forces_all_toggles_true() {
        let cfg = cxx("myapp").build().with_preset(Preset::Full);
        assert!(cfg.use_clang_format());
        assert!(cfg.use_clang_tidy());
        assert!(cfg.use_sanitizers());
        assert!(cfg.use_coverage());
        assert!(cfg.use_doxygen());
        assert!(cfg.use_docker());
        assert!(cfg.use_pre_commit());
        assert!(cfg.include_ci());
        assert!(cfg.include_vscode());
        assert!(cfg.include_benchmark());
    }

    #[test]
    fn full_preset_upgrades_unset_framework_to_language_default() {
        let cfg = cxx("myapp").build().with_preset(Preset::Full);
        assert_eq!(
            cfg.test_framework(),
            TestFramework::Cxx(CxxTestFramework::GoogleTest)
        );

        let cfg = c("myapp").build().with_preset(Preset::Full);
        assert_eq!(cfg.test_framework(), TestFramework::C(CTestFramework::Unity));
    }

    #[test]
    fn full_preset_keeps_explicit_framework() {
        let cfg = cxx("myapp")
            .test_framework_name("doctest")
            .build()
            .with_preset(Preset::Full);
        assert_eq!(
            cfg.test_framework(),
            TestFramework::Cxx(CxxTestFramework::Doctest)
        );
    }

    #[test]
    fn minimal_preset_forces_all_toggles_false_but_keeps_framework() {
        let cfg = cxx("myapp")
            .test_framework_name("catch2")
            .sanitizers(true)
            .build()
            .with_preset(Preset::Minimal);
        assert!(!cfg.use_clang_format());
        assert!(!cfg.use_clang_tidy());
        assert!(!cfg.use_sanitizers());
        assert!(!cfg.include_ci());
        assert_eq!(
            cfg.test_framework(),
            TestFramework::Cxx(CxxTestFramework::Catch2)
        );
    }

    // ── Name validation ───────────────────────────────────────────────────────

    #[test]
    fn valid_names_pass() {
        for name in ["myapp", "my-lib", "my_lib", "engine2", "MyApp"] {
            assert!(validate_project_name(name).is_ok(), "failed for {name}");
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_project_name("").is_err());
    }

    #[test]
    fn leading_dot_or_dash_is_rejected() {
        assert!(validate_project_name(".hidden").is_err());
        assert!(validate_project_name("-flag").is_err());
    }

    #[test]
    fn forbidden_characters_are_rejected() {
        for name in ["a/b", "a\\b", "a b", "a:b", "a*b", "a?b", "a\"b", "a<b", "a|b"] {
            assert!(validate_project_name(name).is_err(), "accepted {name}");
        }
    }

    // ── Cross-language framework guard ────────────────────────────────────────

    #[test]
    fn builder_replaces_cross_language_framework() {
        let cfg = cxx("myapp")
            .test_framework(TestFramework::C(CTestFramework::Unity))
            .build();
        assert_eq!(
            cfg.test_framework(),
            TestFramework::Cxx(CxxTestFramework::Catch2)
        );
    }
}
