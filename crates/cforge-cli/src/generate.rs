//! Project generation: translate CLI arguments (or wizard answers) into a
//! `ProjectConfig`, run the planner, materialize the plan, and report.
//!
//! No planning or I/O logic lives here — this module only wires the core
//! pieces together and talks to the user.

use tracing::{debug, info, instrument, warn};

use cforge_adapters::LocalFilesystem;
use cforge_core::{
    application::Materializer,
    domain::{
        Language, License, PackageManager, Preset, ProjectConfig, ProjectKind,
        validate_project_name,
    },
    planner,
};

use crate::{
    cli::{GlobalArgs, ProjectArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute a generation run for a fully-specified configuration.
///
/// Shared by both entry points: the flag parser and the wizard each build
/// a `ProjectConfig` and call this.
#[instrument(skip_all, fields(project = %config.project_name()))]
pub fn execute(config: ProjectConfig, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    validate_project_name(config.project_name()).map_err(cforge_core::error::CoreError::from)?;

    debug!(
        language = %config.language(),
        standard = config.standard(),
        kind = %config.project_type(),
        tests = %config.test_framework(),
        pkg = %config.package_manager(),
        "configuration resolved"
    );

    let plan = planner::plan(&config);
    info!(entries = plan.entry_count(), "file plan computed");

    let materializer = Materializer::new(Box::new(LocalFilesystem::new()));
    if materializer.output_exists(&plan) {
        // Pre-existing output is reused; files the plan declares are
        // overwritten, anything else is left alone.
        output.warning(&format!(
            "directory '{}' already exists; declared files will be overwritten",
            plan.root().display()
        ))?;
    }

    output.header(&format!("Creating '{}'...", config.project_name()))?;
    materializer.materialize(&plan)?;
    info!(project = %config.project_name(), "generation complete");

    print_summary(&config, global, output)?;
    Ok(())
}

/// Build a `ProjectConfig` from non-interactive flags.
///
/// Unrecognized enum-like values are routed to their documented defaults
/// with a warning rather than rejected.
pub fn build_config(args: &ProjectArgs, app_config: &AppConfig) -> ProjectConfig {
    let name = args.name.clone().unwrap_or_default();

    let lang_input = match app_config.defaults.language.as_deref() {
        // The config-file default only kicks in when the flag kept its
        // built-in value (clap cannot distinguish "omitted" from "explicit
        // default").
        Some(d) if args.language == "c++" => d.to_string(),
        _ => args.language.clone(),
    };
    let language = parse_with_warning::<Language>(&lang_input, "language");

    let kind = parse_with_warning::<ProjectKind>(&args.project_type, "project type");

    let license_input = args
        .license
        .clone()
        .or_config_default(app_config.defaults.license.as_deref());
    let license = parse_with_warning::<License>(&license_input, "license");

    let package_manager = parse_with_warning::<PackageManager>(&args.package_manager, "package manager");

    let author = args
        .author
        .clone()
        .or_else(|| app_config.defaults.author.clone())
        .unwrap_or_default();

    let mut builder = ProjectConfig::builder()
        .language(language)
        .project_name(&name)
        .author_name(author)
        .project_type(kind)
        .test_framework_name(&args.tests)
        .package_manager(package_manager)
        .license(license)
        .clang_format(args.clang_format)
        .clang_tidy(args.clang_tidy)
        .sanitizers(args.sanitizers)
        .coverage(args.coverage)
        .doxygen(args.doxygen)
        .docker(args.docker)
        .pre_commit(args.precommit)
        .ci(args.ci)
        .vscode(args.vscode)
        .benchmark(args.benchmark);

    if let Some(description) = &args.description {
        builder = builder.description(description);
    }
    if let Some(standard) = &args.standard {
        builder = builder.standard(standard);
    }

    let mut config = builder.build();

    // At most one preset applies; clap enforces the mutual exclusion.
    if args.full {
        config = config.with_preset(Preset::Full);
    } else if args.minimal {
        config = config.with_preset(Preset::Minimal);
    }

    config
}

fn parse_with_warning<T>(input: &str, field: &str) -> T
where
    T: std::str::FromStr + Default,
{
    match input.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!("unrecognized {field} '{input}', using the default");
            T::default()
        }
    }
}

trait OrConfigDefault {
    fn or_config_default(self, default: Option<&str>) -> String;
}

impl OrConfigDefault for String {
    /// Use the config-file default only when the flag kept its built-in
    /// value ("mit" — clap cannot distinguish "omitted" from "explicit
    /// default", so an explicit `--license mit` and an omitted flag are
    /// treated alike).
    fn or_config_default(self, default: Option<&str>) -> String {
        match default {
            Some(d) if self == "mit" => d.to_string(),
            _ => self,
        }
    }
}

/// Success summary with next-steps guidance.
fn print_summary(
    config: &ProjectConfig,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!("Project '{}' created!", config.project_name()))?;

    if global.quiet {
        return Ok(());
    }

    output.print("")?;
    output.print("Created project with:")?;
    let label = match config.language() {
        Language::C => "C",
        Language::Cxx => "C++",
    };
    output.print(&format!(
        "  \u{2022} {label}{} {}",
        config.standard(),
        config.project_type()
    ))?;
    if config.test_framework().is_some() {
        output.print(&format!("  \u{2022} {} testing", config.test_framework()))?;
    }
    if config.package_manager().is_some() {
        output.print(&format!(
            "  \u{2022} {} package manager",
            config.package_manager()
        ))?;
    }
    if config.use_clang_format() {
        output.print("  \u{2022} clang-format")?;
    }
    if config.use_clang_tidy() {
        output.print("  \u{2022} clang-tidy")?;
    }
    if config.use_sanitizers() {
        output.print("  \u{2022} Address/UB/Thread sanitizers")?;
    }
    if config.use_coverage() {
        output.print("  \u{2022} code coverage")?;
    }
    if config.include_ci() {
        output.print("  \u{2022} GitHub Actions CI")?;
    }
    if config.use_docker() {
        output.print("  \u{2022} Docker & devcontainer")?;
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print("")?;
    output.print(&format!("  cd {}", config.project_name()))?;
    output.print("")?;
    output.print("  # Configure and build")?;
    output.print("  cmake --preset debug")?;
    output.print("  cmake --build --preset debug")?;

    if config.test_framework().is_some() {
        output.print("")?;
        output.print("  # Run tests")?;
        output.print("  ctest --preset debug")?;
    }

    if config.use_sanitizers() {
        output.print("")?;
        output.print("  # Run with sanitizers")?;
        output.print("  cmake --preset asan && cmake --build --preset asan")?;
    }

    if config.use_pre_commit() {
        output.print("")?;
        output.print("  # Setup pre-commit hooks")?;
        output.print("  pip install pre-commit && pre-commit install")?;
    }

    if config.use_docker() {
        output.print("")?;
        output.print("  # Or use Docker")?;
        output.print(&format!("  docker build -t {} .", config.project_name()))?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn args(argv: &[&str]) -> ProjectArgs {
        let mut full = vec!["cforge"];
        full.extend_from_slice(argv);
        Cli::parse_from(full).project
    }

    #[test]
    fn flags_map_onto_the_config() {
        let config = build_config(
            &args(&[
                "--name", "mylib", "--lang", "c++", "--std", "20", "--type", "static", "--tests",
                "catch2", "--pkg", "conan", "--license", "bsd3", "--sanitizers",
            ]),
            &AppConfig::default(),
        );
        assert_eq!(config.project_name(), "mylib");
        assert_eq!(config.standard(), "20");
        assert_eq!(config.project_type(), ProjectKind::StaticLibrary);
        assert_eq!(config.test_framework().as_str(), "catch2");
        assert_eq!(config.package_manager(), PackageManager::Conan);
        assert_eq!(config.license(), License::Bsd3);
        assert!(config.use_sanitizers());
    }

    #[test]
    fn defaults_follow_the_language() {
        let config = build_config(&args(&["--name", "capp", "--lang", "c"]), &AppConfig::default());
        assert_eq!(config.language(), Language::C);
        assert_eq!(config.standard(), "11");
        assert_eq!(config.description(), "A modern C project");
    }

    #[test]
    fn unrecognized_language_falls_back_with_default() {
        let config = build_config(
            &args(&["--name", "x", "--lang", "fortran"]),
            &AppConfig::default(),
        );
        assert_eq!(config.language(), Language::Cxx);
    }

    #[test]
    fn unrecognized_test_framework_falls_back_per_language() {
        let cxx = build_config(
            &args(&["--name", "x", "--tests", "mystery"]),
            &AppConfig::default(),
        );
        assert_eq!(cxx.test_framework().as_str(), "catch2");

        let c = build_config(
            &args(&["--name", "x", "--lang", "c", "--tests", "mystery"]),
            &AppConfig::default(),
        );
        assert_eq!(c.test_framework().as_str(), "unity");
    }

    #[test]
    fn full_preset_is_applied_after_construction() {
        let config = build_config(&args(&["--name", "x", "--full"]), &AppConfig::default());
        assert!(config.use_sanitizers());
        assert!(config.include_benchmark());
        assert_eq!(config.test_framework().as_str(), "googletest");
    }

    #[test]
    fn minimal_preset_clears_the_default_on_toggles() {
        let config = build_config(
            &args(&["--name", "x", "--minimal", "--tests", "doctest"]),
            &AppConfig::default(),
        );
        assert!(!config.use_clang_format());
        assert!(!config.use_clang_tidy());
        assert_eq!(config.test_framework().as_str(), "doctest");
    }

    #[test]
    fn config_file_author_fills_the_gap() {
        let mut app = AppConfig::default();
        app.defaults.author = Some("Ada".into());
        let config = build_config(&args(&["--name", "x"]), &app);
        assert_eq!(config.author_name(), "Ada");

        let config = build_config(&args(&["--name", "x", "--author", "Grace"]), &app);
        assert_eq!(config.author_name(), "Grace");
    }
}
