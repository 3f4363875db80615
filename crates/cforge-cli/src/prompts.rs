//! Interactive wizard (feature `interactive`, on by default).
//!
//! Four pages, mirroring the non-interactive flag surface: project basics,
//! dependencies & testing, code quality, DevOps & IDE. Answers are
//! collected page by page and only turned into a `ProjectConfig` once all
//! pages complete — a partially-answered wizard never reaches the planner.

use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};

use cforge_core::domain::{
    Language, License, PackageManager, Preset, ProjectConfig, ProjectKind, TestFramework,
    validate_project_name,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run the wizard and build the resulting configuration.
pub fn run_wizard(app_config: &AppConfig, output: &OutputManager) -> CliResult<ProjectConfig> {
    let theme = ColorfulTheme::default();

    output.header("Create a C/C++ project")?;
    output.print("Configure your new project with modern CMake")?;
    output.print("")?;

    // ── Page 1: Project basics ────────────────────────────────────────────

    let name: String = Input::with_theme(&theme)
        .with_prompt("Project name")
        .validate_with(|input: &String| {
            validate_project_name(input).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(wizard_aborted)?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()
        .map_err(wizard_aborted)?;

    let author: String = Input::with_theme(&theme)
        .with_prompt("Author name")
        .default(app_config.defaults.author.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .map_err(wizard_aborted)?;

    let language = match Select::with_theme(&theme)
        .with_prompt("Language")
        .items(&["C++", "C"])
        .default(0)
        .interact()
        .map_err(wizard_aborted)?
    {
        1 => Language::C,
        _ => Language::Cxx,
    };

    let standards = language.known_standards();
    let default_standard = standards
        .iter()
        .position(|s| *s == language.default_standard())
        .unwrap_or(0);
    let standard_labels: Vec<String> = standards
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let label = match language {
                Language::C => format!("C{s}"),
                Language::Cxx => format!("C++{s}"),
            };
            if i == default_standard {
                format!("{label} (Recommended)")
            } else {
                label
            }
        })
        .collect();
    let standard = standards[Select::with_theme(&theme)
        .with_prompt("Language standard")
        .items(&standard_labels)
        .default(default_standard)
        .interact()
        .map_err(wizard_aborted)?];

    let project_type = [
        ProjectKind::Executable,
        ProjectKind::StaticLibrary,
        ProjectKind::HeaderOnly,
    ][Select::with_theme(&theme)
        .with_prompt("Project type")
        .items(&["Executable", "Static Library", "Header-only Library"])
        .default(0)
        .interact()
        .map_err(wizard_aborted)?];

    // ── Page 2: Dependencies & testing ────────────────────────────────────

    let package_manager = [
        PackageManager::None,
        PackageManager::Vcpkg,
        PackageManager::Conan,
        PackageManager::Cpm,
    ][Select::with_theme(&theme)
        .with_prompt("Package manager")
        .items(&["None (FetchContent only)", "vcpkg", "Conan", "CPM.cmake"])
        .default(0)
        .interact()
        .map_err(wizard_aborted)?];

    let framework_choices = TestFramework::choices_for(language);
    let test_framework = framework_choices[Select::with_theme(&theme)
        .with_prompt("Testing framework")
        .items(framework_choices)
        .default(0)
        .interact()
        .map_err(wizard_aborted)?];

    let benchmark = project_type.is_library()
        && Confirm::with_theme(&theme)
            .with_prompt("Include benchmarks? (Google Benchmark)")
            .default(false)
            .interact()
            .map_err(wizard_aborted)?;

    // ── Page 3: Code quality ──────────────────────────────────────────────

    let tool_labels = [
        "clang-format (code formatting)",
        "clang-tidy (static analysis)",
        "Sanitizers (ASan, UBSan, TSan)",
        "Code coverage (gcov/lcov)",
        "Doxygen (documentation)",
        "pre-commit hooks",
    ];
    let tool_defaults = [true, true, false, false, false, false];
    let selected_tools = MultiSelect::with_theme(&theme)
        .with_prompt("Code quality tools")
        .items(&tool_labels)
        .defaults(&tool_defaults)
        .interact()
        .map_err(wizard_aborted)?;

    let tool_on = |idx: usize| selected_tools.contains(&idx);

    // ── Page 4: DevOps & IDE ──────────────────────────────────────────────

    let license = [
        License::Mit,
        License::Apache2,
        License::Gpl3,
        License::Bsd3,
        License::None,
    ][Select::with_theme(&theme)
        .with_prompt("License")
        .items(&["MIT", "Apache 2.0", "GPL 3.0", "BSD 3-Clause", "None"])
        .default(0)
        .interact()
        .map_err(wizard_aborted)?];

    let ci = Confirm::with_theme(&theme)
        .with_prompt("Include GitHub Actions CI?")
        .default(false)
        .interact()
        .map_err(wizard_aborted)?;

    let vscode = Confirm::with_theme(&theme)
        .with_prompt("Include VSCode configuration?")
        .default(false)
        .interact()
        .map_err(wizard_aborted)?;

    let docker = Confirm::with_theme(&theme)
        .with_prompt("Include Docker support?")
        .default(false)
        .interact()
        .map_err(wizard_aborted)?;

    let preset = match Select::with_theme(&theme)
        .with_prompt("Apply a preset?")
        .items(&["No, use my answers", "full (everything on)", "minimal (everything off)"])
        .default(0)
        .interact()
        .map_err(wizard_aborted)?
    {
        1 => Some(Preset::Full),
        2 => Some(Preset::Minimal),
        _ => None,
    };

    // ── Build the immutable config from the completed answers ─────────────

    let mut config = ProjectConfig::builder()
        .language(language)
        .project_name(name)
        .description(description)
        .author_name(author)
        .standard(standard)
        .project_type(project_type)
        .test_framework_name(test_framework)
        .package_manager(package_manager)
        .license(license)
        .clang_format(tool_on(0))
        .clang_tidy(tool_on(1))
        .sanitizers(tool_on(2))
        .coverage(tool_on(3))
        .doxygen(tool_on(4))
        .pre_commit(tool_on(5))
        .ci(ci)
        .vscode(vscode)
        .docker(docker)
        .benchmark(benchmark)
        .build();

    if let Some(preset) = preset {
        config = config.with_preset(preset);
    }

    Ok(config)
}

/// dialoguer reports a closed stdin / interrupt as an I/O error; surface
/// it as a cancellation so the top level exits quietly with a diagnostic.
fn wizard_aborted(err: dialoguer::Error) -> CliError {
    tracing::debug!("wizard aborted: {err}");
    CliError::Cancelled
}
