//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and defaults. No business logic lives here.
//!
//! The enum-like options (`--lang`, `--type`, `--tests`, `--pkg`,
//! `--license`) deliberately take free strings rather than closed
//! `ValueEnum`s: unrecognized values are routed to documented defaults by
//! the domain parsers (with a warning) instead of being rejected at the
//! argument parser.

use clap::{ArgAction, Args, Parser};

/// Main CLI entry-point.
///
/// Supplying `--name` selects non-interactive mode; without it the
/// interactive wizard runs.
#[derive(Debug, Parser)]
#[command(
    name    = "cforge",
    bin_name = "cforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create C/C++ projects with modern CMake",
    long_about = "cforge generates ready-to-build C and C++ project skeletons: \
                  CMake build files with presets, source stubs, test scaffolding, \
                  CI, linting, and editor configuration.",
    after_help = "EXAMPLES:\n\
        \x20 cforge                                   # interactive wizard\n\
        \x20 cforge --name myapp                      # C++ executable with defaults\n\
        \x20 cforge --name myapp --lang c --std 11    # C project\n\
        \x20 cforge --name mylib --type static --tests googletest --full\n\
        \x20 cforge --name myheader --type header-only --minimal\n\
        \x20 cforge --name myclib --lang c --type static --tests unity"
)]
pub struct Cli {
    /// Flags available in every mode.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project options (non-interactive mode).
    #[command(flatten)]
    pub project: ProjectArgs,
}

// ── Global flags ──────────────────────────────────────────────────────────────

/// Global arguments for all invocations.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<std::path::PathBuf>,
}

// ── Project options ───────────────────────────────────────────────────────────

/// Everything that describes the project to generate.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project name. Presence of this flag enables non-interactive mode.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name (enables non-interactive mode)"
    )]
    pub name: Option<String>,

    /// Project description.
    #[arg(long = "desc", value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    /// Author name (used in the license).
    #[arg(long = "author", value_name = "NAME", help = "Author name for license")]
    pub author: Option<String>,

    /// Project language.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        default_value = "c++",
        help = "Language (c, c++)"
    )]
    pub language: String,

    /// Language standard.
    #[arg(
        long = "std",
        value_name = "STD",
        help = "Standard (C: 89, 99, 11, 17, 23 | C++: 11, 14, 17, 20, 23; defaults to C11 / C++17)"
    )]
    pub standard: Option<String>,

    /// Project type.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value = "executable",
        help = "Project type (executable, static, header-only)"
    )]
    pub project_type: String,

    /// Test framework.
    #[arg(
        long = "tests",
        value_name = "FRAMEWORK",
        default_value = "none",
        help = "Test framework (C++: none, googletest, catch2, doctest | C: none, unity)"
    )]
    pub tests: String,

    /// Package manager.
    #[arg(
        long = "pkg",
        value_name = "MANAGER",
        default_value = "none",
        help = "Package manager (none, vcpkg, conan, cpm)"
    )]
    pub package_manager: String,

    /// License.
    #[arg(
        long = "license",
        value_name = "LICENSE",
        default_value = "mit",
        help = "License (none, mit, apache2, gpl3, bsd3)"
    )]
    pub license: String,

    // ── Toggles (clang-format / clang-tidy default on, rest off) ─────────

    /// Include a .clang-format configuration.
    #[arg(
        long = "clang-format",
        value_name = "BOOL",
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        action = ArgAction::Set,
        help = "Include clang-format configuration [default: true]"
    )]
    pub clang_format: bool,

    /// Include a .clang-tidy configuration and the static-analysis module.
    #[arg(
        long = "clang-tidy",
        value_name = "BOOL",
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        action = ArgAction::Set,
        help = "Include clang-tidy configuration [default: true]"
    )]
    pub clang_tidy: bool,

    /// Include Address/UB/Thread sanitizer support.
    #[arg(long = "sanitizers", help = "Include sanitizer support")]
    pub sanitizers: bool,

    /// Include code coverage support.
    #[arg(long = "coverage", help = "Include code coverage support")]
    pub coverage: bool,

    /// Include Doxygen documentation setup.
    #[arg(long = "doxygen", help = "Include Doxygen documentation")]
    pub doxygen: bool,

    /// Include Dockerfile and devcontainer.
    #[arg(long = "docker", help = "Include Docker/devcontainer support")]
    pub docker: bool,

    /// Include pre-commit hooks.
    #[arg(long = "precommit", help = "Include pre-commit hooks")]
    pub precommit: bool,

    /// Include GitHub Actions CI.
    #[arg(long = "ci", help = "Include GitHub Actions CI")]
    pub ci: bool,

    /// Include VSCode configuration.
    #[arg(long = "vscode", help = "Include VSCode configuration")]
    pub vscode: bool,

    /// Include Google Benchmark (library projects only).
    #[arg(long = "benchmark", help = "Include Google Benchmark")]
    pub benchmark: bool,

    // ── Presets ───────────────────────────────────────────────────────────

    /// Enable every feature toggle.
    #[arg(
        long = "full",
        conflicts_with = "minimal",
        help = "Enable all features (tests, sanitizers, coverage, CI, etc.)"
    )]
    pub full: bool,

    /// Disable every feature toggle.
    #[arg(long = "minimal", help = "Minimal project with no extra tooling")]
    pub minimal: bool,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
