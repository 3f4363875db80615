//! The file-set planner: a pure function from [`ProjectConfig`] to
//! [`FilePlan`].
//!
//! # Rule table
//!
//! The planner is a flat, declarative table of `(predicate, emitter)`
//! pairs. Each rule is evaluated independently against the configuration;
//! no rule depends on the success or ordering of another, so the table can
//! be audited row by row and each rule tested in isolation. Adding a
//! feature means adding a row, not threading a new conditional through a
//! generator function.
//!
//! Cross-file consistency is achieved by construction: every emitter that
//! needs the target identifier, the module namespace, or the include-guard
//! token reads it from the same `ProjectConfig` accessor.
//!
//! The planner never fails. Unrecognized user input has already been
//! routed to documented defaults by the value-object parsers, and I/O is
//! somebody else's problem (the materializer's).

use crate::domain::{FilePlan, ProjectConfig, ProjectKind, TestFramework};
use crate::templates::{build, ci, ide, manifests, modules, sources, tests, tooling};

/// One row of the planner table.
pub struct EmitRule {
    /// Stable identifier, used in logs and tests.
    pub name: &'static str,
    /// Whether this rule fires for the given configuration.
    pub applies: fn(&ProjectConfig) -> bool,
    /// Append this rule's directories and files to the plan.
    pub emit: fn(&ProjectConfig, &mut FilePlan),
}

/// The full rule table. Order only affects the cosmetic ordering of plan
/// entries, never which entries exist.
pub const EMIT_RULES: &[EmitRule] = &[
    EmitRule {
        name: "base",
        applies: |_| true,
        emit: emit_base,
    },
    EmitRule {
        name: "license",
        applies: |c| c.license().is_some(),
        emit: |c, plan| plan.add_file("LICENSE", tooling::license_text(c)),
    },
    EmitRule {
        name: "sanitizers",
        applies: ProjectConfig::use_sanitizers,
        emit: |c, plan| plan.add_file("cmake/Sanitizers.cmake", modules::sanitizers(c.language())),
    },
    EmitRule {
        name: "coverage",
        applies: ProjectConfig::use_coverage,
        emit: |c, plan| plan.add_file("cmake/Coverage.cmake", modules::coverage(c.language())),
    },
    EmitRule {
        name: "static-analysis",
        applies: ProjectConfig::use_clang_tidy,
        emit: |c, plan| {
            plan.add_file(
                "cmake/StaticAnalysis.cmake",
                modules::static_analysis(c.language()),
            );
            plan.add_file(".clang-tidy", tooling::clang_tidy());
        },
    },
    EmitRule {
        name: "doxygen",
        applies: ProjectConfig::use_doxygen,
        emit: |_, plan| plan.add_file("cmake/Doxygen.cmake", modules::doxygen()),
    },
    EmitRule {
        name: "cpm",
        applies: |c| c.package_manager() == crate::domain::PackageManager::Cpm,
        emit: |_, plan| plan.add_file("cmake/CPM.cmake", modules::cpm_bootstrap()),
    },
    EmitRule {
        name: "tests",
        applies: |c| c.test_framework().is_some(),
        emit: emit_tests,
    },
    EmitRule {
        name: "benchmarks",
        applies: |c| c.include_benchmark() && c.project_type() != ProjectKind::Executable,
        emit: emit_benchmarks,
    },
    EmitRule {
        name: "vcpkg-manifest",
        applies: |c| c.package_manager() == crate::domain::PackageManager::Vcpkg,
        emit: |c, plan| plan.add_file("vcpkg.json", manifests::vcpkg_json(c)),
    },
    EmitRule {
        name: "conan-manifest",
        applies: |c| c.package_manager() == crate::domain::PackageManager::Conan,
        emit: |c, plan| plan.add_file("conanfile.txt", manifests::conanfile(c)),
    },
    EmitRule {
        name: "clang-format",
        applies: ProjectConfig::use_clang_format,
        emit: |_, plan| plan.add_file(".clang-format", tooling::clang_format()),
    },
    EmitRule {
        name: "vscode",
        applies: ProjectConfig::include_vscode,
        emit: emit_vscode,
    },
    EmitRule {
        name: "docker",
        applies: ProjectConfig::use_docker,
        emit: emit_docker,
    },
    EmitRule {
        name: "pre-commit",
        applies: ProjectConfig::use_pre_commit,
        emit: |_, plan| plan.add_file(".pre-commit-config.yaml", tooling::pre_commit_config()),
    },
    EmitRule {
        name: "ci",
        applies: ProjectConfig::include_ci,
        emit: emit_ci,
    },
];

/// Compute the file plan for a configuration.
///
/// Deterministic: the same config always yields the same plan, down to the
/// byte.
pub fn plan(config: &ProjectConfig) -> FilePlan {
    let mut plan = FilePlan::new(config.output_dir());
    for rule in EMIT_RULES {
        if (rule.applies)(config) {
            tracing::debug!(rule = rule.name, "emit rule fired");
            (rule.emit)(config, &mut plan);
        }
    }
    plan
}

// ── Emitters ──────────────────────────────────────────────────────────────────

fn emit_base(config: &ProjectConfig, plan: &mut FilePlan) {
    let name = config.project_name();
    let src_ext = config.language().source_extension();
    let header_ext = config.language().header_extension();

    plan.add_directory("src");
    plan.add_directory(format!("include/{name}"));
    plan.add_directory("cmake");

    plan.add_file("CMakeLists.txt", build::root_cmake_lists(config));
    plan.add_file(
        "cmake/CompilerWarnings.cmake",
        modules::compiler_warnings(config.language()),
    );
    plan.add_file("CMakePresets.json", build::cmake_presets(config));

    match config.project_type() {
        ProjectKind::Executable => {
            plan.add_file(format!("src/main.{src_ext}"), sources::main_source(config));
        }
        ProjectKind::StaticLibrary => {
            plan.add_file(
                format!("src/{name}.{src_ext}"),
                sources::library_source(config),
            );
            plan.add_file(
                format!("include/{name}/{name}.{header_ext}"),
                sources::library_header(config),
            );
        }
        ProjectKind::HeaderOnly => {
            plan.add_file(
                format!("include/{name}/{name}.{header_ext}"),
                sources::header_only_header(config),
            );
        }
    }

    plan.add_file(".editorconfig", sources::editor_config());
    plan.add_file(".gitignore", sources::git_ignore());
    plan.add_file("README.md", sources::readme(config));
}

fn emit_tests(config: &ProjectConfig, plan: &mut FilePlan) {
    let ext = match config.test_framework() {
        TestFramework::C(_) => "c",
        _ => "cpp",
    };
    plan.add_directory("tests");
    plan.add_file("tests/CMakeLists.txt", tests::tests_cmake_lists(config));
    plan.add_file(format!("tests/test_main.{ext}"), tests::test_main(config));
}

fn emit_benchmarks(config: &ProjectConfig, plan: &mut FilePlan) {
    plan.add_directory("benchmarks");
    plan.add_file(
        "benchmarks/CMakeLists.txt",
        tests::benchmark_cmake_lists(config),
    );
    plan.add_file(
        "benchmarks/benchmark_main.cpp",
        tests::benchmark_main(config),
    );
}

fn emit_vscode(config: &ProjectConfig, plan: &mut FilePlan) {
    plan.add_directory(".vscode");
    plan.add_file(".vscode/settings.json", ide::vscode_settings());
    plan.add_file(".vscode/extensions.json", ide::vscode_extensions());
    plan.add_file(".vscode/launch.json", ide::vscode_launch(config));
    plan.add_file(".vscode/tasks.json", ide::vscode_tasks(config));
}

fn emit_docker(config: &ProjectConfig, plan: &mut FilePlan) {
    plan.add_directory(".devcontainer");
    if config.project_type() == ProjectKind::Executable {
        plan.add_file("Dockerfile", ide::dockerfile(config));
    }
    plan.add_file(".dockerignore", ide::docker_ignore());
    plan.add_file(
        ".devcontainer/devcontainer.json",
        ide::dev_container(config),
    );
}

fn emit_ci(config: &ProjectConfig, plan: &mut FilePlan) {
    plan.add_directory(".github/workflows");
    plan.add_file(".github/workflows/ci.yml", ci::ci_workflow(config));
    plan.add_file(".github/dependabot.yml", ci::dependabot());
}

// ── Tests ─────────────────────────────────────────────────────────────────────
