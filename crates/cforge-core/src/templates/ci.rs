//! GitHub Actions workflow and dependabot descriptor.
//!
//! The workflow is itself a composition: a base build matrix, plus a test
//! job iff a framework is selected, a sanitizer job iff sanitizers are on,
//! a coverage job iff coverage is on, and a fixed lint job. The vcpkg
//! bootstrap step appears only for the vcpkg package manager — conan needs
//! no CI setup step in this design.

use crate::domain::{Language, PackageManager, ProjectConfig};

/// `.github/workflows/ci.yml`.
pub fn ci_workflow(config: &ProjectConfig) -> String {
    let test_job = if config.test_framework().is_some() {
        r#"
  test:
    needs: build
    runs-on: ${{ matrix.os }}
    strategy:
      matrix:
        os: [ubuntu-latest, macos-latest, windows-latest]
        build_type: [Debug, Release]

    steps:
      - uses: actions/checkout@v4

      - name: Download build artifacts
        uses: actions/download-artifact@v4
        with:
          name: build-${{ matrix.os }}-${{ matrix.build_type }}
          path: build

      - name: Run tests
        run: ctest --test-dir build --output-on-failure
"#
    } else {
        ""
    };

    let sanitizer_job = if config.use_sanitizers() {
        r#"
  sanitizers:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        sanitizer: [asan, ubsan, tsan]

    steps:
      - uses: actions/checkout@v4

      - name: Install dependencies
        run: |
          sudo apt-get update
          sudo apt-get install -y ninja-build

      - name: Configure with ${{ matrix.sanitizer }}
        run: cmake --preset ${{ matrix.sanitizer }}

      - name: Build
        run: cmake --build --preset ${{ matrix.sanitizer }}

      - name: Test
        run: ctest --preset debug --output-on-failure
        env:
          ASAN_OPTIONS: detect_leaks=1:strict_string_checks=1
          UBSAN_OPTIONS: print_stacktrace=1
          TSAN_OPTIONS: second_deadlock_stack=1
"#
    } else {
        ""
    };

    let coverage_job = if config.use_coverage() {
        r#"
  coverage:
    runs-on: ubuntu-latest

    steps:
      - uses: actions/checkout@v4

      - name: Install dependencies
        run: |
          sudo apt-get update
          sudo apt-get install -y ninja-build lcov

      - name: Configure with coverage
        run: cmake --preset coverage

      - name: Build
        run: cmake --build --preset coverage

      - name: Run tests
        run: ctest --preset debug --output-on-failure

      - name: Generate coverage report
        run: |
          lcov --directory . --capture --output-file coverage.info
          lcov --remove coverage.info '/usr/*' '*/tests/*' '*/build/*' --output-file coverage.info

      - name: Upload coverage to Codecov
        uses: codecov/codecov-action@v3
        with:
          files: coverage.info
          fail_ci_if_error: true
"#
    } else {
        ""
    };

    let vcpkg_setup = if config.package_manager() == PackageManager::Vcpkg {
        r#"
      - name: Setup vcpkg
        uses: lukka/run-vcpkg@v11
        with:
          vcpkgGitCommitId: 'a34c873a9717a888f58dc05268dea15592c2f0ff'"#
    } else {
        ""
    };

    let lint_find_clause = match config.language() {
        Language::Cxx => r"-name '*.cpp' -o -name '*.hpp' -o -name '*.h'",
        Language::C => r"-name '*.c' -o -name '*.h'",
    };

    let compiler_flags = match config.language() {
        Language::Cxx => {
            "-DCMAKE_C_COMPILER=${{ matrix.compiler.cc }}\n          -DCMAKE_CXX_COMPILER=${{ matrix.compiler.cxx }}"
        }
        Language::C => "-DCMAKE_C_COMPILER=${{ matrix.compiler.cc }}",
    };

    format!(
        r#"name: CI

on:
  push:
    branches: [main, master, develop]
  pull_request:
    branches: [main, master]

env:
  CMAKE_VERSION: '3.28'
  NINJA_VERSION: '1.11.1'

jobs:
  build:
    runs-on: ${{{{ matrix.os }}}}

    strategy:
      fail-fast: false
      matrix:
        os: [ubuntu-latest, macos-latest, windows-latest]
        build_type: [Debug, Release]
        compiler:
          - {{ cc: gcc, cxx: g++ }}
          - {{ cc: clang, cxx: clang++ }}
        exclude:
          - os: windows-latest
            compiler: {{ cc: clang, cxx: clang++ }}

    steps:
      - uses: actions/checkout@v4
{vcpkg_setup}
      - name: Install Ninja
        uses: seanmiddleditch/gha-setup-ninja@v4

      - name: Configure CMake
        run: >
          cmake -B build -G Ninja
          -DCMAKE_BUILD_TYPE=${{{{ matrix.build_type }}}}
          {compiler_flags}

      - name: Build
        run: cmake --build build --config ${{{{ matrix.build_type }}}}

      - name: Upload build artifacts
        uses: actions/upload-artifact@v4
        with:
          name: build-${{{{ matrix.os }}}}-${{{{ matrix.build_type }}}}
          path: build
{test_job}{sanitizer_job}{coverage_job}
  lint:
    runs-on: ubuntu-latest

    steps:
      - uses: actions/checkout@v4

      - name: Install clang-format
        run: sudo apt-get install -y clang-format

      - name: Check formatting
        run: |
          find src include tests {lint_find_clause} | \
            xargs clang-format --dry-run --Werror

      - name: Install cmake-format
        run: pip install cmake-format

      - name: Check CMake formatting
        run: cmake-format --check CMakeLists.txt cmake/*.cmake
"#
    )
}

/// `.github/dependabot.yml`.
pub fn dependabot() -> String {
    r#"version: 2
updates:
  - package-ecosystem: "github-actions"
    directory: "/"
    schedule:
      interval: "weekly"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, PackageManager, ProjectConfig};

    fn base() -> ProjectConfig {
        ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .ci(true)
            .copyright_year(2026)
            .build()
    }

    #[test]
    fn base_workflow_has_build_and_lint_only() {
        let text = ci_workflow(&base());
        assert!(text.contains("\n  build:"));
        assert!(text.contains("\n  lint:"));
        assert!(!text.contains("\n  test:"));
        assert!(!text.contains("\n  sanitizers:"));
        assert!(!text.contains("\n  coverage:"));
        assert!(!text.contains("Setup vcpkg"));
    }

    #[test]
    fn test_job_appears_with_framework() {
        let cfg = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .test_framework_name("googletest")
            .ci(true)
            .copyright_year(2026)
            .build();
        let text = ci_workflow(&cfg);
        assert!(text.contains("\n  test:"));
        assert!(text.contains("needs: build"));
    }

    #[test]
    fn sanitizer_and_coverage_jobs_track_toggles() {
        let cfg = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .sanitizers(true)
            .coverage(true)
            .ci(true)
            .copyright_year(2026)
            .build();
        let text = ci_workflow(&cfg);
        assert!(text.contains("\n  sanitizers:"));
        assert!(text.contains("sanitizer: [asan, ubsan, tsan]"));
        assert!(text.contains("\n  coverage:"));
        assert!(text.contains("codecov/codecov-action@v3"));
    }

    #[test]
    fn vcpkg_setup_step_only_for_vcpkg() {
        let cfg = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .package_manager(PackageManager::Vcpkg)
            .ci(true)
            .copyright_year(2026)
            .build();
        assert!(ci_workflow(&cfg).contains("Setup vcpkg"));

        let conan = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .package_manager(PackageManager::Conan)
            .ci(true)
            .copyright_year(2026)
            .build();
        // Conan needs no CI bootstrap step in this design.
        assert!(!ci_workflow(&conan).contains("Setup vcpkg"));
    }

    #[test]
    fn c_project_lints_c_sources_only() {
        let cfg = ProjectConfig::builder()
            .language(Language::C)
            .project_name("demo")
            .ci(true)
            .copyright_year(2026)
            .build();
        let text = ci_workflow(&cfg);
        assert!(text.contains("-name '*.c' -o -name '*.h'"));
        assert!(!text.contains("*.hpp"));
        assert!(!text.contains("CMAKE_CXX_COMPILER"));
    }

    #[test]
    fn dependabot_watches_github_actions() {
        assert!(dependabot().contains("github-actions"));
    }
}
