//! Source and header stubs, plus the repo-level text files that every
//! project gets (README, .gitignore, .editorconfig).
//!
//! Stub functions are intentionally tiny — a compilable `add` so the
//! generated test suite has something real to assert against.

use crate::domain::{Language, ProjectConfig, ProjectKind};

/// `src/main.cpp` / `src/main.c` for executable projects.
pub fn main_source(config: &ProjectConfig) -> String {
    match config.language() {
        Language::Cxx => format!(
            r#"#include <iostream>

int main() {{
    std::cout << "Hello from {}!" << std::endl;
    return 0;
}}
"#,
            config.project_name()
        ),
        Language::C => format!(
            r#"#include <stdio.h>

int main(void) {{
    printf("Hello from {}!\n");
    return 0;
}}
"#,
            config.project_name()
        ),
    }
}

/// `src/<name>.cpp` / `src/<name>.c` for static libraries.
pub fn library_source(config: &ProjectConfig) -> String {
    let name = config.project_name();
    let module = config.module_name();
    match config.language() {
        Language::Cxx => format!(
            r#"#include "{name}/{name}.hpp"

namespace {module} {{

int add(int a, int b) {{
    return a + b;
}}

}} // namespace {module}
"#
        ),
        Language::C => format!(
            r#"#include "{name}/{name}.h"

int {module}_add(int a, int b) {{
    return a + b;
}}
"#
        ),
    }
}

/// Public header for static libraries.
pub fn library_header(config: &ProjectConfig) -> String {
    let module = config.module_name();
    let guard = config.guard_name();
    match config.language() {
        Language::Cxx => format!(
            r#"#ifndef {guard}_HPP
#define {guard}_HPP

namespace {module} {{

/// Adds two integers
/// @param a First operand
/// @param b Second operand
/// @return Sum of a and b
int add(int a, int b);

}} // namespace {module}

#endif // {guard}_HPP
"#
        ),
        Language::C => format!(
            r#"#ifndef {guard}_H
#define {guard}_H

#ifdef __cplusplus
extern "C" {{
#endif

/// Adds two integers
/// @param a First operand
/// @param b Second operand
/// @return Sum of a and b
int {module}_add(int a, int b);

#ifdef __cplusplus
}}
#endif

#endif // {guard}_H
"#
        ),
    }
}

/// Public header for header-only libraries.
pub fn header_only_header(config: &ProjectConfig) -> String {
    let module = config.module_name();
    let guard = config.guard_name();
    match config.language() {
        Language::Cxx => format!(
            r#"#ifndef {guard}_HPP
#define {guard}_HPP

namespace {module} {{

/// Adds two values
/// @param a First operand
/// @param b Second operand
/// @return Sum of a and b
template<typename T>
constexpr T add(T a, T b) {{
    return a + b;
}}

}} // namespace {module}

#endif // {guard}_HPP
"#
        ),
        Language::C => format!(
            r#"#ifndef {guard}_H
#define {guard}_H

#ifdef __cplusplus
extern "C" {{
#endif

/// Adds two integers
/// @param a First operand
/// @param b Second operand
/// @return Sum of a and b
static inline int {module}_add(int a, int b) {{
    return a + b;
}}

#ifdef __cplusplus
}}
#endif

#endif // {guard}_H
"#
        ),
    }
}

/// `.editorconfig` — identical for every configuration.
pub fn editor_config() -> String {
    r#"# EditorConfig: https://editorconfig.org
root = true

[*]
charset = utf-8
end_of_line = lf
indent_style = space
indent_size = 4
insert_final_newline = true
trim_trailing_whitespace = true

[*.{cpp,hpp,c,h,cxx,hxx,cc,hh}]
indent_size = 4

[*.{cmake,txt}]
indent_size = 4

[CMakeLists.txt]
indent_size = 4

[*.{json,yml,yaml}]
indent_size = 2

[*.md]
trim_trailing_whitespace = false

[Makefile]
indent_style = tab
"#
    .to_string()
}

/// `.gitignore` — identical for every configuration.
pub fn git_ignore() -> String {
    r#"# Build directories
build/
cmake-build-*/
out/

# IDE
.idea/
.vscode/
*.swp
*.swo
*~

# Compiled files
*.o
*.obj
*.exe
*.out
*.app
*.so
*.dylib
*.dll
*.a
*.lib

# CMake
CMakeCache.txt
CMakeFiles/
cmake_install.cmake
Makefile
compile_commands.json

# Package managers
vcpkg_installed/
conan/

# Testing
Testing/
CTestTestfile.cmake

# OS
.DS_Store
Thumbs.db
"#
    .to_string()
}

/// Language label used in README prose and badges ("C" / "C++").
fn language_label(language: Language) -> &'static str {
    match language {
        Language::C => "C",
        Language::Cxx => "C++",
    }
}

/// Badge-safe language token (`+` must be URL-encoded).
fn language_badge_token(language: Language) -> &'static str {
    match language {
        Language::C => "C",
        Language::Cxx => "C%2B%2B",
    }
}

/// `README.md` — composed from the same fields the planner reads, so the
/// feature list always matches the files actually generated.
pub fn readme(config: &ProjectConfig) -> String {
    let name = config.project_name();
    let std = config.standard();
    let label = language_label(config.language());

    let mut s = String::new();
    s.push_str(&format!("# {name}\n\n"));
    s.push_str(&format!("{}\n\n", config.description()));

    // Badges
    if config.include_ci() {
        s.push_str(&format!(
            "![CI](https://github.com/USERNAME/{name}/workflows/CI/badge.svg)\n"
        ));
    }
    if config.license().is_some() {
        s.push_str(&format!(
            "![License](https://img.shields.io/badge/license-{}-blue.svg)\n",
            config.license()
        ));
    }
    s.push_str(&format!(
        "![{label}{std}](https://img.shields.io/badge/{}-{std}-blue.svg)\n\n",
        language_badge_token(config.language())
    ));

    // Features
    s.push_str("## Features\n\n");
    s.push_str(&format!("- Modern {label}{std}\n"));
    s.push_str("- CMake 3.21+ with presets\n");
    if config.test_framework().is_some() {
        s.push_str(&format!("- {} testing framework\n", config.test_framework()));
    }
    if config.use_clang_format() {
        s.push_str("- clang-format for code formatting\n");
    }
    if config.use_clang_tidy() {
        s.push_str("- clang-tidy for static analysis\n");
    }
    if config.use_sanitizers() {
        s.push_str("- Address, UB, and Thread sanitizers\n");
    }
    if config.use_coverage() {
        s.push_str("- Code coverage support\n");
    }
    if config.include_ci() {
        s.push_str("- GitHub Actions CI/CD\n");
    }
    s.push('\n');

    // Requirements
    s.push_str("## Requirements\n\n");
    s.push_str("- CMake 3.21 or higher\n");
    s.push_str(&format!(
        "- {label}{std} compatible compiler (GCC 10+, Clang 12+, MSVC 2019+)\n"
    ));
    match config.package_manager() {
        crate::domain::PackageManager::Vcpkg => {
            s.push_str("- vcpkg (optional, for dependency management)\n");
        }
        crate::domain::PackageManager::Conan => {
            s.push_str("- Conan (optional, for dependency management)\n");
        }
        _ => {}
    }
    s.push('\n');

    // Building
    s.push_str("## Building\n\n");
    s.push_str("```bash\n");
    s.push_str("# Configure (debug build)\n");
    s.push_str("cmake --preset debug\n\n");
    s.push_str("# Build\n");
    s.push_str("cmake --build --preset debug\n\n");
    s.push_str("# Or for release\n");
    s.push_str("cmake --preset release\n");
    s.push_str("cmake --build --preset release\n");
    s.push_str("```\n\n");

    // Testing
    if config.test_framework().is_some() {
        s.push_str("## Testing\n\n");
        s.push_str("```bash\n");
        s.push_str("# Run tests\n");
        s.push_str("ctest --preset debug\n\n");
        s.push_str("# Or with verbose output\n");
        s.push_str("ctest --preset debug --output-on-failure\n");
        s.push_str("```\n\n");
    }

    // Sanitizers
    if config.use_sanitizers() {
        s.push_str("## Sanitizers\n\n");
        s.push_str("```bash\n");
        s.push_str("# AddressSanitizer\n");
        s.push_str("cmake --preset asan\n");
        s.push_str("cmake --build --preset asan\n\n");
        s.push_str("# UndefinedBehaviorSanitizer\n");
        s.push_str("cmake --preset ubsan\n");
        s.push_str("cmake --build --preset ubsan\n\n");
        s.push_str("# ThreadSanitizer\n");
        s.push_str("cmake --preset tsan\n");
        s.push_str("cmake --build --preset tsan\n");
        s.push_str("```\n\n");
    }

    // Coverage
    if config.use_coverage() {
        s.push_str("## Code Coverage\n\n");
        s.push_str("```bash\n");
        s.push_str("cmake --preset coverage\n");
        s.push_str("cmake --build --preset coverage\n");
        s.push_str("ctest --preset debug\n");
        s.push_str("cmake --build --preset coverage --target coverage\n");
        s.push_str("# Open build/coverage/coverage_report/index.html\n");
        s.push_str("```\n\n");
    }

    // Docker
    if config.use_docker() {
        s.push_str("## Docker\n\n");
        s.push_str("```bash\n");
        s.push_str("# Build image\n");
        s.push_str(&format!("docker build -t {name} .\n\n"));
        s.push_str("# Run container\n");
        s.push_str(&format!("docker run --rm {name}\n"));
        s.push_str("```\n\n");
        s.push_str("### VS Code Dev Container\n\n");
        s.push_str(
            "Open the project in VS Code and click \"Reopen in Container\" when prompted.\n\n",
        );
    }

    // Project structure
    s.push_str("## Project Structure\n\n");
    s.push_str("```\n");
    s.push_str(&format!("{name}/\n"));
    s.push_str("├── CMakeLists.txt          # Main CMake configuration\n");
    s.push_str("├── CMakePresets.json       # CMake presets for easy building\n");
    s.push_str("├── cmake/                  # CMake modules\n");
    s.push_str("│   ├── CompilerWarnings.cmake\n");
    if config.use_sanitizers() {
        s.push_str("│   ├── Sanitizers.cmake\n");
    }
    if config.use_coverage() {
        s.push_str("│   ├── Coverage.cmake\n");
    }
    s.push_str("├── include/                # Public headers\n");
    s.push_str(&format!("│   └── {name}/\n"));
    s.push_str("├── src/                    # Source files\n");
    if config.test_framework().is_some() {
        s.push_str("├── tests/                  # Test files\n");
    }
    if config.include_vscode() {
        s.push_str("├── .vscode/                # VS Code configuration\n");
    }
    if config.use_docker() {
        s.push_str("├── .devcontainer/          # Dev container configuration\n");
        if config.project_type() == ProjectKind::Executable {
            s.push_str("├── Dockerfile\n");
        }
    }
    s.push_str("└── README.md\n");
    s.push_str("```\n\n");

    // License
    if config.license().is_some() {
        s.push_str("## License\n\n");
        s.push_str(&format!(
            "This project is licensed under the {} License - see the [LICENSE](LICENSE) file for details.\n",
            config.license().display_name()
        ));
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, ProjectConfig, ProjectKind};

    fn cfg(language: Language, kind: ProjectKind) -> ProjectConfig {
        ProjectConfig::builder()
            .language(language)
            .project_name("my-lib")
            .project_type(kind)
            .copyright_year(2026)
            .build()
    }

    #[test]
    fn cxx_library_header_declares_namespaced_add() {
        let header = library_header(&cfg(Language::Cxx, ProjectKind::StaticLibrary));
        assert!(header.contains("namespace my_lib {"));
        assert!(header.contains("int add(int a, int b);"));
        assert!(header.contains("#ifndef MY_LIB_HPP"));
    }

    #[test]
    fn c_library_header_uses_prefix_and_extern_c_guard() {
        let header = library_header(&cfg(Language::C, ProjectKind::StaticLibrary));
        assert!(header.contains("int my_lib_add(int a, int b);"));
        assert!(header.contains("extern \"C\""));
        assert!(header.contains("#ifndef MY_LIB_H"));
    }

    #[test]
    fn header_only_cxx_is_templated() {
        let header = header_only_header(&cfg(Language::Cxx, ProjectKind::HeaderOnly));
        assert!(header.contains("template<typename T>"));
        assert!(header.contains("constexpr T add(T a, T b)"));
    }

    #[test]
    fn header_only_c_is_static_inline() {
        let header = header_only_header(&cfg(Language::C, ProjectKind::HeaderOnly));
        assert!(header.contains("static inline int my_lib_add"));
    }

    #[test]
    fn main_source_greets_with_project_name() {
        let cpp = main_source(&cfg(Language::Cxx, ProjectKind::Executable));
        assert!(cpp.contains("Hello from my-lib!"));
        assert!(cpp.contains("#include <iostream>"));

        let c = main_source(&cfg(Language::C, ProjectKind::Executable));
        assert!(c.contains("#include <stdio.h>"));
        assert!(c.contains("int main(void)"));
    }

    #[test]
    fn readme_feature_list_tracks_toggles() {
        let base = cfg(Language::Cxx, ProjectKind::Executable);
        let text = readme(&base);
        assert!(text.contains("- clang-format for code formatting"));
        assert!(!text.contains("- GitHub Actions CI/CD"));
        assert!(text.contains("Modern C++17"));
    }

    #[test]
    fn readme_c_project_uses_c_label() {
        let text = readme(&cfg(Language::C, ProjectKind::Executable));
        assert!(text.contains("Modern C11"));
        assert!(!text.contains("C++11"));
    }
}
