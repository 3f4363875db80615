//! The root `CMakeLists.txt` and `CMakePresets.json`.
//!
//! The root build file is the one genuinely *composed* artifact: nearly
//! every configuration field contributes a section, and the target name it
//! declares is the single identifier everything else (tests, benchmarks,
//! Dockerfile, launch config) links against or runs.

use crate::domain::{Language, PackageManager, ProjectConfig, ProjectKind};

/// Root `CMakeLists.txt`.
pub fn root_cmake_lists(config: &ProjectConfig) -> String {
    let name = config.project_name();
    let lang_token = config.language().cmake_token();

    let mut s = String::new();
    s.push_str(&format!(
        r#"cmake_minimum_required(VERSION 3.21)

project({name}
    VERSION 0.1.0
    DESCRIPTION "{description}"
    LANGUAGES {lang_token}
)

# Prevent in-source builds
if(CMAKE_SOURCE_DIR STREQUAL CMAKE_BINARY_DIR)
    message(FATAL_ERROR "In-source builds are not allowed. Please use a separate build directory.")
endif()

# Set {label} standard
set(CMAKE_{lang_token}_STANDARD {standard})
set(CMAKE_{lang_token}_STANDARD_REQUIRED ON)
set(CMAKE_{lang_token}_EXTENSIONS OFF)

# Export compile commands for IDE/tooling support
set(CMAKE_EXPORT_COMPILE_COMMANDS ON)

# Include custom CMake modules
list(APPEND CMAKE_MODULE_PATH "${{CMAKE_CURRENT_SOURCE_DIR}}/cmake")

"#,
        description = config.description(),
        standard = config.standard(),
        label = match config.language() {
            Language::C => "C",
            Language::Cxx => "C++",
        },
    ));

    // Include CMake modules
    s.push_str("# Include CMake modules\n");
    s.push_str("include(CompilerWarnings)\n");
    if config.use_sanitizers() {
        s.push_str("include(Sanitizers)\n");
    }
    if config.use_coverage() {
        s.push_str("include(Coverage)\n");
    }
    if config.use_clang_tidy() {
        s.push_str("include(StaticAnalysis)\n");
    }
    if config.use_doxygen() {
        s.push_str("include(Doxygen)\n");
    }
    if config.package_manager() == PackageManager::Cpm {
        s.push_str("include(CPM)\n");
    }
    s.push('\n');

    // Target declaration
    s.push_str(&target_section(config));

    // Apply compiler warnings
    s.push_str("# Apply compiler warnings\n");
    s.push_str("set_project_warnings(${PROJECT_NAME})\n\n");

    if config.use_sanitizers() {
        s.push_str("# Apply sanitizers (if enabled)\n");
        s.push_str("enable_sanitizers(${PROJECT_NAME})\n\n");
    }

    if config.use_coverage() {
        s.push_str("# Apply code coverage (if enabled)\n");
        s.push_str("enable_coverage(${PROJECT_NAME})\n\n");
    }

    if config.use_clang_tidy() {
        s.push_str("# Apply static analysis (if enabled)\n");
        s.push_str("enable_static_analysis(${PROJECT_NAME})\n\n");
    }

    if config.test_framework().is_some() {
        s.push_str(
            r#"# Testing
option(BUILD_TESTS "Build the tests" ON)
if(BUILD_TESTS)
    enable_testing()
    add_subdirectory(tests)
endif()

"#,
        );
    }

    if config.include_benchmark() && config.project_type() != ProjectKind::Executable {
        s.push_str(
            r#"# Benchmarks
option(BUILD_BENCHMARKS "Build the benchmarks" OFF)
if(BUILD_BENCHMARKS)
    add_subdirectory(benchmarks)
endif()

"#,
        );
    }

    if config.use_doxygen() {
        s.push_str("# Documentation\n");
        s.push_str("enable_docs()\n\n");
    }

    if config.use_coverage() {
        s.push_str("# Coverage report target\n");
        s.push_str("add_coverage_target()\n\n");
    }

    // Install rules for libraries
    if config.project_type().is_library() {
        s.push_str(
            r#"# Installation rules
include(GNUInstallDirs)
install(TARGETS ${PROJECT_NAME}
    EXPORT ${PROJECT_NAME}Targets
    LIBRARY DESTINATION ${CMAKE_INSTALL_LIBDIR}
    ARCHIVE DESTINATION ${CMAKE_INSTALL_LIBDIR}
    RUNTIME DESTINATION ${CMAKE_INSTALL_BINDIR}
    INCLUDES DESTINATION ${CMAKE_INSTALL_INCLUDEDIR}
)

install(DIRECTORY include/
    DESTINATION ${CMAKE_INSTALL_INCLUDEDIR}
)

install(EXPORT ${PROJECT_NAME}Targets
    FILE ${PROJECT_NAME}Targets.cmake
    NAMESPACE ${PROJECT_NAME}::
    DESTINATION ${CMAKE_INSTALL_LIBDIR}/cmake/${PROJECT_NAME}
)
"#,
        );
    }

    s
}

fn target_section(config: &ProjectConfig) -> String {
    let src_ext = config.language().source_extension();
    match config.project_type() {
        ProjectKind::Executable => format!(
            r#"# Main executable
add_executable(${{PROJECT_NAME}}
    src/main.{src_ext}
)

target_include_directories(${{PROJECT_NAME}}
    PRIVATE
        $<BUILD_INTERFACE:${{CMAKE_CURRENT_SOURCE_DIR}}/include>
)

"#
        ),
        ProjectKind::StaticLibrary => format!(
            r#"# Library target
add_library(${{PROJECT_NAME}} STATIC
    src/{name}.{src_ext}
)

# Create alias for use with FetchContent/subdirectory
add_library(${{PROJECT_NAME}}::${{PROJECT_NAME}} ALIAS ${{PROJECT_NAME}})

target_include_directories(${{PROJECT_NAME}}
    PUBLIC
        $<BUILD_INTERFACE:${{CMAKE_CURRENT_SOURCE_DIR}}/include>
        $<INSTALL_INTERFACE:include>
)

"#,
            name = config.project_name()
        ),
        ProjectKind::HeaderOnly => r#"# Header-only library
add_library(${PROJECT_NAME} INTERFACE)

# Create alias for use with FetchContent/subdirectory
add_library(${PROJECT_NAME}::${PROJECT_NAME} ALIAS ${PROJECT_NAME})

target_include_directories(${PROJECT_NAME}
    INTERFACE
        $<BUILD_INTERFACE:${CMAKE_CURRENT_SOURCE_DIR}/include>
        $<INSTALL_INTERFACE:include>
)

"#
        .to_string(),
    }
}

/// `CMakePresets.json` — configure/build/test presets; extra configure
/// presets appear only when the matching toggle is on.
pub fn cmake_presets(config: &ProjectConfig) -> String {
    let toolchain_file = match config.package_manager() {
        PackageManager::Vcpkg => {
            "\n            \"toolchainFile\": \"$env{VCPKG_ROOT}/scripts/buildsystems/vcpkg.cmake\","
        }
        PackageManager::Conan => {
            "\n            \"toolchainFile\": \"${sourceDir}/build/conan_toolchain.cmake\","
        }
        _ => "",
    };

    let sanitizer_presets = if config.use_sanitizers() {
        r#",
        {
            "name": "asan",
            "displayName": "AddressSanitizer",
            "inherits": "debug",
            "cacheVariables": {
                "ENABLE_SANITIZER_ADDRESS": "ON"
            }
        },
        {
            "name": "ubsan",
            "displayName": "UndefinedBehaviorSanitizer",
            "inherits": "debug",
            "cacheVariables": {
                "ENABLE_SANITIZER_UNDEFINED": "ON"
            }
        },
        {
            "name": "tsan",
            "displayName": "ThreadSanitizer",
            "inherits": "debug",
            "cacheVariables": {
                "ENABLE_SANITIZER_THREAD": "ON"
            }
        },
        {
            "name": "msan",
            "displayName": "MemorySanitizer (Clang only)",
            "inherits": "debug",
            "cacheVariables": {
                "ENABLE_SANITIZER_MEMORY": "ON"
            }
        }"#
    } else {
        ""
    };

    let coverage_preset = if config.use_coverage() {
        r#",
        {
            "name": "coverage",
            "displayName": "Code Coverage",
            "inherits": "debug",
            "cacheVariables": {
                "ENABLE_COVERAGE": "ON"
            }
        }"#
    } else {
        ""
    };

    let sanitizer_build_presets = if config.use_sanitizers() {
        r#",
        {
            "name": "asan",
            "configurePreset": "asan"
        },
        {
            "name": "ubsan",
            "configurePreset": "ubsan"
        },
        {
            "name": "tsan",
            "configurePreset": "tsan"
        }"#
    } else {
        ""
    };

    let coverage_build_preset = if config.use_coverage() {
        r#",
        {
            "name": "coverage",
            "configurePreset": "coverage"
        }"#
    } else {
        ""
    };

    format!(
        r#"{{
    "version": 6,
    "cmakeMinimumRequired": {{
        "major": 3,
        "minor": 21,
        "patch": 0
    }},
    "configurePresets": [
        {{
            "name": "base",
            "hidden": true,
            "binaryDir": "${{sourceDir}}/build/${{presetName}}",
            "installDir": "${{sourceDir}}/install/${{presetName}}",{toolchain_file}
            "cacheVariables": {{
                "CMAKE_EXPORT_COMPILE_COMMANDS": "ON"
            }}
        }},
        {{
            "name": "debug",
            "displayName": "Debug",
            "inherits": "base",
            "cacheVariables": {{
                "CMAKE_BUILD_TYPE": "Debug"
            }}
        }},
        {{
            "name": "release",
            "displayName": "Release",
            "inherits": "base",
            "cacheVariables": {{
                "CMAKE_BUILD_TYPE": "Release"
            }}
        }},
        {{
            "name": "relwithdebinfo",
            "displayName": "Release with Debug Info",
            "inherits": "base",
            "cacheVariables": {{
                "CMAKE_BUILD_TYPE": "RelWithDebInfo"
            }}
        }}{sanitizer_presets}{coverage_preset}
    ],
    "buildPresets": [
        {{
            "name": "debug",
            "configurePreset": "debug"
        }},
        {{
            "name": "release",
            "configurePreset": "release"
        }},
        {{
            "name": "relwithdebinfo",
            "configurePreset": "relwithdebinfo"
        }}{sanitizer_build_presets}{coverage_build_preset}
    ],
    "testPresets": [
        {{
            "name": "debug",
            "configurePreset": "debug",
            "output": {{
                "outputOnFailure": true
            }}
        }},
        {{
            "name": "release",
            "configurePreset": "release",
            "output": {{
                "outputOnFailure": true
            }}
        }}
    ]
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, ProjectConfig, ProjectKind};

    fn builder(kind: ProjectKind) -> ProjectConfig {
        ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .project_type(kind)
            .copyright_year(2026)
            .build()
    }

    #[test]
    fn executable_declares_executable_target() {
        let text = root_cmake_lists(&builder(ProjectKind::Executable));
        assert!(text.contains("add_executable(${PROJECT_NAME}"));
        assert!(text.contains("src/main.cpp"));
        assert!(!text.contains("install(TARGETS"));
        assert!(!text.contains("ALIAS"));
    }

    #[test]
    fn static_library_declares_alias_and_install_rules() {
        let text = root_cmake_lists(&builder(ProjectKind::StaticLibrary));
        assert!(text.contains("add_library(${PROJECT_NAME} STATIC"));
        assert!(text.contains("src/demo.cpp"));
        assert!(text.contains("add_library(${PROJECT_NAME}::${PROJECT_NAME} ALIAS ${PROJECT_NAME})"));
        assert!(text.contains("install(TARGETS ${PROJECT_NAME}"));
        assert!(text.contains("include(GNUInstallDirs)"));
    }

    #[test]
    fn header_only_declares_interface_target_with_install_rules() {
        let text = root_cmake_lists(&builder(ProjectKind::HeaderOnly));
        assert!(text.contains("add_library(${PROJECT_NAME} INTERFACE)"));
        assert!(text.contains("install(TARGETS ${PROJECT_NAME}"));
    }

    #[test]
    fn c_project_sets_c_standard() {
        let cfg = ProjectConfig::builder()
            .language(Language::C)
            .project_name("cdemo")
            .copyright_year(2026)
            .build();
        let text = root_cmake_lists(&cfg);
        assert!(text.contains("LANGUAGES C\n"));
        assert!(text.contains("set(CMAKE_C_STANDARD 11)"));
        assert!(text.contains("src/main.c\n"));
        assert!(!text.contains("CMAKE_CXX_STANDARD"));
    }

    #[test]
    fn module_includes_track_toggles() {
        let cfg = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .sanitizers(true)
            .coverage(true)
            .clang_tidy(false)
            .copyright_year(2026)
            .build();
        let text = root_cmake_lists(&cfg);
        assert!(text.contains("include(Sanitizers)"));
        assert!(text.contains("enable_sanitizers(${PROJECT_NAME})"));
        assert!(text.contains("include(Coverage)"));
        assert!(text.contains("add_coverage_target()"));
        assert!(!text.contains("include(StaticAnalysis)"));
        assert!(!text.contains("enable_static_analysis"));
    }

    #[test]
    fn presets_json_parses_and_tracks_toggles() {
        let cfg = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .sanitizers(true)
            .coverage(true)
            .copyright_year(2026)
            .build();
        let text = cmake_presets(&cfg);
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        let configure = parsed["configurePresets"].as_array().unwrap();
        let names: Vec<_> = configure
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"asan"));
        assert!(names.contains(&"coverage"));

        let plain = cmake_presets(&builder(ProjectKind::Executable));
        let parsed: serde_json::Value = serde_json::from_str(&plain).expect("valid JSON");
        let names: Vec<_> = parsed["configurePresets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert!(!names.contains(&"asan"));
        assert!(!names.contains(&"coverage"));
    }

    #[test]
    fn vcpkg_toolchain_appears_only_for_vcpkg() {
        let cfg = ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .package_manager(crate::domain::PackageManager::Vcpkg)
            .copyright_year(2026)
            .build();
        assert!(cmake_presets(&cfg).contains("VCPKG_ROOT"));
        assert!(!cmake_presets(&builder(ProjectKind::Executable)).contains("VCPKG_ROOT"));
    }
}
