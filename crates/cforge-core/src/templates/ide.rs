//! VSCode and Docker artifacts.
//!
//! The launch config and the Dockerfile both embed the executable path
//! derived from the project name — the same token the root build file
//! declares as its target.

use crate::domain::{Language, ProjectConfig, ProjectKind};

/// `.vscode/settings.json`.
pub fn vscode_settings() -> String {
    r#"{
    "cmake.configureOnOpen": true,
    "cmake.buildDirectory": "${workspaceFolder}/build/debug",
    "cmake.configureSettings": {
        "CMAKE_EXPORT_COMPILE_COMMANDS": "ON"
    },
    "C_Cpp.default.configurationProvider": "ms-vscode.cmake-tools",
    "C_Cpp.default.compileCommands": "${workspaceFolder}/build/debug/compile_commands.json",
    "C_Cpp.clang_format_style": "file",
    "C_Cpp.codeAnalysis.clangTidy.enabled": true,
    "C_Cpp.codeAnalysis.clangTidy.useBuildPath": true,
    "editor.formatOnSave": true,
    "editor.tabSize": 4,
    "files.insertFinalNewline": true,
    "files.trimTrailingWhitespace": true,
    "files.associations": {
        "*.hpp": "cpp",
        "*.h": "cpp",
        "*.cpp": "cpp",
        "*.tpp": "cpp"
    },
    "[cpp]": {
        "editor.defaultFormatter": "ms-vscode.cpptools"
    }
}
"#
    .to_string()
}

/// `.vscode/extensions.json`.
pub fn vscode_extensions() -> String {
    r#"{
    "recommendations": [
        "ms-vscode.cpptools",
        "ms-vscode.cmake-tools",
        "ms-vscode.cpptools-extension-pack",
        "twxs.cmake",
        "xaver.clang-format",
        "cschlosser.doxdocgen",
        "jeff-hykin.better-cpp-syntax",
        "vadimcn.vscode-lldb"
    ]
}
"#
    .to_string()
}

/// `.vscode/launch.json` — executables get debug configurations pointing at
/// the built binary; library projects get a tests-only launch set.
pub fn vscode_launch(config: &ProjectConfig) -> String {
    if config.project_type() != ProjectKind::Executable {
        return r#"{
    "version": "0.2.0",
    "configurations": [
        {
            "name": "Run Tests (GDB)",
            "type": "cppdbg",
            "request": "launch",
            "program": "${workspaceFolder}/build/debug/tests/tests",
            "args": [],
            "stopAtEntry": false,
            "cwd": "${workspaceFolder}",
            "environment": [],
            "externalConsole": false,
            "MIMode": "gdb",
            "setupCommands": [
                {
                    "description": "Enable pretty-printing for gdb",
                    "text": "-enable-pretty-printing",
                    "ignoreFailures": true
                }
            ],
            "preLaunchTask": "CMake: build"
        },
        {
            "name": "Run Tests (LLDB)",
            "type": "lldb",
            "request": "launch",
            "program": "${workspaceFolder}/build/debug/tests/tests",
            "args": [],
            "cwd": "${workspaceFolder}",
            "preLaunchTask": "CMake: build"
        }
    ]
}
"#
        .to_string();
    }

    let name = config.project_name();
    format!(
        r#"{{
    "version": "0.2.0",
    "configurations": [
        {{
            "name": "Debug (GDB)",
            "type": "cppdbg",
            "request": "launch",
            "program": "${{workspaceFolder}}/build/debug/{name}",
            "args": [],
            "stopAtEntry": false,
            "cwd": "${{workspaceFolder}}",
            "environment": [],
            "externalConsole": false,
            "MIMode": "gdb",
            "setupCommands": [
                {{
                    "description": "Enable pretty-printing for gdb",
                    "text": "-enable-pretty-printing",
                    "ignoreFailures": true
                }},
                {{
                    "description": "Set Disassembly Flavor to Intel",
                    "text": "-gdb-set disassembly-flavor intel",
                    "ignoreFailures": true
                }}
            ],
            "preLaunchTask": "CMake: build"
        }},
        {{
            "name": "Debug (LLDB)",
            "type": "lldb",
            "request": "launch",
            "program": "${{workspaceFolder}}/build/debug/{name}",
            "args": [],
            "cwd": "${{workspaceFolder}}",
            "preLaunchTask": "CMake: build"
        }},
        {{
            "name": "Run Tests (GDB)",
            "type": "cppdbg",
            "request": "launch",
            "program": "${{workspaceFolder}}/build/debug/tests/tests",
            "args": [],
            "stopAtEntry": false,
            "cwd": "${{workspaceFolder}}",
            "environment": [],
            "externalConsole": false,
            "MIMode": "gdb",
            "preLaunchTask": "CMake: build"
        }}
    ]
}}
"#
    )
}

/// `.vscode/tasks.json`.
pub fn vscode_tasks(config: &ProjectConfig) -> String {
    let find_clause = match config.language() {
        Language::Cxx => "-name '*.cpp' -o -name '*.hpp'",
        Language::C => "-name '*.c' -o -name '*.h'",
    };

    format!(
        r#"{{
    "version": "2.0.0",
    "tasks": [
        {{
            "type": "cmake",
            "label": "CMake: configure",
            "command": "configure",
            "preset": "${{command:cmake.activeConfigurePresetName}}",
            "problemMatcher": []
        }},
        {{
            "type": "cmake",
            "label": "CMake: build",
            "command": "build",
            "preset": "${{command:cmake.activeBuildPresetName}}",
            "group": {{
                "kind": "build",
                "isDefault": true
            }},
            "problemMatcher": "$gcc"
        }},
        {{
            "label": "Run clang-format",
            "type": "shell",
            "command": "find src include tests {find_clause} | xargs clang-format -i",
            "problemMatcher": []
        }},
        {{
            "label": "Run clang-tidy",
            "type": "shell",
            "command": "run-clang-tidy -p build/debug",
            "problemMatcher": []
        }},
        {{
            "label": "Run tests",
            "type": "shell",
            "command": "ctest --preset debug --output-on-failure",
            "group": {{
                "kind": "test",
                "isDefault": true
            }},
            "problemMatcher": []
        }},
        {{
            "label": "Clean build",
            "type": "shell",
            "command": "rm -rf build",
            "problemMatcher": []
        }}
    ]
}}
"#
    )
}

/// `Dockerfile` — multi-stage build, executables only.
pub fn dockerfile(config: &ProjectConfig) -> String {
    let name = config.project_name();
    let std_var = config.language().cmake_token();

    format!(
        r#"# syntax=docker/dockerfile:1

# Build stage
FROM gcc:13 AS builder

# Install build dependencies
RUN apt-get update && apt-get install -y \
    cmake \
    ninja-build \
    && rm -rf /var/lib/apt/lists/*

WORKDIR /app

# Copy source files
COPY . .

# Build the project
RUN cmake -B build -G Ninja \
    -DCMAKE_BUILD_TYPE=Release \
    -DCMAKE_{std_var}_STANDARD={standard} \
    -DBUILD_TESTS=OFF \
    && cmake --build build

# Runtime stage
FROM debian:bookworm-slim AS runtime

RUN apt-get update && apt-get install -y \
    libstdc++6 \
    && rm -rf /var/lib/apt/lists/*

WORKDIR /app

# Copy the built executable
COPY --from=builder /app/build/{name} /app/{name}

# Run as non-root user
RUN useradd -m -s /bin/bash appuser
USER appuser

ENTRYPOINT ["/app/{name}"]
"#,
        standard = config.standard(),
    )
}

/// `.dockerignore`.
pub fn docker_ignore() -> String {
    r#"# Build artifacts
build/
cmake-build-*/
out/

# IDE
.idea/
.vscode/
*.swp
*.swo

# Git
.git/
.gitignore

# Documentation
docs/
*.md

# Testing
tests/
coverage/

# Package managers
vcpkg_installed/
conan/
"#
    .to_string()
}

/// `.devcontainer/devcontainer.json`.
pub fn dev_container(config: &ProjectConfig) -> String {
    format!(
        r#"{{
    "name": "{name} Development",
    "image": "mcr.microsoft.com/devcontainers/cpp:1-debian-12",
    "features": {{
        "ghcr.io/devcontainers/features/cmake:1": {{
            "version": "latest"
        }},
        "ghcr.io/devcontainers/features/ninja:1": {{}}
    }},
    "customizations": {{
        "vscode": {{
            "settings": {{
                "cmake.configureOnOpen": true,
                "C_Cpp.default.configurationProvider": "ms-vscode.cmake-tools"
            }},
            "extensions": [
                "ms-vscode.cpptools",
                "ms-vscode.cmake-tools",
                "ms-vscode.cpptools-extension-pack",
                "twxs.cmake",
                "xaver.clang-format"
            ]
        }}
    }},
    "postCreateCommand": "cmake --preset debug",
    "remoteUser": "vscode"
}}
"#,
        name = config.project_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, ProjectConfig, ProjectKind};

    fn cfg(kind: ProjectKind) -> ProjectConfig {
        ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .project_type(kind)
            .copyright_year(2026)
            .build()
    }

    #[test]
    fn launch_config_for_executable_debugs_the_binary() {
        let text = vscode_launch(&cfg(ProjectKind::Executable));
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        let configs = parsed["configurations"].as_array().unwrap();
        assert_eq!(configs.len(), 3);
        assert_eq!(
            configs[0]["program"],
            "${workspaceFolder}/build/debug/demo"
        );
    }

    #[test]
    fn launch_config_for_library_is_tests_only() {
        let text = vscode_launch(&cfg(ProjectKind::StaticLibrary));
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        let configs = parsed["configurations"].as_array().unwrap();
        assert_eq!(configs.len(), 2);
        for config in configs {
            assert_eq!(
                config["program"],
                "${workspaceFolder}/build/debug/tests/tests"
            );
        }
    }

    #[test]
    fn settings_extensions_tasks_are_valid_json() {
        for text in [
            vscode_settings(),
            vscode_extensions(),
            vscode_tasks(&cfg(ProjectKind::Executable)),
        ] {
            serde_json::from_str::<serde_json::Value>(&text).expect("valid JSON");
        }
    }

    #[test]
    fn tasks_find_clause_matches_language() {
        assert!(vscode_tasks(&cfg(ProjectKind::Executable)).contains("*.cpp"));
        let c_cfg = ProjectConfig::builder()
            .language(Language::C)
            .project_name("demo")
            .copyright_year(2026)
            .build();
        let text = vscode_tasks(&c_cfg);
        assert!(text.contains("-name '*.c' -o -name '*.h'"));
        assert!(!text.contains("*.cpp"));
    }

    #[test]
    fn dockerfile_copies_the_project_binary_and_standard() {
        let text = dockerfile(&cfg(ProjectKind::Executable));
        assert!(text.contains("COPY --from=builder /app/build/demo /app/demo"));
        assert!(text.contains("-DCMAKE_CXX_STANDARD=17"));
        assert!(text.contains("ENTRYPOINT [\"/app/demo\"]"));
    }

    #[test]
    fn c_dockerfile_sets_c_standard() {
        let c_cfg = ProjectConfig::builder()
            .language(Language::C)
            .project_name("demo")
            .copyright_year(2026)
            .build();
        assert!(dockerfile(&c_cfg).contains("-DCMAKE_C_STANDARD=11"));
    }

    #[test]
    fn devcontainer_names_the_project() {
        let text = dev_container(&cfg(ProjectKind::Executable));
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(parsed["name"], "demo Development");
    }
}
