//! Package-manager manifests: `vcpkg.json` and `conanfile.txt`.
//!
//! Both declare the chosen test framework as a dependency when one is
//! selected; otherwise they are bare skeletons.

use crate::domain::{CTestFramework, CxxTestFramework, ProjectConfig, TestFramework};

/// vcpkg registry port name for a test framework.
fn vcpkg_port(framework: TestFramework) -> Option<&'static str> {
    match framework {
        TestFramework::None => None,
        TestFramework::Cxx(CxxTestFramework::GoogleTest) => Some("gtest"),
        TestFramework::Cxx(CxxTestFramework::Catch2) => Some("catch2"),
        TestFramework::Cxx(CxxTestFramework::Doctest) => Some("doctest"),
        TestFramework::C(CTestFramework::Unity) => Some("unity"),
    }
}

/// Conan reference for a test framework.
fn conan_reference(framework: TestFramework) -> Option<&'static str> {
    match framework {
        TestFramework::None => None,
        TestFramework::Cxx(CxxTestFramework::GoogleTest) => Some("gtest/1.14.0"),
        TestFramework::Cxx(CxxTestFramework::Catch2) => Some("catch2/3.5.2"),
        TestFramework::Cxx(CxxTestFramework::Doctest) => Some("doctest/2.4.11"),
        TestFramework::C(CTestFramework::Unity) => Some("unity/2.6.0"),
    }
}

/// `vcpkg.json`.
pub fn vcpkg_json(config: &ProjectConfig) -> String {
    let deps = match vcpkg_port(config.test_framework()) {
        Some(port) => format!(
            ",\n    \"dependencies\": [\n        \"{port}\"\n    ]"
        ),
        None => String::new(),
    };

    format!(
        r#"{{
    "name": "{name}",
    "version-string": "0.1.0",
    "description": "{description}"{deps}
}}
"#,
        name = config.project_name(),
        description = config.description(),
    )
}

/// `conanfile.txt`.
pub fn conanfile(config: &ProjectConfig) -> String {
    let deps = conan_reference(config.test_framework()).unwrap_or_default();

    format!(
        r#"[requires]
{deps}

[generators]
CMakeDeps
CMakeToolchain

[layout]
cmake_layout
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, ProjectConfig};

    fn cfg(framework: &str) -> ProjectConfig {
        ProjectConfig::builder()
            .language(Language::Cxx)
            .project_name("demo")
            .test_framework_name(framework)
            .copyright_year(2026)
            .build()
    }

    #[test]
    fn vcpkg_manifest_is_valid_json_with_framework_dependency() {
        let text = vcpkg_json(&cfg("googletest"));
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(parsed["name"], "demo");
        assert_eq!(parsed["dependencies"][0], "gtest");
    }

    #[test]
    fn vcpkg_manifest_without_tests_has_no_dependencies() {
        let text = vcpkg_json(&cfg("none"));
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert!(parsed.get("dependencies").is_none());
    }

    #[test]
    fn conanfile_lists_framework_reference() {
        assert!(conanfile(&cfg("catch2")).contains("catch2/3.5.2"));
        assert!(conanfile(&cfg("doctest")).contains("doctest/2.4.11"));
    }

    #[test]
    fn unity_maps_to_its_port() {
        let cfg = ProjectConfig::builder()
            .language(Language::C)
            .project_name("demo")
            .test_framework_name("unity")
            .copyright_year(2026)
            .build();
        assert!(vcpkg_json(&cfg).contains("\"unity\""));
        assert!(conanfile(&cfg).contains("unity/2.6.0"));
    }
}
