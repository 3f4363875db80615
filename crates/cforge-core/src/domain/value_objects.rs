//! Domain value objects: Language, ProjectKind, TestFramework, PackageManager, License.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! Each one defines its string representation, a strict `FromStr` parser,
//! and a lossy `parse_lossy` that routes unrecognized input to one
//! documented fallback instead of failing. The planner only ever sees a
//! closed enum value; free-form strings stop at the CLI boundary.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `FromStr` arm, and the fallback rule here
//! 3. Add the matching template arm in `templates/`
//! 4. Done — the planner rule table does not change

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// A supported project language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    C,
    Cxx,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cxx => "c++",
        }
    }

    /// File extension for implementation files.
    pub const fn source_extension(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cxx => "cpp",
        }
    }

    /// File extension for headers.
    pub const fn header_extension(&self) -> &'static str {
        match self {
            Self::C => "h",
            Self::Cxx => "hpp",
        }
    }

    /// The `LANGUAGES` token in a CMake `project()` call, doubling as the
    /// variable infix in `CMAKE_C_STANDARD` / `CMAKE_CXX_STANDARD`.
    pub const fn cmake_token(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cxx => "CXX",
        }
    }

    /// Default language standard when the user omits one.
    pub const fn default_standard(&self) -> &'static str {
        match self {
            Self::C => "11",
            Self::Cxx => "17",
        }
    }

    /// Default project description when the user omits one.
    pub const fn default_description(&self) -> &'static str {
        match self {
            Self::C => "A modern C project",
            Self::Cxx => "A modern C++ project",
        }
    }

    /// Standards this language accepts. Purely textual — no compiler probing.
    pub const fn known_standards(&self) -> &'static [&'static str] {
        match self {
            Self::C => &["89", "99", "11", "17", "23"],
            Self::Cxx => &["11", "14", "17", "20", "23"],
        }
    }

    /// Lossy parse: unrecognized input falls back to [`Language::Cxx`].
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Cxx
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "c++" | "cpp" | "cxx" => Ok(Self::Cxx),
            other => Err(DomainError::UnknownValue {
                field: "language",
                value: other.to_string(),
            }),
        }
    }
}

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// The shape of the project to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    Executable,
    StaticLibrary,
    HeaderOnly,
}

impl ProjectKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Executable => "executable",
            Self::StaticLibrary => "static",
            Self::HeaderOnly => "header-only",
        }
    }

    /// Library projects get install rules, an export set, and a namespaced
    /// alias target; executables get none of those.
    pub const fn is_library(&self) -> bool {
        matches!(self, Self::StaticLibrary | Self::HeaderOnly)
    }

    /// Lossy parse: unrecognized input falls back to [`ProjectKind::Executable`].
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Default for ProjectKind {
    fn default() -> Self {
        Self::Executable
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "executable" | "exe" | "bin" => Ok(Self::Executable),
            "static" | "static-library" | "lib" | "library" => Ok(Self::StaticLibrary),
            "header-only" | "headeronly" | "header" | "interface" => Ok(Self::HeaderOnly),
            other => Err(DomainError::UnknownValue {
                field: "project type",
                value: other.to_string(),
            }),
        }
    }
}

// ── TestFramework ─────────────────────────────────────────────────────────────

/// A test framework, namespaced by its language.
///
/// The value set depends on the project language: C++ projects choose from
/// GoogleTest/Catch2/doctest, C projects from Unity. `parse_for` is the only
/// constructor from user input and is total — it never returns a framework
/// that is invalid for the given language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    None,
    Cxx(CxxTestFramework),
    C(CTestFramework),
}

/// C++-ecosystem test frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CxxTestFramework {
    GoogleTest,
    Catch2,
    Doctest,
}

/// C-ecosystem test frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CTestFramework {
    Unity,
}

impl TestFramework {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Cxx(CxxTestFramework::GoogleTest) => "googletest",
            Self::Cxx(CxxTestFramework::Catch2) => "catch2",
            Self::Cxx(CxxTestFramework::Doctest) => "doctest",
            Self::C(CTestFramework::Unity) => "unity",
        }
    }

    pub const fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The language this framework belongs to, or `None` for the absent case.
    pub const fn language(&self) -> Option<Language> {
        match self {
            Self::None => None,
            Self::Cxx(_) => Some(Language::Cxx),
            Self::C(_) => Some(Language::C),
        }
    }

    /// Framework the `full` preset upgrades an unset value to.
    pub const fn default_for(language: Language) -> Self {
        match language {
            Language::Cxx => Self::Cxx(CxxTestFramework::GoogleTest),
            Language::C => Self::C(CTestFramework::Unity),
        }
    }

    /// Fallback framework for unrecognized (but non-"none") input.
    ///
    /// C++ falls back to Catch2; C falls back to Unity. Both branches have a
    /// defined default arm — an unknown framework name never silently
    /// disables the tests subsystem.
    pub const fn fallback_for(language: Language) -> Self {
        match language {
            Language::Cxx => Self::Cxx(CxxTestFramework::Catch2),
            Language::C => Self::C(CTestFramework::Unity),
        }
    }

    /// Parse a user-supplied framework name for the given language.
    ///
    /// Total function: `"none"` maps to `None`; a name belonging to the
    /// other language, or any unrecognized name, maps to
    /// [`Self::fallback_for`] the project language.
    pub fn parse_for(language: Language, s: &str) -> Self {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized.is_empty() || normalized == "none" {
            return Self::None;
        }
        match (language, normalized.as_str()) {
            (Language::Cxx, "googletest" | "gtest") => Self::Cxx(CxxTestFramework::GoogleTest),
            (Language::Cxx, "catch2" | "catch") => Self::Cxx(CxxTestFramework::Catch2),
            (Language::Cxx, "doctest") => Self::Cxx(CxxTestFramework::Doctest),
            (Language::C, "unity") => Self::C(CTestFramework::Unity),
            _ => Self::fallback_for(language),
        }
    }

    /// All valid choices for a language, for prompt menus and help text.
    pub const fn choices_for(language: Language) -> &'static [&'static str] {
        match language {
            Language::Cxx => &["none", "googletest", "catch2", "doctest"],
            Language::C => &["none", "unity"],
        }
    }
}

impl Default for TestFramework {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PackageManager ────────────────────────────────────────────────────────────

/// Dependency management strategy for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    None,
    Vcpkg,
    Conan,
    Cpm,
}

impl PackageManager {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vcpkg => "vcpkg",
            Self::Conan => "conan",
            Self::Cpm => "cpm",
        }
    }

    pub const fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Lossy parse: unrecognized input falls back to [`PackageManager::None`].
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "vcpkg" => Ok(Self::Vcpkg),
            "conan" => Ok(Self::Conan),
            "cpm" | "cpm.cmake" => Ok(Self::Cpm),
            other => Err(DomainError::UnknownValue {
                field: "package manager",
                value: other.to_string(),
            }),
        }
    }
}

// ── License ───────────────────────────────────────────────────────────────────

/// License emitted into the generated `LICENSE` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum License {
    None,
    Mit,
    Apache2,
    Gpl3,
    Bsd3,
}

impl License {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mit => "mit",
            Self::Apache2 => "apache2",
            Self::Gpl3 => "gpl3",
            Self::Bsd3 => "bsd3",
        }
    }

    pub const fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Human-readable name for README text.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mit => "MIT",
            Self::Apache2 => "Apache 2.0",
            Self::Gpl3 => "GPL 3.0",
            Self::Bsd3 => "BSD 3-Clause",
        }
    }

    /// Lossy parse: unrecognized input falls back to [`License::Mit`].
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Default for License {
    fn default() -> Self {
        Self::Mit
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "mit" => Ok(Self::Mit),
            "apache2" | "apache-2.0" | "apache" => Ok(Self::Apache2),
            "gpl3" | "gpl-3.0" | "gpl" => Ok(Self::Gpl3),
            "bsd3" | "bsd-3-clause" | "bsd" => Ok(Self::Bsd3),
            other => Err(DomainError::UnknownValue {
                field: "license",
                value: other.to_string(),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_display_round_trips() {
        assert_eq!(Language::C.to_string(), "c");
        assert_eq!(Language::Cxx.to_string(), "c++");
        assert_eq!("c++".parse::<Language>().unwrap(), Language::Cxx);
        assert_eq!("cpp".parse::<Language>().unwrap(), Language::Cxx);
    }

    #[test]
    fn language_lossy_falls_back_to_cxx() {
        assert_eq!(Language::parse_lossy("fortran"), Language::Cxx);
        assert_eq!(Language::parse_lossy("c"), Language::C);
    }

    #[test]
    fn language_defaults_depend_only_on_language() {
        assert_eq!(Language::C.default_standard(), "11");
        assert_eq!(Language::Cxx.default_standard(), "17");
        assert_eq!(Language::C.default_description(), "A modern C project");
    }

    #[test]
    fn project_kind_aliases() {
        assert_eq!(
            "lib".parse::<ProjectKind>().unwrap(),
            ProjectKind::StaticLibrary
        );
        assert_eq!(
            "header-only".parse::<ProjectKind>().unwrap(),
            ProjectKind::HeaderOnly
        );
        assert_eq!(ProjectKind::parse_lossy("garbage"), ProjectKind::Executable);
    }

    #[test]
    fn library_kinds_are_libraries() {
        assert!(ProjectKind::StaticLibrary.is_library());
        assert!(ProjectKind::HeaderOnly.is_library());
        assert!(!ProjectKind::Executable.is_library());
    }

    #[test]
    fn test_framework_parse_for_known_values() {
        assert_eq!(
            TestFramework::parse_for(Language::Cxx, "googletest"),
            TestFramework::Cxx(CxxTestFramework::GoogleTest)
        );
        assert_eq!(
            TestFramework::parse_for(Language::Cxx, "doctest"),
            TestFramework::Cxx(CxxTestFramework::Doctest)
        );
        assert_eq!(
            TestFramework::parse_for(Language::C, "unity"),
            TestFramework::C(CTestFramework::Unity)
        );
    }

    #[test]
    fn test_framework_none_is_none_for_both_languages() {
        assert_eq!(
            TestFramework::parse_for(Language::C, "none"),
            TestFramework::None
        );
        assert_eq!(
            TestFramework::parse_for(Language::Cxx, ""),
            TestFramework::None
        );
    }

    #[test]
    fn unknown_cxx_framework_falls_back_to_catch2() {
        assert_eq!(
            TestFramework::parse_for(Language::Cxx, "boost-test"),
            TestFramework::Cxx(CxxTestFramework::Catch2)
        );
    }

    #[test]
    fn unknown_c_framework_falls_back_to_unity() {
        assert_eq!(
            TestFramework::parse_for(Language::C, "cmocka"),
            TestFramework::C(CTestFramework::Unity)
        );
    }

    #[test]
    fn cross_language_framework_is_replaced_by_language_fallback() {
        // Unity is a C framework; asking for it on a C++ project yields the
        // C++ fallback, never a C framework.
        assert_eq!(
            TestFramework::parse_for(Language::Cxx, "unity"),
            TestFramework::Cxx(CxxTestFramework::Catch2)
        );
        assert_eq!(
            TestFramework::parse_for(Language::C, "googletest"),
            TestFramework::C(CTestFramework::Unity)
        );
    }

    #[test]
    fn parsed_framework_always_valid_for_language() {
        for input in ["none", "googletest", "catch2", "doctest", "unity", "nonsense"] {
            for lang in [Language::C, Language::Cxx] {
                let fw = TestFramework::parse_for(lang, input);
                if let Some(fw_lang) = fw.language() {
                    assert_eq!(fw_lang, lang, "input {input:?} for {lang}");
                }
            }
        }
    }

    #[test]
    fn package_manager_parse() {
        assert_eq!(
            "vcpkg".parse::<PackageManager>().unwrap(),
            PackageManager::Vcpkg
        );
        assert_eq!("cpm".parse::<PackageManager>().unwrap(), PackageManager::Cpm);
        assert_eq!(PackageManager::parse_lossy("npm"), PackageManager::None);
    }

    #[test]
    fn license_parse_and_display_name() {
        assert_eq!("apache2".parse::<License>().unwrap(), License::Apache2);
        assert_eq!(License::Bsd3.display_name(), "BSD 3-Clause");
        assert_eq!(License::parse_lossy("wtfpl"), License::Mit);
    }
}
