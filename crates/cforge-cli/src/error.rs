//! Error handling for the cforge CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit-code mapping (everything maps to 1; argument parsing is clap's
//!   business and exits 2 before we get here)

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use cforge_core::error::CoreError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `cforge-core` (validation or
    /// materialization).
    #[error("{0}")]
    Core(#[from] CoreError),

    /// A configuration file could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// An I/O operation failed outside the materializer (stdin, stdout).
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user (wizard aborted).
    #[error("operation cancelled")]
    Cancelled,

    /// Feature not compiled in (interactive mode without the feature flag).
    #[error("feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::Config { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check your config file, or pass --config <FILE>".into(),
            ],
            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                format!("Reinstall with the feature enabled: cargo install cforge-cli --features {feature}"),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Any failure — validation or I/O — exits 1 with a diagnostic on
    /// stderr.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self {
            Self::Core(core) => match core.category() {
                cforge_core::error::ErrorCategory::Validation => {
                    tracing::warn!("validation error: {self}")
                }
                cforge_core::error::ErrorCategory::Internal => {
                    tracing::error!("internal error: {self}")
                }
            },
            Self::Cancelled => tracing::info!("cancelled by user"),
            _ => tracing::error!("error: {self}"),
        }

        if let Some(source) = self.source() {
            tracing::debug!("caused by: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cforge_core::domain::DomainError;

    fn invalid_name() -> CliError {
        CliError::Core(
            DomainError::InvalidProjectName {
                name: ".hidden".into(),
                reason: "starts with '.'".into(),
            }
            .into(),
        )
    }

    #[test]
    fn every_error_exits_one() {
        assert_eq!(invalid_name().exit_code(), 1);
        assert_eq!(CliError::Cancelled.exit_code(), 1);
        assert_eq!(
            CliError::Io {
                message: "x".into(),
                source: std::io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn invalid_name_suggestions_mention_the_rules() {
        let suggestions = invalid_name().suggestions();
        assert!(suggestions.iter().any(|s| s.contains("'.' or '-'")));
    }

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let s = invalid_name().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::Cancelled.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
