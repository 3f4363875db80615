use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may hold and re-report them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("unknown {field}: {value}")]
    UnknownValue {
        field: &'static str,
        value: String,
    },

    #[error("invalid file plan: {0}")]
    InvalidPlan(String),

    #[error("duplicate path in file plan: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed in file plan: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Project name rejected: {reason}"),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Names may not start with '.' or '-'".into(),
                "Examples: myapp, my-lib, engine2".into(),
            ],
            Self::UnknownValue { field, value } => vec![
                format!("'{value}' is not a recognized {field}"),
                "Run with --help to see the accepted values".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::UnknownValue { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidPlan(_) | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
