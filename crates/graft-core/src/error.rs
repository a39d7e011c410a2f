//! Unified error handling for Graft Core.
//!
//! Wraps domain and application errors into one type so callers deal with a
//! single error surface, with a category accessor for CLI display and exit
//! code mapping.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Graft Core operations.
#[derive(Debug, Error)]
pub enum GraftError {
    /// Errors from the domain layer (configuration inputs).
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("application error: {0}")]
    Application(#[from] ApplicationError),
}

impl GraftError {
    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type GraftResult<T> = Result<T, GraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_validation() {
        let err: GraftError = DomainError::InvalidNamespaceTemplate {
            template: "bad..ns".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_packages_are_not_found() {
        let err: GraftError = ApplicationError::PackagesNotFound {
            names: vec!["FakeBundle".into()],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
