use thiserror::Error;

/// Domain-level errors.
///
/// Only configuration inputs can fail at this layer; a package that violates
/// the naming convention is a reported skip, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "the namespace '{template}' is not a valid namespace: \
         segments must be alphanumeric or the ':vendor' token"
    )]
    InvalidNamespaceTemplate { template: String },
}
