//! Agreement-specific error types.
//!
//! Three caller-visible kinds, never conflated: the host application
//! renders each differently (inline field error, 404-style redirect,
//! generic failure banner).

use crate::domain::foundation::{AgreementId, ValidationError};

/// Errors returned by agreement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgreementError {
    /// Caller-supplied input violates an invariant. Recoverable by
    /// re-prompting; never retried automatically.
    Validation(ValidationError),

    /// The referenced agreement does not exist.
    NotFound(AgreementId),

    /// The store failed to read or write. The caller may retry the whole
    /// operation; this crate performs no internal retries.
    Persistence { reason: String },
}

impl AgreementError {
    pub fn not_found(id: AgreementId) -> Self {
        AgreementError::NotFound(id)
    }

    pub fn persistence(reason: impl Into<String>) -> Self {
        AgreementError::Persistence {
            reason: reason.into(),
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            AgreementError::Validation(err) => err.to_string(),
            AgreementError::NotFound(id) => format!("Service agreement not found: {}", id),
            AgreementError::Persistence { reason } => {
                format!("Agreement store failure: {}", reason)
            }
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AgreementError::Persistence { .. })
    }
}

impl std::fmt::Display for AgreementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AgreementError {}

impl From<ValidationError> for AgreementError {
    fn from(err: ValidationError) -> Self {
        AgreementError::Validation(err)
    }
}
