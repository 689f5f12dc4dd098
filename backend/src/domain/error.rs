//! Domain-level error types.
//!
//! These errors are transport agnostic: the presentation shell maps them to
//! inline messages, toasts, or whatever envelope it renders. Each error pairs
//! a stable machine-readable code with a user-facing message.

use serde::{Deserialize, Serialize};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A lookup missed: unknown credentials, unknown account id.
    NotFound,
    /// A uniqueness rule was violated: duplicate email, duplicate favourite.
    Conflict,
    /// The local store could not be opened or queried.
    StoreUnavailable,
    /// The remote completion endpoint failed or returned garbage.
    UpstreamFailure,
    /// Caller-supplied input failed validation at the boundary.
    ValidationFailure,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty and suitable for direct display.
///
/// # Examples
/// ```
/// use backend::domain::{DomainError, ErrorCode};
///
/// let err = DomainError::not_found("Invalid email or password");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
}

impl DomainError {
    /// Create a new error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message suitable for inline display.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::StoreUnavailable`].
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamFailure`].
    pub fn upstream_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamFailure, message)
    }

    /// Convenience constructor for [`ErrorCode::ValidationFailure`].
    pub fn validation_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailure, message)
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DomainError::not_found("missing"), ErrorCode::NotFound)]
    #[case(DomainError::conflict("taken"), ErrorCode::Conflict)]
    #[case(DomainError::store_unavailable("closed"), ErrorCode::StoreUnavailable)]
    #[case(DomainError::upstream_failure("down"), ErrorCode::UpstreamFailure)]
    #[case(DomainError::validation_failure("blank"), ErrorCode::ValidationFailure)]
    fn constructors_set_expected_codes(#[case] error: DomainError, #[case] code: ErrorCode) {
        assert_eq!(error.code(), code);
    }

    #[rstest]
    fn display_renders_the_message_only() {
        let error = DomainError::conflict("Email already registered");
        assert_eq!(error.to_string(), "Email already registered");
    }

    #[rstest]
    fn serialises_with_snake_case_codes() {
        let json =
            serde_json::to_value(DomainError::store_unavailable("no store")).expect("serialise");
        assert_eq!(json["code"], "store_unavailable");
        assert_eq!(json["message"], "no store");
    }
}
