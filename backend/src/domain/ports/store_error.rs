//! Shared error type for local-store ports.

use thiserror::Error;

/// Errors raised by store adapters.
///
/// Adapters absorb every low-level store failure into one of these variants;
/// nothing from the database layer crosses the port boundary untyped, and
/// nothing panics across it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store file could not be opened or a connection checked out.
    #[error("store connection failed: {message}")]
    Connection {
        /// Adapter-supplied detail.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("store query failed: {message}")]
    Query {
        /// Adapter-supplied detail.
        message: String,
    },
    /// A uniqueness rule was violated (duplicate email, duplicate favourite).
    #[error("store conflict: {message}")]
    Conflict {
        /// Adapter-supplied detail.
        message: String,
    },
}

impl StoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for uniqueness violations.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// True for the conflict variant.
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_accept_str_and_preserve_messages() {
        let err = StoreError::connection("file locked");
        assert!(err.to_string().contains("file locked"));
        assert!(!err.is_conflict());
        assert!(StoreError::conflict("duplicate email").is_conflict());
    }
}
