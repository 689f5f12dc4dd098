//! Shared mapping from pool and Diesel failures to the store port error.
//!
//! Every repository funnels its failures through these two functions so the
//! domain sees one consistent error surface regardless of which adapter
//! tripped.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

/// Map pool errors to the store port error.
pub(crate) fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message }
        | PoolError::Build { message }
        | PoolError::Runtime { message } => StoreError::connection(message),
    }
}

/// Map Diesel errors to the store port error.
pub(crate) fn map_diesel_error(error: DieselError) -> StoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "store operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "store operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StoreError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            StoreError::conflict("uniqueness constraint violated")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            StoreError::query("foreign key constraint violated")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreError::connection("store connection closed")
        }
        DieselError::QueryBuilderError(_) => StoreError::query("store query error"),
        _ => StoreError::query("store error"),
    }
}
