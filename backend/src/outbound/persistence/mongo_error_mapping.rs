//! Shared mapping from driver and deadline failures to persistence errors.

use tracing::debug;

use crate::domain::DeadlineExceeded;
use crate::domain::ports::UserPersistenceError;

/// Map a driver error into a storage fault, logging the driver's view.
pub(super) fn map_mongo_error(
    operation: &'static str,
    error: mongodb::error::Error,
) -> UserPersistenceError {
    debug!(
        operation,
        kind = ?error.kind,
        labels = ?error.labels(),
        "mongodb operation failed"
    );
    UserPersistenceError::storage(error.to_string())
}

/// Map an elapsed request deadline into a storage fault.
pub(super) fn map_deadline_error(
    operation: &'static str,
    error: DeadlineExceeded,
) -> UserPersistenceError {
    debug!(operation, "mongodb operation abandoned at request deadline");
    UserPersistenceError::storage(error.to_string())
}
