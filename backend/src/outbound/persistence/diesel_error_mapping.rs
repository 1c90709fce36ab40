//! Shared Diesel error mapping for the blog repositories.
//!
//! Query failures keep the raw SQLite message so callers can surface it.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Storage failure classified by cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StorageFailure {
    /// Connection closed or unavailable.
    Connection(String),
    /// A `UNIQUE` constraint rejected the write.
    UniqueViolation(String),
    /// A `FOREIGN KEY` constraint rejected the write.
    ForeignKeyViolation(String),
    /// Anything else.
    Query(String),
}

/// Classify a pool error; every pool failure is a connection failure.
pub(crate) fn classify_pool_error(error: PoolError) -> StorageFailure {
    StorageFailure::Connection(error.into_message())
}

/// Classify a Diesel error, logging its kind at debug level.
pub(crate) fn classify_diesel_error(error: DieselError) -> StorageFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StorageFailure::Connection(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StorageFailure::UniqueViolation(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            StorageFailure::ForeignKeyViolation(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => StorageFailure::Query(info.message().to_owned()),
        other => StorageFailure::Query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_is_connection_failure() {
        let failure = classify_pool_error(PoolError::checkout("timed out"));
        assert_eq!(failure, StorageFailure::Connection("timed out".to_owned()));
    }

    #[rstest]
    #[case(DatabaseErrorKind::UniqueViolation, StorageFailure::UniqueViolation("boom".to_owned()))]
    #[case(DatabaseErrorKind::ForeignKeyViolation, StorageFailure::ForeignKeyViolation("boom".to_owned()))]
    #[case(DatabaseErrorKind::ClosedConnection, StorageFailure::Connection("boom".to_owned()))]
    #[case(DatabaseErrorKind::Unknown, StorageFailure::Query("boom".to_owned()))]
    fn database_errors_are_classified(
        #[case] kind: DatabaseErrorKind,
        #[case] expected: StorageFailure,
    ) {
        let error = DieselError::DatabaseError(kind, Box::new("boom".to_owned()));
        assert_eq!(classify_diesel_error(error), expected);
    }

    #[rstest]
    fn not_found_keeps_diesel_message() {
        let failure = classify_diesel_error(DieselError::NotFound);
        assert_eq!(failure, StorageFailure::Query("Record not found".to_owned()));
    }
}
