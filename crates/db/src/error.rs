//! Mapping of database failures onto the core error taxonomy.

use matchtag_core::error::CoreError;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Unique constraint guarding category names.
pub const UQ_CATEGORIES_NAME: &str = "uq_categories_name";

/// Classify a sqlx error into a [`CoreError`].
///
/// - A category-name unique violation maps to `DuplicateName`; this catches
///   a concurrent insert that slipped past the in-transaction check.
/// - Check-constraint violations map to `Validation`.
/// - Connection-level failures map to `StorageUnavailable`.
/// - Everything else is `Internal`, logged with its original message.
pub fn classify(err: sqlx::Error) -> CoreError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            if code.as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(UQ_CATEGORIES_NAME)
            {
                return CoreError::DuplicateName("a category with that name already exists".into());
            }
            if code.as_deref() == Some(CHECK_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Validation(format!("value violates constraint {constraint}"));
            }
            tracing::error!(error = %db_err, "Database error");
            CoreError::Internal("database error".into())
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => {
            tracing::warn!(error = %err, "Database unreachable");
            CoreError::StorageUnavailable(err.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            CoreError::Internal("database error".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_retryable() {
        let err = classify(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, CoreError::StorageUnavailable(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn io_error_is_storage_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            classify(sqlx::Error::Io(io)),
            CoreError::StorageUnavailable(_)
        ));
    }

    #[test]
    fn row_not_found_is_internal() {
        assert!(matches!(
            classify(sqlx::Error::RowNotFound),
            CoreError::Internal(_)
        ));
    }
}
