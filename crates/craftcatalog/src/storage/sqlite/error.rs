//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from `craftcatalog_core::storage`.

use craftcatalog_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `QueryReturnedNoRows` → `RepositoryError::NotFound`
/// - `SQLITE_CONSTRAINT_*` → `RepositoryError::ValidationFailed`
/// - Undecodable rows → `RepositoryError::StoreUnavailable`
/// - All other errors → `RepositoryError::StoreUnavailable`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str, id: &str) -> RepositoryError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepositoryError::ValidationFailed(format!("{entity_type} violates a constraint: {err}"))
        }

        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::IntegralValueOutOfRange(..) => {
            RepositoryError::StoreUnavailable(format!("Undecodable {entity_type} row: {err}"))
        }

        _ => RepositoryError::StoreUnavailable(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code. `id` is only
/// used to fill in `NotFound`.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id.into())
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::StoreUnavailable("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::StoreUnavailable(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_foreign_key_maps_to_validation_failed() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code: ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "ProductImage", "3");

        assert!(matches!(result, RepositoryError::ValidationFailed(_)));
    }

    #[test]
    fn test_no_rows_maps_to_not_found_with_id() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error(err, "Product", "42");

        assert_eq!(result, RepositoryError::product_not_found(42));
    }

    #[test]
    fn test_busy_maps_to_store_unavailable() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::DatabaseBusy,
            extended_code: ffi::SQLITE_BUSY,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "Product", "1");

        assert!(matches!(result, RepositoryError::StoreUnavailable(_)));
    }

    #[test]
    fn test_connection_closed_maps_to_store_unavailable() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Product", "1");

        assert_eq!(
            result,
            RepositoryError::StoreUnavailable("Connection closed unexpectedly".to_string())
        );
    }

    #[test]
    fn test_other_error_maps_to_store_unavailable() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("disk gone")));

        let result = map_tokio_rusqlite_error(err, "Product", "1");

        assert!(matches!(result, RepositoryError::StoreUnavailable(_)));
    }
}
