use thiserror::Error;

/// Failures reported by a cache backend.
///
/// The caching decorator never surfaces these to its callers; they are
/// logged and the cache is treated as empty.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The backend could not be reached at all.
    #[error("Cache unreachable: {0}")]
    Unreachable(String),
    /// The backend refused a single operation.
    #[error("Cache {operation} failed for '{target}': {reason}")]
    Rejected {
        operation: &'static str,
        target: String,
        reason: String,
    },
}

impl CacheError {
    pub fn rejected(
        operation: &'static str,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Rejected {
            operation,
            target: target.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
