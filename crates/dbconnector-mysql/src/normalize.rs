//! Driver error normalization.

use dbconnector_core::Error;

/// Map a duplicate-key server error to [`Error::OptimisticConcurrency`].
///
/// Writers that guard updates with a unique index treat the violation as a
/// lost race. Every other error is returned unchanged.
pub fn normalize(err: Error) -> Error {
    match err {
        Error::Server(ref e) if e.is_duplicate_entry() => {
            tracing::debug!(sqlstate = ?e.sqlstate, "Duplicate entry mapped to optimistic concurrency");
            Error::OptimisticConcurrency
        }
        other => other,
    }
}

/// [`normalize`] applied to the error side of a result.
pub fn normalize_result<T>(result: Result<T, Error>) -> Result<T, Error> {
    result.map_err(normalize)
}
