//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `AlreadyExists` -> 409 (Conflict)
/// - everything else -> 500 (Internal Server Error)
///
/// Decode failures are 500 as well: they describe data already in the
/// table, not anything the caller sent.
///
/// # Examples
///
/// ```
/// use beerhouse_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::AlreadyExists {
///     entity_type: "Beer",
///     id: "1".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 409);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_maps_to_409() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Beer",
            id: "1".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_infrastructure_errors_map_to_500() {
        let connection = RepositoryError::ConnectionFailed("no route to host".to_string());
        let query = RepositoryError::QueryFailed("Throughput exceeded".to_string());

        assert_eq!(repository_error_to_status_code(&connection), 500);
        assert_eq!(repository_error_to_status_code(&query), 500);
    }

    #[test]
    fn test_decode_errors_map_to_500() {
        let invalid = RepositoryError::InvalidData("price is not a number".to_string());

        assert_eq!(repository_error_to_status_code(&invalid), 500);
    }
}
