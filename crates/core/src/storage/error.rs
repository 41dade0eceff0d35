use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A conditional write found an existing item with the same key.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// Stored data could not be decoded into a domain record.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true for failures of the underlying store or network.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            RepositoryError::ConnectionFailed(_) | RepositoryError::QueryFailed(_)
        )
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Beer",
            id: "1".to_string(),
        };
        assert_eq!(error.to_string(), "Beer already exists: 1");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("id is not a number: abc".to_string());
        assert_eq!(error.to_string(), "Invalid data: id is not a number: abc");
    }

    #[test]
    fn test_is_infrastructure() {
        assert!(RepositoryError::ConnectionFailed("down".to_string()).is_infrastructure());
        assert!(RepositoryError::QueryFailed("throttled".to_string()).is_infrastructure());
        assert!(!RepositoryError::InvalidData("bad".to_string()).is_infrastructure());
        assert!(!RepositoryError::AlreadyExists {
            entity_type: "Beer",
            id: "1".to_string(),
        }
        .is_infrastructure());
    }
}
