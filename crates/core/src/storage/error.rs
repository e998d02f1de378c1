use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A DNS record matched more than one team. Record ownership must be
    /// unambiguous, so this is a data-integrity fault rather than a normal
    /// lookup result.
    #[error("dns record is not unique among teams: {record}")]
    AmbiguousOwner { record: String },
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "TeamAssets",
            id: "karnivool".to_string(),
        };
        assert_eq!(error.to_string(), "TeamAssets not found: karnivool");
    }

    #[test]
    fn test_ambiguous_owner_display() {
        let error = RepositoryError::AmbiguousOwner {
            record: "sound.awake".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "dns record is not unique among teams: sound.awake"
        );
    }

    #[test]
    fn test_transaction_failed_display() {
        let error = RepositoryError::TransactionFailed("commit rejected".to_string());
        assert_eq!(error.to_string(), "Transaction failed: commit rejected");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("invalid filter".to_string());
        assert_eq!(error.to_string(), "Query failed: invalid filter");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("empty team name".to_string());
        assert_eq!(error.to_string(), "Invalid data: empty team name");
    }
}
