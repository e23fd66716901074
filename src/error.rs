use crate::database::DatabaseError;
use thiserror::Error;

/// Service-level error types
///
/// Cache faults never show up here: the summary path degrades to a miss on
/// cache read failures and swallows cache write failures, so only
/// precondition violations and storage errors reach the caller.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::InvalidArgument("name must not be empty".to_string());
        assert_eq!(err.to_string(), "invalid argument: name must not be empty");

        let err: ServiceError = DatabaseError::Database("connection reset".to_string()).into();
        assert_eq!(err.to_string(), "Database error: connection reset");
    }

    #[test]
    fn test_database_error_conversion() {
        let err: ServiceError = DatabaseError::NotFound.into();
        assert!(matches!(
            err,
            ServiceError::Database(DatabaseError::NotFound)
        ));
    }
}
