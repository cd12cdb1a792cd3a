use thiserror::Error;

/// Failures reported by a `KeyValueStore` implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Throttled: {0}")]
    Throttled(String),
    #[error("Store request failed: {0}")]
    Backend(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Everything that can go wrong while serving a todo request.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::MalformedInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_transparent_inside_todo_error() {
        let err: TodoError = StoreError::Throttled("slow down".to_string()).into();
        assert_eq!(err.to_string(), "Throttled: slow down");
    }

    #[test]
    fn test_json_errors_become_malformed_input() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TodoError::from(json_err);
        assert!(matches!(err, TodoError::MalformedInput(_)));
    }
}
