//! Maps AWS SDK errors to `StoreError`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use todo_atoms::StoreError;

const THROTTLING_CODES: [&str; 3] = [
    "ProvisionedThroughputExceededException",
    "RequestLimitExceeded",
    "ThrottlingException",
];

pub fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    let detail = format!("{} failed: {}", operation, DisplayErrorContext(&err));
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => StoreError::Connection(detail),
        _ => match err.code() {
            Some(code) if THROTTLING_CODES.contains(&code) => StoreError::Throttled(detail),
            _ => StoreError::Backend(detail),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::error::ErrorMetadata;
    use aws_sdk_dynamodb::operation::query::QueryError;

    fn service_error(code: &str) -> SdkError<QueryError, ()> {
        let err = QueryError::generic(ErrorMetadata::builder().code(code).build());
        SdkError::service_error(err, ())
    }

    #[test]
    fn test_throttling_codes_map_to_throttled() {
        for code in THROTTLING_CODES {
            assert!(matches!(
                map_sdk_error("Query", service_error(code)),
                StoreError::Throttled(_)
            ));
        }
    }

    #[test]
    fn test_other_service_errors_map_to_backend() {
        let mapped = map_sdk_error("Query", service_error("ResourceNotFoundException"));
        match mapped {
            StoreError::Backend(detail) => assert!(detail.starts_with("Query failed")),
            other => panic!("expected Backend, got {:?}", other),
        }
    }

    #[test]
    fn test_timeouts_map_to_connection() {
        let err: SdkError<QueryError, ()> = SdkError::timeout_error("deadline elapsed");
        assert!(matches!(map_sdk_error("Query", err), StoreError::Connection(_)));
    }
}
