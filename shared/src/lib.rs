pub mod config;
pub mod dynamo;

use aws_sdk_dynamodb::Client as DynamoClient;
use todo_atoms::{todos::TodoService, TodoError};

use dynamo::DynamoStore;

/// Clients built once per cold start and shared across invocations
pub struct AppState {
    pub dynamo_client: DynamoClient,
}

impl AppState {
    pub async fn from_env() -> Self {
        let aws_config = config::load_aws_config().await;
        Self {
            dynamo_client: DynamoClient::new(&aws_config),
        }
    }

    /// Service bound to the table named in the environment.
    /// The table is resolved on every call so a missing setting fails the
    /// invocation before anything reaches DynamoDB.
    pub fn todo_service(&self) -> Result<TodoService<DynamoStore>, TodoError> {
        let table_name = config::table_name()?;
        Ok(TodoService::new(DynamoStore::new(
            self.dynamo_client.clone(),
            table_name,
        )))
    }
}
