use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, ConfigLoader, SdkConfig};
use todo_atoms::TodoError;

/// Environment variable naming the DynamoDB table holding todos
pub const TABLE_NAME_VAR: &str = "TODO_DATABASE";

pub const DEFAULT_REGION: &str = "us-east-1";

pub fn table_name() -> Result<String, TodoError> {
    table_name_from(|key| std::env::var(key).ok())
}

pub fn table_name_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, TodoError> {
    match lookup(TABLE_NAME_VAR) {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(TodoError::Configuration(format!("{} must be set", TABLE_NAME_VAR))),
    }
}

/// AWS default credential chain; region from the environment, else us-east-1
pub async fn load_aws_config() -> SdkConfig {
    let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
    aws_config_loader().region(region).load().await
}

/// Store failures surface on the first attempt, so SDK retries stay off
fn aws_config_loader() -> ConfigLoader {
    aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled())
}
