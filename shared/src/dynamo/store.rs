use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use todo_atoms::todos::{KeyValueStore, TodoItem, TodoKey};
use todo_atoms::StoreError;

use super::conversions::{item_to_todo, todo_to_item, ID, TYPE, USER_ID};
use super::error::map_sdk_error;

/// A failed `attribute_exists` condition means the item is absent, which is a successful no-op
fn update_outcome<T, R>(
    result: Result<T, SdkError<UpdateItemError, R>>,
    key: &TodoKey,
) -> Result<(), StoreError>
where
    R: Debug + Send + Sync + 'static,
{
    match result {
        Ok(_) => Ok(()),
        Err(err)
            if err
                .as_service_error()
                .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
        {
            tracing::debug!("No todo {} for {}, status update skipped", key.id, key.user_id);
            Ok(())
        }
        Err(err) => Err(map_sdk_error("UpdateItem", err)),
    }
}

/// DynamoDB table of todos, partition key `user_id`, sort key `id`
pub struct DynamoStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl KeyValueStore for DynamoStore {
    async fn query(&self, user_id: &str, todo_type: &str) -> Result<Vec<TodoItem>, StoreError> {
        // "type" is a DynamoDB reserved word, so it goes through an attribute name alias
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#user_id = :user_id")
            .filter_expression("#type = :type")
            .expression_attribute_names("#user_id", USER_ID)
            .expression_attribute_names("#type", TYPE)
            .expression_attribute_values(":user_id", AttributeValue::S(user_id.to_string()))
            .expression_attribute_values(":type", AttributeValue::S(todo_type.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error("Query", e))?;

        result.items().iter().map(item_to_todo).collect()
    }

    async fn put(&self, item: &TodoItem) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(item)))
            .send()
            .await
            .map_err(|e| map_sdk_error("PutItem", e))?;

        Ok(())
    }

    async fn update_status(&self, key: &TodoKey, todo_type: &str) -> Result<(), StoreError> {
        // Without the condition DynamoDB would upsert a bare item for an unknown key
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(USER_ID, AttributeValue::S(key.user_id.clone()))
            .key(ID, AttributeValue::S(key.id.clone()))
            .update_expression("SET #type = :type")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#type", TYPE)
            .expression_attribute_names("#id", ID)
            .expression_attribute_values(":type", AttributeValue::S(todo_type.to_string()))
            .send()
            .await;

        update_outcome(result, key)
    }

    async fn delete(&self, key: &TodoKey) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(USER_ID, AttributeValue::S(key.user_id.clone()))
            .key(ID, AttributeValue::S(key.id.clone()))
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", e))?;

        Ok(())
    }
}
