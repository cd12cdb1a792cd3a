use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todo_atoms::{todos::TodoItem, StoreError};

pub const USER_ID: &str = "user_id";
pub const ID: &str = "id";
pub const TITLE: &str = "title";
pub const BODY: &str = "body";
pub const TYPE: &str = "type";

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Option<String> {
    item.get(name).and_then(|v| v.as_s().ok()).map(|s| s.to_string())
}

/// Key attributes must be present; anything else missing reads as empty
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoItem, StoreError> {
    let user_id = string_attr(item, USER_ID)
        .ok_or_else(|| StoreError::InvalidData(format!("item without {}", USER_ID)))?;
    let id = string_attr(item, ID)
        .ok_or_else(|| StoreError::InvalidData(format!("item without {}", ID)))?;

    Ok(TodoItem {
        user_id,
        id,
        title: string_attr(item, TITLE).unwrap_or_default(),
        body: string_attr(item, BODY).unwrap_or_default(),
        todo_type: string_attr(item, TYPE).unwrap_or_default(),
    })
}

pub fn todo_to_item(todo: &TodoItem) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (USER_ID.to_string(), AttributeValue::S(todo.user_id.clone())),
        (ID.to_string(), AttributeValue::S(todo.id.clone())),
        (TITLE.to_string(), AttributeValue::S(todo.title.clone())),
        (BODY.to_string(), AttributeValue::S(todo.body.clone())),
        (TYPE.to_string(), AttributeValue::S(todo.todo_type.clone())),
    ])
}
