use serde::{Deserialize, Serialize};

/// Todo domain model - one item on a user's list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub user_id: String,
    pub id: String,
    pub title: String,
    pub body: String,

    /// Stored as "type" in DynamoDB and on the wire.
    /// Not restricted to `TodoStatus` values: status updates persist whatever the caller sent.
    #[serde(rename = "type")]
    pub todo_type: String,
}

impl TodoItem {
    pub fn key(&self) -> TodoKey {
        TodoKey {
            user_id: self.user_id.clone(),
            id: self.id.clone(),
        }
    }
}

/// Primary key of a todo item: partition `user_id`, sort `id`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoKey {
    pub user_id: String,
    pub id: String,
}

impl TodoKey {
    pub fn new(user_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoStatus {
    NotStarted,
    InProgress,
    Done,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [
        TodoStatus::NotStarted,
        TodoStatus::InProgress,
        TodoStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "not_started",
            TodoStatus::InProgress => "in_progress",
            TodoStatus::Done => "done",
        }
    }

    pub fn parse(value: &str) -> Option<TodoStatus> {
        TodoStatus::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    #[serde(rename = "type")]
    pub todo_type: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoPayload {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub todo_type: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodoPayload {
    pub id: String,
}

/// Echo of a status update as the caller requested it (not re-read from the store)
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub id: String,
    #[serde(rename = "type")]
    pub todo_type: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DeletedTodo {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_known_values() {
        assert_eq!(TodoStatus::parse("not_started"), Some(TodoStatus::NotStarted));
        assert_eq!(TodoStatus::parse("in_progress"), Some(TodoStatus::InProgress));
        assert_eq!(TodoStatus::parse("done"), Some(TodoStatus::Done));
        assert_eq!(TodoStatus::parse("archived"), None);
    }

    #[test]
    fn test_item_serializes_type_attribute() {
        let item = TodoItem {
            user_id: "alice".to_string(),
            id: "1".to_string(),
            title: "T".to_string(),
            body: "B".to_string(),
            todo_type: "done".to_string(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "done");
        assert!(value.get("todo_type").is_none());
        assert_eq!(value["user_id"], "alice");
    }
}
