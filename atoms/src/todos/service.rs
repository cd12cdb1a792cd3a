use super::model::{
    CreateTodoPayload, DeletedTodo, StatusUpdate, TodoItem, TodoKey, TodoStatus,
};
use super::store::KeyValueStore;
use crate::error::StoreError;

/// Todo operations over an injected store (pure domain logic, no HTTP)
pub struct TodoService<S> {
    store: S,
}

impl<S: KeyValueStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// List a user's todos with the given status.
    /// The filter is an equality match, so unknown statuses simply match nothing.
    pub async fn list(&self, user_id: &str, todo_type: &str) -> Result<Vec<TodoItem>, StoreError> {
        self.store.query(user_id, todo_type).await
    }

    /// Create a new todo; it always starts as `not_started`
    pub async fn create(
        &self,
        user_id: &str,
        payload: CreateTodoPayload,
    ) -> Result<TodoItem, StoreError> {
        let item = TodoItem {
            user_id: user_id.to_string(),
            id: uuid::Uuid::new_v4().to_string(),
            title: payload.title,
            body: payload.body,
            todo_type: TodoStatus::NotStarted.as_str().to_string(),
        };

        self.store.put(&item).await?;
        Ok(item)
    }

    /// Set the status of a todo. Reports success whether or not the item exists.
    pub async fn set_status(
        &self,
        user_id: &str,
        id: &str,
        todo_type: &str,
    ) -> Result<StatusUpdate, StoreError> {
        if TodoStatus::parse(todo_type).is_none() {
            tracing::warn!("Persisting unrecognised todo status {:?} for {}", todo_type, id);
        }

        self.store
            .update_status(&TodoKey::new(user_id, id), todo_type)
            .await?;

        Ok(StatusUpdate {
            id: id.to_string(),
            todo_type: todo_type.to_string(),
        })
    }

    /// Delete a todo
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<DeletedTodo, StoreError> {
        self.store.delete(&TodoKey::new(user_id, id)).await?;
        Ok(DeletedTodo { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::store::InMemoryStore;
    use std::collections::HashSet;

    fn service() -> TodoService<InMemoryStore> {
        TodoService::new(InMemoryStore::new())
    }

    fn payload(title: &str, body: &str) -> CreateTodoPayload {
        CreateTodoPayload {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_starts_not_started_with_fresh_id() {
        let service = service();
        let mut seen = HashSet::new();
        for _ in 0..20 {
            let item = service.create("alice", payload("T", "B")).await.unwrap();
            assert_eq!(item.todo_type, "not_started");
            assert_eq!(item.title, "T");
            assert_eq!(item.body, "B");
            assert!(!item.id.is_empty());
            assert!(seen.insert(item.id));
        }
    }

    #[tokio::test]
    async fn test_created_item_is_listed_under_its_status() {
        let service = service();
        let item = service.create("alice", payload("T", "B")).await.unwrap();

        let listed = service.list("alice", "not_started").await.unwrap();
        assert!(listed.iter().any(|todo| todo.id == item.id));
    }

    #[tokio::test]
    async fn test_set_status_moves_item_between_lists() {
        let service = service();
        let item = service.create("alice", payload("T", "B")).await.unwrap();

        let update = service.set_status("alice", &item.id, "done").await.unwrap();
        assert_eq!(update.id, item.id);
        assert_eq!(update.todo_type, "done");

        let done = service.list("alice", "done").await.unwrap();
        assert!(done.iter().any(|todo| todo.id == item.id));
        let not_started = service.list("alice", "not_started").await.unwrap();
        assert!(not_started.iter().all(|todo| todo.id != item.id));
    }

    #[tokio::test]
    async fn test_set_status_on_missing_item_succeeds_without_creating() {
        let service = service();
        let update = service.set_status("alice", "missing", "done").await.unwrap();
        assert_eq!(update.id, "missing");
        assert!(service.store().is_empty().await);
        assert!(service.list("alice", "done").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_status_persists_unknown_values() {
        let service = service();
        let item = service.create("alice", payload("T", "B")).await.unwrap();

        service.set_status("alice", &item.id, "archived").await.unwrap();

        let listed = service.list("alice", "archived").await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_item_and_repeats_cleanly() {
        let service = service();
        let item = service.create("alice", payload("T", "B")).await.unwrap();

        let deleted = service.delete("alice", &item.id).await.unwrap();
        assert_eq!(deleted.id, item.id);
        for status in TodoStatus::ALL {
            let listed = service.list("alice", status.as_str()).await.unwrap();
            assert!(listed.iter().all(|todo| todo.id != item.id));
        }

        assert!(service.delete("alice", &item.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let service = service();
        let item = service.create("alice", payload("T", "B")).await.unwrap();
        service.set_status("bob", &item.id, "done").await.unwrap();
        service.delete("bob", &item.id).await.unwrap();

        for status in TodoStatus::ALL {
            assert!(service.list("bob", status.as_str()).await.unwrap().is_empty());
        }
        let still_there = service.list("alice", "not_started").await.unwrap();
        assert_eq!(still_there.len(), 1);
    }
}
