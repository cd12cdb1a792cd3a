use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{TodoItem, TodoKey};
use crate::error::StoreError;

/// Keyed-item store holding todos, partitioned by `user_id`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Items in the `user_id` partition whose `type` equals `todo_type`, in store order.
    async fn query(&self, user_id: &str, todo_type: &str) -> Result<Vec<TodoItem>, StoreError>;

    /// Unconditional write; replaces any item with the same key.
    async fn put(&self, item: &TodoItem) -> Result<(), StoreError>;

    /// Sets `type` on an existing item. A missing key is a successful no-op
    /// and must not create an item.
    async fn update_status(&self, key: &TodoKey, todo_type: &str) -> Result<(), StoreError>;

    /// Idempotent: deleting a missing key succeeds.
    async fn delete(&self, key: &TodoKey) -> Result<(), StoreError>;
}

/// In-memory storage backend.
///
/// Ordered by key so query results are deterministic. Data is lost when the
/// store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<BTreeMap<TodoKey, TodoItem>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn query(&self, user_id: &str, todo_type: &str) -> Result<Vec<TodoItem>, StoreError> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| item.user_id == user_id)
            .filter(|item| item.todo_type == todo_type)
            .cloned()
            .collect())
    }

    async fn put(&self, item: &TodoItem) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.insert(item.key(), item.clone());
        Ok(())
    }

    async fn update_status(&self, key: &TodoKey, todo_type: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        if let Some(item) = items.get_mut(key) {
            item.todo_type = todo_type.to_string();
        }
        Ok(())
    }

    async fn delete(&self, key: &TodoKey) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}
