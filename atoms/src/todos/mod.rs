// Re-export model types, the store seam, the service and the HTTP handlers
pub mod model;
pub mod store;
pub mod service;
pub mod http;

pub use model::{
    CreateTodoPayload, DeleteTodoPayload, DeletedTodo, ListTodosQuery, StatusUpdate, TodoItem,
    TodoKey, TodoStatus, UpdateTodoPayload,
};
pub use store::{InMemoryStore, KeyValueStore};
pub use service::TodoService;
pub use http::*;
