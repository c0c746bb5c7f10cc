//! Persistence seam between the HTTP handlers and a store.

use std::future::Future;
use std::sync::Arc;

use todo_core::{NewTodo, Todo, TodoId};
use tokio::sync::RwLock;

use crate::store::StoreError;

/// Insert and list operations over the `todos` collection.
///
/// Implementations return todos in insertion order and never filter.
pub trait TodoRepository: Send + Sync + 'static {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send;

    /// Persist a validated todo and return the id the store assigned.
    fn insert(&self, todo: NewTodo) -> impl Future<Output = Result<TodoId, StoreError>> + Send;
}

/// Process-local repository. State lives as long as the last clone.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn insert(&self, todo: NewTodo) -> Result<TodoId, StoreError> {
        let id = TodoId::generate();
        self.todos.write().await.push(todo.with_id(id));
        Ok(id)
    }
}
