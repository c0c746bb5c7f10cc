//! `TodoRepository` backed by the `todos` collection.
//!
//! # Design
//! `TodoDocument` is the stored shape: the API's `id` becomes `_id`, held as a
//! native ObjectId so the driver assigns it on insert. Optional fields are
//! skipped when absent so stored documents carry only what the caller sent.
//! A stored document missing `title`, or holding a field of the wrong type
//! (say a string `completed`), fails to decode and fails the whole listing.

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use todo_core::{NewTodo, Todo, TodoId};

use crate::repository::TodoRepository;
use crate::store::{MongoStore, StoreError};

pub const TODOS_COLLECTION: &str = "todos";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

impl From<NewTodo> for TodoDocument {
    fn from(todo: NewTodo) -> Self {
        Self {
            id: None,
            title: todo.title().to_string(),
            completed: todo.completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

impl TodoDocument {
    fn into_todo(self) -> Result<Todo, StoreError> {
        let id = self
            .id
            .ok_or_else(|| StoreError::MissingId(TODOS_COLLECTION.to_string()))?;
        Ok(Todo {
            id: TodoId::from(id),
            title: self.title,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MongoTodoRepository {
    collection: Collection<TodoDocument>,
}

impl MongoTodoRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(TODOS_COLLECTION),
        }
    }
}

impl TodoRepository for MongoTodoRepository {
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let mut cursor = self.collection.find(doc! {}).await?;
        let mut todos = Vec::new();
        while cursor.advance().await? {
            todos.push(cursor.deserialize_current()?.into_todo()?);
        }
        Ok(todos)
    }

    async fn insert(&self, todo: NewTodo) -> Result<TodoId, StoreError> {
        let result = self.collection.insert_one(TodoDocument::from(todo)).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedInsertedId(result.inserted_id.to_string()))?;
        tracing::debug!(id = %id, "todo document inserted");
        Ok(TodoId::from(id))
    }
}
