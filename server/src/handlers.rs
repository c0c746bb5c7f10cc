use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use todo_core::{require_title, CreateTodoRequest, CreatedTodo, NewTodo, Todo};

use crate::error::AppError;
use crate::repository::TodoRepository;

/// Router state: the repository every handler talks to.
pub struct AppState<R> {
    repository: Arc<R>,
}

impl<R> AppState<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

// Derive would demand `R: Clone`; only the `Arc` is cloned.
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

pub async fn list_todos<R: TodoRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.repository.list_all().await?;
    Ok(Json(todos))
}

pub async fn create_todo<R: TodoRepository>(
    State(state): State<AppState<R>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedTodo>, AppError> {
    let Json(body) = payload?;
    check_title(&body)?;
    let request: CreateTodoRequest =
        serde_json::from_value(body).map_err(AppError::InvalidFields)?;
    let todo = NewTodo::try_from(request)?;
    let id = state.repository.insert(todo).await?;
    tracing::info!(id = %id, "todo inserted");
    Ok(Json(CreatedTodo { id }))
}

/// Apply the title rule before any other field is type-checked, so a missing
/// title always wins over a mistyped optional field. A non-string title is
/// left for typed decoding to reject.
fn check_title(body: &Value) -> Result<(), AppError> {
    match body.get("title") {
        None | Some(Value::Null) => require_title(None)?,
        Some(Value::String(title)) => require_title(Some(title))?,
        Some(_) => {}
    }
    Ok(())
}

/// The route is declared but what it should delete is undecided.
pub async fn delete_todos() -> AppError {
    AppError::NotImplemented("DELETE /todos")
}
