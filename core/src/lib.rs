//! Domain model for the todo service.
//!
//! # Overview
//! Holds the todo types exchanged over HTTP and the validation rule applied
//! to create requests. Nothing here touches the network or the database; the
//! `todo-server` crate owns all I/O.
//!
//! # Design
//! - `TodoId` wraps a BSON `ObjectId` so ids minted by the store and ids
//!   minted in memory share one representation.
//! - `CreateTodoRequest` is the loose wire shape; `NewTodo` is the validated
//!   value repositories accept.

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::{CreateTodoRequest, CreatedTodo, NewTodo, Todo, TodoId};
pub use validation::{require_title, validate_title};
