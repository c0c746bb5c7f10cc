//! Domain DTOs for the todo API.
//!
//! # Design
//! `CreateTodoRequest` is the raw, unvalidated shape of a `POST /todos` body.
//! It only becomes a `NewTodo` through `NewTodo::try_from`, which applies the
//! title rule, so every `NewTodo` (and every `Todo` built from one) carries a
//! non-empty title. Optional fields stay `None` when the caller omits them and
//! are skipped on serialization, so a todo reads back with exactly the fields
//! it was created with.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;
use crate::validation::validate_title;

/// Store-assigned identifier of a todo. Rendered as 24 lowercase hex chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(ObjectId);

impl TodoId {
    /// Generate a fresh id the same way the document store does.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for TodoId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for TodoId {
    type Err = bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

// ObjectId's own serde impl emits extended JSON (`{"$oid": ..}`); the API
// wants the bare hex string.
impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single persisted todo, as returned by `GET /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for creating a new todo. Nothing is enforced here; see
/// `NewTodo::try_from`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A validated todo that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
    pub completed: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl NewTodo {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Attach the id the store assigned on insert.
    pub fn with_id(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl TryFrom<CreateTodoRequest> for NewTodo {
    type Error = ValidationError;

    fn try_from(request: CreateTodoRequest) -> Result<Self, Self::Error> {
        validate_title(&request)?;
        let CreateTodoRequest {
            title,
            completed,
            created_at,
            updated_at,
        } = request;
        Ok(Self {
            title: title.unwrap_or_default(),
            completed,
            created_at,
            updated_at,
        })
    }
}

/// Response body of a successful `POST /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedTodo {
    pub id: TodoId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_serializes_as_bare_hex() {
        let id: TodoId = "61e9317c1ba3d4a5b3c2e9f0".parse().unwrap();
        let json = serde_json::to_value(CreatedTodo { id }).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "61e9317c1ba3d4a5b3c2e9f0" }));
    }

    #[test]
    fn generated_todo_id_is_24_hex_chars() {
        let hex = TodoId::generate().to_hex();
        assert_eq!(hex.len(), 24);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn todo_id_rejects_non_hex() {
        assert!("not-an-object-id".parse::<TodoId>().is_err());
        let result: Result<CreatedTodo, _> = serde_json::from_str(r#"{"id":"zz"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_reads_camel_case_fields() {
        let input: CreateTodoRequest = serde_json::from_str(
            r#"{"title":"Todo 1","completed":false,"createdAt":"2022-01-20T09:54:48.139Z","updatedAt":"2022-01-20T09:54:48.139Z"}"#,
        )
        .unwrap();
        assert_eq!(input.title.as_deref(), Some("Todo 1"));
        assert_eq!(input.completed, Some(false));
        assert_eq!(input.created_at.as_deref(), Some("2022-01-20T09:54:48.139Z"));
        assert_eq!(input.updated_at.as_deref(), Some("2022-01-20T09:54:48.139Z"));
    }

    #[test]
    fn create_request_treats_null_title_as_absent() {
        let input: CreateTodoRequest = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(input.title.is_none());
    }

    #[test]
    fn create_request_ignores_unknown_fields() {
        let input: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"x","priority":3}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("x"));
    }

    #[test]
    fn todo_omits_absent_optional_fields() {
        let todo = NewTodo::try_from(CreateTodoRequest {
            title: Some("Only a title".to_string()),
            ..Default::default()
        })
        .unwrap()
        .with_id("61e9317c1ba3d4a5b3c2e9f0".parse().unwrap());

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "61e9317c1ba3d4a5b3c2e9f0", "title": "Only a title" })
        );
    }

    #[test]
    fn new_todo_keeps_every_submitted_field() {
        let todo = NewTodo::try_from(CreateTodoRequest {
            title: Some("Todo 2".to_string()),
            completed: Some(true),
            created_at: Some("2022-02-20T09:54:48.139Z".to_string()),
            updated_at: Some("2022-02-20T09:54:48.139Z".to_string()),
        })
        .unwrap();
        assert_eq!(todo.title(), "Todo 2");
        assert_eq!(todo.completed, Some(true));
        assert_eq!(todo.created_at.as_deref(), Some("2022-02-20T09:54:48.139Z"));
        assert_eq!(todo.updated_at.as_deref(), Some("2022-02-20T09:54:48.139Z"));
    }
}
