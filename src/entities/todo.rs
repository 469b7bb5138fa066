use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store. Unique and immutable once persisted.
pub type TodoId = u64;

/// Owner of a todo; every API call is scoped by it.
pub type UserId = u64;

/// A persisted todo as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

/// Payload for creating a todo: a todo without its id.
///
/// The application state also keeps one of these while a creation is in
/// flight so the list can show the optimistic row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

/// Partial update sent with PATCH. Absent fields are left untouched by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl NewTodo {
    /// Build a pending todo for `user_id`. The title is stored trimmed.
    pub fn new(user_id: UserId, title: &str) -> Self {
        Self {
            user_id,
            title: title.trim().to_string(),
            completed: false,
        }
    }
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}
