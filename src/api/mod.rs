//! API abstraction layer for the remote todos store.
//!
//! This module defines the interface the controller talks to, along with the
//! error type every operation fails with. The HTTP implementation lives in
//! [`http`]; tests substitute their own implementation of [`TodoApi`].

use async_trait::async_trait;

use crate::entities::{NewTodo, Todo, TodoId, TodoPatch, UserId};

pub mod factory;
pub mod http;

pub use factory::create_api;
pub use http::HttpTodoApi;

/// Errors returned by API operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// The four operations the application needs from the todos store.
///
/// Each call is a single round trip. There is no retry, batching or caching;
/// callers decide what a failure means for the UI.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch every todo owned by `user_id`.
    async fn list_todos(&self, user_id: UserId) -> Result<Vec<Todo>, ApiError>;

    /// Persist a new todo and return the stored copy with its assigned id.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ApiError>;

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError>;

    /// Apply a partial update and return the updated todo.
    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, ApiError>;
}
