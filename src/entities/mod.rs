//! Data shapes shared by the API client, the application state and the UI.

pub mod filter;
pub mod todo;

pub use filter::FilterStatus;
pub use todo::{NewTodo, Todo, TodoId, TodoPatch, UserId};
