//! Reusable UI components

pub mod common;
pub mod dialog_component;
pub mod error_banner;
pub mod footer_component;
pub mod new_todo_input;
pub mod status_bar;
pub mod todo_item_component;
pub mod todo_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use error_banner::ErrorBanner;
pub use footer_component::FooterComponent;
pub use new_todo_input::NewTodoInput;
pub use status_bar::StatusBar;
pub use todo_item_component::TodoItem;
pub use todo_list_component::TodoListComponent;
