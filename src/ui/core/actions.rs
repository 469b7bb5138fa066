use crate::api::ApiError;
use crate::entities::{FilterStatus, Todo, TodoId};

/// Which widget receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone)]
pub enum Action {
    // New-todo input
    InputChar(char),
    InputBackspace,
    SubmitNewTodo,
    FocusInput,
    FocusList,

    // Navigation
    NextTodo,
    PreviousTodo,
    SetFilter(FilterStatus),
    NextFilter,
    PreviousFilter,

    // Todo operations
    ToggleTodo(TodoId),
    DeleteTodo(TodoId),
    ClearCompleted,

    // Results of background operations
    TodosLoaded(Result<Vec<Todo>, ApiError>),
    TodoCreated(Result<Todo, ApiError>),
    TodoDeleted {
        id: TodoId,
        result: Result<(), ApiError>,
    },
    TodoToggled {
        id: TodoId,
        result: Result<Todo, ApiError>,
    },
    CompletedCleared(Vec<(TodoId, Result<(), ApiError>)>),

    // Error banner
    DismissError,
    /// Dismissal timer fired for the error raised at this generation
    ErrorExpired(u64),

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
