//! Application state and its transitions.
//!
//! [`AppState`] is everything the screen shows. It is mutated only through the
//! `begin_*`/`finish_*` pairs below, which never touch the network or the
//! terminal: the controller performs the API call between the two halves and
//! the renderer reads the derived views. That keeps every rule here testable
//! with plain unit tests.

use std::fmt;

use crate::api::ApiError;
use crate::constants::{
    ERROR_EMPTY_TITLE, ERROR_UNABLE_TO_ADD, ERROR_UNABLE_TO_DELETE, ERROR_UNABLE_TO_LOAD, ERROR_UNABLE_TO_UPDATE,
};
use crate::entities::{FilterStatus, NewTodo, Todo, TodoId, TodoPatch, UserId};

/// User-facing error shown in the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnableToLoad,
    UnableToAdd,
    UnableToDelete,
    UnableToUpdate,
    /// Raised before any request when the submitted title is blank
    EmptyTitle,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::UnableToLoad => ERROR_UNABLE_TO_LOAD,
            Self::UnableToAdd => ERROR_UNABLE_TO_ADD,
            Self::UnableToDelete => ERROR_UNABLE_TO_DELETE,
            Self::UnableToUpdate => ERROR_UNABLE_TO_UPDATE,
            Self::EmptyTitle => ERROR_EMPTY_TITLE,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The single error slot. `generation` identifies which write put it there, so
/// a dismissal timer scheduled for an older error cannot clear a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBanner {
    pub kind: ErrorKind,
    pub generation: u64,
}

/// Lifecycle of a single row on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Idle,
    /// Optimistic row for a todo the server has not confirmed yet
    Creating,
    Deleting,
    Toggling,
}

impl RowStatus {
    pub fn is_loading(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub filter: FilterStatus,
    pub error: Option<ErrorBanner>,
    pub pending_create: Option<NewTodo>,
    pub pending_delete: Option<TodoId>,
    pub pending_toggle: Option<TodoId>,
    pub bulk_delete_in_progress: bool,
    /// Current text of the new-todo input
    pub input: String,
    /// True until the initial list request settles
    pub loading: bool,
    error_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    // ---- error slot ----

    /// Overwrite the error slot and return the generation of the new error
    pub fn set_error(&mut self, kind: ErrorKind) -> u64 {
        self.error_generation += 1;
        self.error = Some(ErrorBanner {
            kind,
            generation: self.error_generation,
        });
        self.error_generation
    }

    /// Number of errors raised so far; changes every time the slot is written
    pub fn error_generation(&self) -> u64 {
        self.error_generation
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(|banner| banner.kind.message())
    }

    /// Close the banner on user request
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Clear the banner if it still shows the error raised at `generation`.
    /// Returns whether anything was cleared.
    pub fn expire_error(&mut self, generation: u64) -> bool {
        match self.error {
            Some(banner) if banner.generation == generation => {
                self.error = None;
                true
            }
            _ => false,
        }
    }

    // ---- initial load ----

    pub fn finish_load(&mut self, result: Result<Vec<Todo>, ApiError>) {
        self.loading = false;
        match result {
            Ok(todos) => self.todos = todos,
            Err(_) => {
                self.set_error(ErrorKind::UnableToLoad);
            }
        }
    }

    // ---- creation ----

    /// Validate the input and mark a creation as in flight.
    ///
    /// Returns the payload to send, or `None` when nothing should be sent:
    /// either a creation is already running or the title is blank (which also
    /// raises [`ErrorKind::EmptyTitle`]).
    pub fn begin_create(&mut self, user_id: UserId) -> Option<NewTodo> {
        if self.pending_create.is_some() {
            return None;
        }

        if self.input.trim().is_empty() {
            self.set_error(ErrorKind::EmptyTitle);
            return None;
        }

        let draft = NewTodo::new(user_id, &self.input);
        self.pending_create = Some(draft.clone());
        Some(draft)
    }

    pub fn finish_create(&mut self, result: Result<Todo, ApiError>) {
        match result {
            Ok(todo) => {
                self.todos.push(todo);
                self.input.clear();
            }
            Err(_) => {
                self.set_error(ErrorKind::UnableToAdd);
            }
        }
        self.pending_create = None;
    }

    // ---- deletion ----

    /// Mark `id` as being deleted. Returns `false` if another deletion is
    /// still in flight or the row already has a request of its own, in which
    /// case no request should be sent.
    pub fn begin_delete(&mut self, id: TodoId) -> bool {
        if self.pending_delete.is_some() || self.row_busy(id) {
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    /// Apply the outcome of deleting `id`. Removing an id that is not in the
    /// list leaves the list untouched.
    pub fn finish_delete(&mut self, id: TodoId, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.todos.retain(|todo| todo.id != id),
            Err(_) => {
                self.set_error(ErrorKind::UnableToDelete);
            }
        }
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
    }

    // ---- completion toggle ----

    /// Mark `id` as being toggled and return the patch that flips it.
    pub fn begin_toggle(&mut self, id: TodoId) -> Option<TodoPatch> {
        if self.pending_toggle.is_some() || self.row_busy(id) {
            return None;
        }
        let todo = self.todos.iter().find(|todo| todo.id == id)?;
        let patch = TodoPatch::completed(!todo.completed);
        self.pending_toggle = Some(id);
        Some(patch)
    }

    pub fn finish_toggle(&mut self, id: TodoId, result: Result<Todo, ApiError>) {
        match result {
            Ok(updated) => {
                if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
                    *todo = updated;
                }
            }
            Err(_) => {
                self.set_error(ErrorKind::UnableToUpdate);
            }
        }
        if self.pending_toggle == Some(id) {
            self.pending_toggle = None;
        }
    }

    // ---- bulk clear ----

    /// Start clearing every completed todo and return the ids to delete.
    /// Returns an empty list (and changes nothing) when a clear is already
    /// running or nothing is completed.
    pub fn begin_clear_completed(&mut self) -> Vec<TodoId> {
        if self.bulk_delete_in_progress {
            return Vec::new();
        }

        let ids: Vec<TodoId> = self.todos.iter().filter(|todo| todo.completed).map(|todo| todo.id).collect();
        if !ids.is_empty() {
            self.bulk_delete_in_progress = true;
        }
        ids
    }

    /// Reconcile once every delete of a bulk clear has settled.
    ///
    /// Each success removes its own id; each failure writes the error slot,
    /// so with several failures the last one in `results` is what remains.
    pub fn finish_clear_completed(&mut self, results: Vec<(TodoId, Result<(), ApiError>)>) {
        for (id, result) in results {
            match result {
                Ok(()) => self.todos.retain(|todo| todo.id != id),
                Err(_) => {
                    self.set_error(ErrorKind::UnableToDelete);
                }
            }
        }
        self.bulk_delete_in_progress = false;
    }

    // ---- input & filter ----

    pub fn set_filter(&mut self, filter: FilterStatus) {
        self.filter = filter;
    }

    /// Whether the new-todo input accepts edits
    pub fn input_enabled(&self) -> bool {
        self.pending_create.is_none()
    }

    pub fn push_input(&mut self, c: char) {
        if self.input_enabled() {
            self.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        if self.input_enabled() {
            self.input.pop();
        }
    }

    // ---- derived views ----

    /// Todos visible under the current filter, in list order
    pub fn filtered_todos(&self) -> Vec<&Todo> {
        self.filtered_by(self.filter)
    }

    pub fn filtered_by(&self, filter: FilterStatus) -> Vec<&Todo> {
        self.todos.iter().filter(|todo| filter.matches(todo)).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    /// Number of todos not yet completed
    pub fn remaining_count(&self) -> usize {
        self.todos.len() - self.completed_count()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|todo| todo.completed)
    }

    /// The footer is only shown once there is at least one todo
    pub fn show_footer(&self) -> bool {
        !self.todos.is_empty()
    }

    pub fn can_clear_completed(&self) -> bool {
        self.has_completed() && !self.bulk_delete_in_progress
    }

    pub fn row_status(&self, todo: &Todo) -> RowStatus {
        if self.pending_delete == Some(todo.id) || (self.bulk_delete_in_progress && todo.completed) {
            RowStatus::Deleting
        } else if self.pending_toggle == Some(todo.id) {
            RowStatus::Toggling
        } else {
            RowStatus::Idle
        }
    }

    /// Whether the row for `id` is waiting on a request. Unknown ids are never busy.
    fn row_busy(&self, id: TodoId) -> bool {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .is_some_and(|todo| self.row_status(todo).is_loading())
    }

    /// A creation, deletion or bulk clear is in flight
    pub fn is_busy(&self) -> bool {
        self.pending_create.is_some() || self.pending_delete.is_some() || self.bulk_delete_in_progress
    }

    /// Focus belongs on the new-todo input whenever nothing is in flight
    pub fn should_focus_input(&self) -> bool {
        !self.is_busy()
    }
}
