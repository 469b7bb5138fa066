//! In-memory `TodoApi` shared by the controller and render tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use todoterm::api::{ApiError, TodoApi};
use todoterm::config::Config;
use todoterm::{NewTodo, Todo, TodoId, TodoPatch, UserId};

pub const USER_ID: UserId = 42;

pub fn todo(id: TodoId, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        user_id: USER_ID,
        title: title.to_string(),
        completed,
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.api.user_id = USER_ID;
    config
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        body: "internal error".to_string(),
    }
}

/// Stores todos in memory, records every call, and fails or stalls on request
pub struct MockTodoApi {
    todos: Mutex<Vec<Todo>>,
    next_id: AtomicU64,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
    fail_delete_ids: Mutex<HashSet<TodoId>>,
    delete_delays: Mutex<HashMap<TodoId, Duration>>,
    deletes_in_flight: AtomicUsize,
    max_deletes_in_flight: AtomicUsize,
    deletes_finished: AtomicUsize,
    calls: Mutex<Vec<&'static str>>,
}

impl MockTodoApi {
    pub fn new(todos: Vec<Todo>) -> Arc<Self> {
        let next_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            todos: Mutex::new(todos),
            next_id: AtomicU64::new(next_id),
            fail_list: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_delete_ids: Mutex::new(HashSet::new()),
            delete_delays: Mutex::new(HashMap::new()),
            deletes_in_flight: AtomicUsize::new(0),
            max_deletes_in_flight: AtomicUsize::new(0),
            deletes_finished: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn fail_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    pub fn fail_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    pub fn fail_update(&self) {
        self.fail_update.store(true, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, id: TodoId) {
        self.fail_delete_ids.lock().unwrap().insert(id);
    }

    /// Hold the delete for `id` for `delay` of tokio time before answering
    pub fn delay_delete(&self, id: TodoId, delay: Duration) {
        self.delete_delays.lock().unwrap().insert(id, delay);
    }

    /// Most deletes that were awaiting their answer at the same moment
    pub fn max_deletes_in_flight(&self) -> usize {
        self.max_deletes_in_flight.load(Ordering::SeqCst)
    }

    /// Deletes that ran to completion, successful or not
    pub fn deletes_finished(&self) -> usize {
        self.deletes_finished.load(Ordering::SeqCst)
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|call| **call == name).count()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl TodoApi for MockTodoApi {
    async fn list_todos(&self, user_id: UserId) -> Result<Vec<Todo>, ApiError> {
        self.record("list");
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        let todos = self.todos.lock().unwrap();
        Ok(todos.iter().filter(|todo| todo.user_id == user_id).cloned().collect())
    }

    async fn create_todo(&self, draft: &NewTodo) -> Result<Todo, ApiError> {
        self.record("create");
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        let todo = Todo {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: draft.user_id,
            title: draft.title.clone(),
            completed: draft.completed,
        };
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        self.record("delete");
        let in_flight = self.deletes_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_deletes_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        let delay = self.delete_delays.lock().unwrap().get(&id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.deletes_in_flight.fetch_sub(1, Ordering::SeqCst);
        self.deletes_finished.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete_ids.lock().unwrap().contains(&id) {
            return Err(server_error());
        }
        self.todos.lock().unwrap().retain(|todo| todo.id != id);
        Ok(())
    }

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, ApiError> {
        self.record("update");
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        let mut todos = self.todos.lock().unwrap();
        let todo = todos.iter_mut().find(|todo| todo.id == id).ok_or(ApiError::Status {
            status: 404,
            body: "not found".to_string(),
        })?;
        if let Some(title) = &patch.title {
            todo.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }
}
