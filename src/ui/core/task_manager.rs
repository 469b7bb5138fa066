use super::actions::Action;
use crate::api::{ApiError, TodoApi};
use crate::entities::{NewTodo, TodoId, TodoPatch, UserId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::{self, JoinHandle, JoinSet};

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

/// Runs API calls and timers off the UI loop. Every task reports back by
/// sending exactly one [`Action`] on the channel returned from [`TaskManager::new`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn `future` and forward the action it resolves to
    fn spawn<F>(&mut self, description: String, future: F) -> TaskId
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(action);
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                handle,
                description,
                started_at: Instant::now(),
            },
        );
        task_id
    }

    /// Fetch the todo list for `user_id`
    pub fn spawn_load(&mut self, api: Arc<dyn TodoApi>, user_id: UserId) -> TaskId {
        self.spawn(format!("Load todos for user {}", user_id), async move {
            Action::TodosLoaded(api.list_todos(user_id).await)
        })
    }

    pub fn spawn_create(&mut self, api: Arc<dyn TodoApi>, draft: NewTodo) -> TaskId {
        self.spawn(format!("Create todo '{}'", draft.title), async move {
            Action::TodoCreated(api.create_todo(&draft).await)
        })
    }

    pub fn spawn_delete(&mut self, api: Arc<dyn TodoApi>, id: TodoId) -> TaskId {
        self.spawn(format!("Delete todo {}", id), async move {
            Action::TodoDeleted {
                id,
                result: api.delete_todo(id).await,
            }
        })
    }

    pub fn spawn_toggle(&mut self, api: Arc<dyn TodoApi>, id: TodoId, patch: TodoPatch) -> TaskId {
        self.spawn(format!("Toggle todo {}", id), async move {
            Action::TodoToggled {
                id,
                result: api.update_todo(id, &patch).await,
            }
        })
    }

    /// Delete every id concurrently and report once all of them have settled.
    ///
    /// A failing delete never stops the others. Results come back in the order
    /// of `ids`, whatever order the requests finished in. The deletes live in a
    /// [`JoinSet`], so aborting this task aborts the requests still running.
    pub fn spawn_clear_completed(&mut self, api: Arc<dyn TodoApi>, ids: Vec<TodoId>) -> TaskId {
        let description = format!("Clear {} completed todos", ids.len());
        self.spawn(description, async move {
            let mut deletes = JoinSet::new();
            let mut positions: HashMap<task::Id, (usize, TodoId)> = HashMap::with_capacity(ids.len());
            for (position, id) in ids.into_iter().enumerate() {
                let api = api.clone();
                let handle = deletes.spawn(async move { api.delete_todo(id).await });
                positions.insert(handle.id(), (position, id));
            }

            let mut settled = Vec::with_capacity(positions.len());
            while let Some(joined) = deletes.join_next_with_id().await {
                let (task_id, result) = match joined {
                    Ok((task_id, result)) => (task_id, result),
                    Err(e) => (e.id(), Err(ApiError::Network(format!("delete task failed: {}", e)))),
                };
                if let Some(&(position, id)) = positions.get(&task_id) {
                    settled.push((position, id, result));
                }
            }

            settled.sort_by_key(|(position, _, _)| *position);
            Action::CompletedCleared(settled.into_iter().map(|(_, id, result)| (id, result)).collect())
        })
    }

    /// Fire [`Action::ErrorExpired`] for `generation` after `delay`
    pub fn spawn_error_expiry(&mut self, generation: u64, delay: Duration) -> TaskId {
        self.spawn(format!("Expire error #{}", generation), async move {
            tokio::time::sleep(delay).await;
            Action::ErrorExpired(generation)
        })
    }

    /// Drop bookkeeping for tasks that have finished. Returns their
    /// descriptions along with how long each one ran.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(String, Duration)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id))
            .map(|task| (task.description, task.started_at.elapsed()))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
