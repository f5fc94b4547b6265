//! Client-side task state and its synchronization with the server.
//!
//! [`TaskController`] owns everything the task screen shows: the task
//! snapshot, the form drafts, the edit session and the loading flag. It
//! never patches the snapshot locally. Every successful mutation is followed
//! by [`TaskController::refresh`], which replaces the whole collection with
//! what the server returns.
//!
//! Failures are reported through the [`Notifier`] and leave the controller in
//! a state the user can act on again; nothing here retries.
//!
//! ```rust,no_run
//! use taskpad::api::{ApiConfig, TasksClient};
//! use taskpad::libs::controller::TaskController;
//! use taskpad::libs::notifier::ConsoleNotifier;
//!
//! # async fn run() {
//! let client = TasksClient::new(&ApiConfig::default());
//! let mut controller = TaskController::new(client, ConsoleNotifier);
//! controller.refresh().await;
//!
//! controller.set_title("Buy milk");
//! controller.submit().await;
//! # }
//! ```

use crate::api::TaskApi;
use crate::libs::messages::Message;
use crate::libs::notifier::Notifier;
use crate::libs::task::{NewTask, Task, TaskId, TaskUpdate};

/// How a controller operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the request (or the local change was made).
    Applied,
    /// Local validation stopped the request before it was sent.
    Rejected,
    /// The request failed in transport or with a non-2xx status.
    Failed,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

pub struct TaskController<A, N> {
    api: A,
    notifier: N,
    tasks: Vec<Task>,
    title: String,
    description: String,
    editing: Option<Task>,
    loading: bool,
}

impl<A: TaskApi, N: Notifier> TaskController<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            tasks: Vec::new(),
            title: String::new(),
            description: String::new(),
            editing: None,
            loading: false,
        }
    }

    /// Replaces the task snapshot with the server's collection.
    ///
    /// On failure the previous snapshot is kept.
    pub async fn refresh(&mut self) -> Outcome {
        self.loading = true;
        let result = self.api.list().await;
        self.loading = false;

        match result {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "task snapshot replaced");
                self.tasks = tasks;
                Outcome::Applied
            }
            Err(e) => {
                tracing::debug!(error = %e, "refreshing tasks failed");
                self.notifier.error(Message::ServerConnectionFailed);
                Outcome::Failed
            }
        }
    }

    /// Saves the drafts: an update while an edit session is active, a create otherwise.
    ///
    /// A blank title is rejected without contacting the server. On failure
    /// the drafts and the edit session are left as they were so the user can
    /// retry.
    pub async fn submit(&mut self) -> Outcome {
        if self.title.trim().is_empty() {
            self.notifier.warning(Message::TitleEmpty);
            return Outcome::Rejected;
        }

        let saved = match &self.editing {
            Some(task) => {
                let update = TaskUpdate {
                    title: self.title.clone(),
                    description: self.description.clone(),
                    completed: task.completed,
                };
                self.api.update(&task.id, &update).await.map(|()| Message::TaskUpdated)
            }
            None => {
                let new_task = NewTask::new(&self.title, &self.description);
                self.api.create(&new_task).await.map(|()| Message::TaskCreated)
            }
        };

        match saved {
            Ok(message) => {
                self.editing = None;
                self.clear_drafts();
                self.notifier.success(message);
                self.refresh().await;
                Outcome::Applied
            }
            Err(e) => {
                tracing::debug!(error = %e, "saving task failed");
                self.notifier.error(Message::TaskSaveFailed);
                Outcome::Failed
            }
        }
    }

    pub async fn delete(&mut self, id: &TaskId) -> Outcome {
        match self.api.delete(id).await {
            Ok(()) => {
                self.notifier.info(Message::TaskDeleted);
                self.refresh().await;
                Outcome::Applied
            }
            Err(e) => {
                tracing::debug!(error = %e, %id, "deleting task failed");
                self.notifier.error(Message::TaskDeleteFailed);
                Outcome::Failed
            }
        }
    }

    /// Asks the server to flip the completion flag of `id`.
    ///
    /// The notification is chosen from `completed`, the value the caller saw
    /// before toggling, not from the server's reply.
    pub async fn toggle_complete(&mut self, id: &TaskId, completed: bool) -> Outcome {
        match self.api.toggle(id).await {
            Ok(()) => {
                if completed {
                    self.notifier.info(Message::TaskMarkedPending);
                } else {
                    self.notifier.success(Message::TaskCompleted);
                }
                self.refresh().await;
                Outcome::Applied
            }
            Err(e) => {
                tracing::debug!(error = %e, %id, "toggling task failed");
                self.notifier.error(Message::TaskStatusUpdateFailed);
                Outcome::Failed
            }
        }
    }

    /// Opens an edit session on `task` and loads its fields into the drafts.
    pub fn begin_edit(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description.clone();
        self.editing = Some(task.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.clear_drafts();
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    /// Looks `id` up in the current snapshot, matching on the rendered id.
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id.matches(id))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn clear_drafts(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}
