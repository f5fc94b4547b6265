//! Display implementation for taskpad messages.
//!
//! All user-facing text lives here, so the controller, the views and the
//! commands only ever deal with typed [`Message`] values.
//!
//! ```rust
//! use taskpad::libs::messages::Message;
//!
//! assert_eq!(Message::TaskDeleted.to_string(), "Task deleted.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === APP MESSAGES ===
            Message::AppHeader => "🚀 Task Manager".to_string(),
            Message::AppTagline => "Organize your day efficiently".to_string(),
            Message::CreateTaskHeader => "Create Task".to_string(),
            Message::EditTaskHeader => "Edit Task".to_string(),

            // === TASK LIST MESSAGES ===
            Message::LoadingTasks => "Loading tasks...".to_string(),
            Message::NoTasksYet => "No tasks yet. Start by adding one!".to_string(),
            Message::TasksCount(count) => format!("{} task(s)", count),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),

            // === TASK MUTATION MESSAGES ===
            Message::TaskCreated => "New task added!".to_string(),
            Message::TaskUpdated => "Task updated successfully!".to_string(),
            Message::TaskDeleted => "Task deleted.".to_string(),
            Message::TaskCompleted => "Task completed! 🎉".to_string(),
            Message::TaskMarkedPending => "Task marked as pending.".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::EditCancelled => "Edit cancelled.".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TitleEmpty => "Title cannot be empty!".to_string(),

            // === API FAILURE MESSAGES ===
            Message::ServerConnectionFailed => "Error connecting to server!".to_string(),
            Message::TaskSaveFailed => "Failed to save task.".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task.".to_string(),
            Message::TaskStatusUpdateFailed => "Failed to update status.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleApi => "Task API settings".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::DataStoragePathError => "Failed to resolve data storage path".to_string(),

            // === PROMPTS ===
            Message::PromptApiUrl => "Enter the task API URL".to_string(),
            Message::PromptTaskTitle => "What needs to be done?".to_string(),
            Message::PromptTaskDescription => "Add a description (optional)".to_string(),
            Message::PromptSelectAction => "What would you like to do?".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptConfirmSave => "Save changes?".to_string(),
            Message::PromptConfirmDelete(title) => format!("Delete task '{}'?", title),

            // === SHELL ACTIONS ===
            Message::ActionAdd => "Add task".to_string(),
            Message::ActionEdit => "Edit task".to_string(),
            Message::ActionToggle => "Toggle completion".to_string(),
            Message::ActionDelete => "Delete task".to_string(),
            Message::ActionRefresh => "Refresh".to_string(),
            Message::ActionQuit => "Quit".to_string(),
        };

        write!(f, "{}", text)
    }
}
