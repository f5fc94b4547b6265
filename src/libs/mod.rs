//! Core library modules for taskpad.
//!
//! - **State**: the task controller and the task records it holds
//! - **Output**: typed messages, notifiers, table views
//! - **Settings**: configuration and the per-user data directory
//!
//! ```rust,no_run
//! use taskpad::api::{ApiConfig, TasksClient};
//! use taskpad::libs::controller::TaskController;
//! use taskpad::libs::notifier::ConsoleNotifier;
//! use taskpad::libs::view::View;
//!
//! # async fn run() {
//! let mut controller = TaskController::new(TasksClient::new(&ApiConfig::default()), ConsoleNotifier);
//! controller.refresh().await;
//! View::tasks(controller.tasks(), controller.is_loading());
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod data_storage;
pub mod messages;
pub mod notifier;
pub mod task;
pub mod view;
