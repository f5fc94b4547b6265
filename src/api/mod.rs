//! Client side of the task REST API.
//!
//! [`TaskApi`] is the seam the controller talks through; [`TasksClient`] is
//! the reqwest implementation used by the binary. Tests and embedders can
//! plug in their own implementation.
//!
//! ```rust,no_run
//! use taskpad::api::{ApiConfig, TaskApi, TasksClient};
//!
//! # async fn run() -> Result<(), taskpad::api::ApiError> {
//! let client = TasksClient::new(&ApiConfig::default());
//! for task in client.list().await? {
//!     println!("{} {}", task.id, task.title);
//! }
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{NewTask, Task, TaskId, TaskUpdate};
use reqwest::{Method, StatusCode};
use thiserror::Error;

pub mod tasks;

pub use tasks::{ApiConfig, TasksClient};

/// Any failed exchange with the task API.
///
/// Callers treat every variant the same way; the split only exists so
/// logs say what actually went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request could not be sent: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("{method} {url} returned {status}")]
    Status { method: Method, url: String, status: StatusCode },

    /// A 2xx from `list` or `get` whose body is not a task.
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Operations exposed by the task API.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// `GET /tasks/`: the whole collection, in server order.
    async fn list(&self) -> Result<Vec<Task>, ApiError>;

    /// `GET /tasks/{id}/`
    async fn get(&self, id: &TaskId) -> Result<Task, ApiError>;

    /// `POST /tasks/` with `{title, description}`. Any 2xx counts as saved;
    /// the reply body is not read.
    async fn create(&self, task: &NewTask) -> Result<(), ApiError>;

    /// `PUT /tasks/{id}/` with `{title, description, completed}`.
    async fn update(&self, id: &TaskId, task: &TaskUpdate) -> Result<(), ApiError>;

    /// `DELETE /tasks/{id}/`
    async fn delete(&self, id: &TaskId) -> Result<(), ApiError>;

    /// `PATCH /tasks/{id}/` without a body. The server flips `completed`.
    async fn toggle(&self, id: &TaskId) -> Result<(), ApiError>;
}
