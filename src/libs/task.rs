//! Task records exchanged with the task API.
//!
//! The server owns `id` and `created_at`; the client only ever sends the
//! editable fields through [`NewTask`] and [`TaskUpdate`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque server-assigned identifier.
///
/// The API may hand ids out as JSON numbers or strings, so both are kept
/// as they came and written back verbatim into item URLs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(id) => write!(f, "{}", id),
            TaskId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl TaskId {
    /// Compares by rendered form, so a typed `12` finds a server id sent as
    /// either `12` or `"12"`.
    pub fn matches(&self, other: &TaskId) -> bool {
        match (self, other) {
            (TaskId::Number(a), TaskId::Number(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

/// Typed ids are kept as text so they reach the URL exactly as entered.
impl FromStr for TaskId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TaskId::Text(s.trim().to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Body of a create request. Completion is left to the server default.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

impl NewTask {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Body of a full update request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
