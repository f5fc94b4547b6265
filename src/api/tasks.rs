use super::{ApiError, TaskApi};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task, TaskId, TaskUpdate};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/tasks/";
pub const API_URL_ENV: &str = "TASKPAD_API_URL";

#[derive(Debug, Clone)]
pub struct TasksClient {
    client: Client,
    config: ApiConfig,
}

impl TaskApi for TasksClient {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.config.collection_url();
        let res = self.send::<()>(Method::GET, &url, None).await?;
        Self::decode(res).await
    }

    async fn get(&self, id: &TaskId) -> Result<Task, ApiError> {
        let url = self.config.item_url(id);
        let res = self.send::<()>(Method::GET, &url, None).await?;
        Self::decode(res).await
    }

    async fn create(&self, task: &NewTask) -> Result<(), ApiError> {
        let url = self.config.collection_url();
        self.send(Method::POST, &url, Some(task)).await?;
        Ok(())
    }

    async fn update(&self, id: &TaskId, task: &TaskUpdate) -> Result<(), ApiError> {
        let url = self.config.item_url(id);
        self.send(Method::PUT, &url, Some(task)).await?;
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), ApiError> {
        let url = self.config.item_url(id);
        self.send::<()>(Method::DELETE, &url, None).await?;
        Ok(())
    }

    async fn toggle(&self, id: &TaskId) -> Result<(), ApiError> {
        let url = self.config.item_url(id);
        self.send::<()>(Method::PATCH, &url, None).await?;
        Ok(())
    }
}

impl TasksClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    async fn send<B: Serialize + ?Sized>(&self, method: Method, url: &str, body: Option<&B>) -> Result<Response, ApiError> {
        tracing::debug!(%method, url, "sending task API request");

        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let res = request.send().await.map_err(ApiError::Transport)?;
        let status = res.status();
        tracing::debug!(%method, url, %status, "task API responded");

        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status,
            });
        }
        Ok(res)
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        res.json::<T>().await.map_err(ApiError::Decode)
    }
}

/// Where the task collection lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Collection URL, e.g. `http://127.0.0.1:8000/tasks/`.
    pub api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim().to_string(),
        }
    }

    /// Picks the collection URL from, in order: the command-line flag, the
    /// `TASKPAD_API_URL` variable, the stored config, the built-in default.
    pub fn resolve(flag: Option<&str>, stored: Option<&ApiConfig>) -> Self {
        if let Some(url) = flag.filter(|url| !url.trim().is_empty()) {
            return Self::new(url);
        }
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return Self::new(&url);
            }
        }
        stored.cloned().unwrap_or_default()
    }

    /// The collection URL, always ending in `/`.
    pub fn collection_url(&self) -> String {
        if self.api_url.ends_with('/') {
            self.api_url.clone()
        } else {
            format!("{}/", self.api_url)
        }
    }

    pub fn item_url(&self, id: &TaskId) -> String {
        format!("{}{}/", self.collection_url(), id)
    }

    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Task API".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleApi);
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(config.api_url)
            .interact_text()?;
        Ok(Self::new(&api_url))
    }
}
