use crate::api::{ApiConfig, TaskApi, TasksClient};
use crate::libs::messages::Message;
use crate::libs::task::TaskId;
use crate::libs::view::View;
use crate::msg_error;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Id of the task to show
    #[arg(required = true)]
    id: TaskId,
}

pub async fn cmd(show_args: ShowArgs, api: &ApiConfig) -> Result<()> {
    match TasksClient::new(api).get(&show_args.id).await {
        Ok(task) => View::task(&task),
        Err(e) => {
            tracing::debug!(error = %e, "fetching task failed");
            msg_error!(Message::ServerConnectionFailed);
        }
    }

    Ok(())
}
