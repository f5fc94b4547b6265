use crate::api::ApiConfig;
use crate::libs::messages::Message;
use crate::libs::task::TaskId;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    #[arg(required = true)]
    id: TaskId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(delete_args: DeleteArgs, api: &ApiConfig) -> Result<()> {
    if !delete_args.yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmDelete(delete_args.id.to_string()).to_string())
            .default(false)
            .interact()?
    {
        return Ok(());
    }

    let mut controller = super::controller(api);
    if controller.delete(&delete_args.id).await.is_applied() {
        View::tasks(controller.tasks(), controller.is_loading());
    }

    Ok(())
}
