//! Edit command: opens an edit session on one task and saves it.
//!
//! Fields passed as flags replace the drafts directly; with no flags the user
//! is prompted, starting from the task's current values.

use crate::api::ApiConfig;
use crate::libs::task::TaskId;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    #[arg(required = true)]
    id: TaskId,

    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New description
    #[arg(short, long)]
    description: Option<String>,
}

pub async fn cmd(edit_args: EditArgs, api: &ApiConfig) -> Result<()> {
    let mut controller = super::controller(api);
    let Some(task) = super::find_task(&mut controller, &edit_args.id).await else {
        return Ok(());
    };

    controller.begin_edit(&task);
    View::header(controller.editing());

    if edit_args.title.is_none() && edit_args.description.is_none() {
        super::prompt_drafts(&mut controller)?;
    } else {
        if let Some(title) = &edit_args.title {
            controller.set_title(title);
        }
        if let Some(description) = &edit_args.description {
            controller.set_description(description);
        }
    }

    if controller.submit().await.is_applied() {
        View::tasks(controller.tasks(), controller.is_loading());
    }

    Ok(())
}
