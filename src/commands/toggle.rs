use crate::api::ApiConfig;
use crate::libs::task::TaskId;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Id of the task to flip
    #[arg(required = true)]
    id: TaskId,
}

pub async fn cmd(toggle_args: ToggleArgs, api: &ApiConfig) -> Result<()> {
    let mut controller = super::controller(api);
    let Some(task) = super::find_task(&mut controller, &toggle_args.id).await else {
        return Ok(());
    };

    if controller.toggle_complete(&task.id, task.completed).await.is_applied() {
        View::tasks(controller.tasks(), controller.is_loading());
    }

    Ok(())
}
