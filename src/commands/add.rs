use crate::api::ApiConfig;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    /// Optional task description
    #[arg(short, long, default_value = "")]
    description: String,
}

pub async fn cmd(add_args: AddArgs, api: &ApiConfig) -> Result<()> {
    let mut controller = super::controller(api);
    controller.set_title(&add_args.title);
    controller.set_description(&add_args.description);

    if controller.submit().await.is_applied() {
        View::tasks(controller.tasks(), controller.is_loading());
    }

    Ok(())
}
