pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod shell;
pub mod show;
pub mod toggle;

use crate::api::{ApiConfig, TasksClient};
use crate::libs::config::Config;
use crate::libs::controller::TaskController;
use crate::libs::messages::Message;
use crate::libs::notifier::ConsoleNotifier;
use crate::libs::task::{Task, TaskId};
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

pub type ConsoleController = TaskController<TasksClient, ConsoleNotifier>;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List all tasks")]
    List,
    #[command(about = "Create a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Edit a task's title and description", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Flip a task between completed and pending", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show a single task", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Open an interactive task screen")]
    Shell,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Task collection URL, overrides TASKPAD_API_URL and the stored config
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let flag = cli.api_url.as_deref();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List => list::cmd(&Self::api_config(flag)?).await,
            Commands::Add(args) => add::cmd(args, &Self::api_config(flag)?).await,
            Commands::Edit(args) => edit::cmd(args, &Self::api_config(flag)?).await,
            Commands::Toggle(args) => toggle::cmd(args, &Self::api_config(flag)?).await,
            Commands::Delete(args) => delete::cmd(args, &Self::api_config(flag)?).await,
            Commands::Show(args) => show::cmd(args, &Self::api_config(flag)?).await,
            Commands::Shell => shell::cmd(&Self::api_config(flag)?).await,
        }
    }

    fn api_config(flag: Option<&str>) -> Result<ApiConfig> {
        let config = Config::read()?;
        Ok(ApiConfig::resolve(flag, config.api.as_ref()))
    }
}

pub fn controller(api: &ApiConfig) -> ConsoleController {
    TaskController::new(TasksClient::new(api), ConsoleNotifier)
}

/// Refreshes and resolves `id` against the fresh snapshot, reporting a miss.
pub async fn find_task(controller: &mut ConsoleController, id: &TaskId) -> Option<Task> {
    if !controller.refresh().await.is_applied() {
        return None;
    }
    let task = controller.find(id).cloned();
    if task.is_none() {
        msg_error!(Message::TaskNotFoundWithId(id.to_string()));
    }
    task
}

/// Prompts for the drafts, pre-filled with what the controller holds.
pub fn prompt_drafts(controller: &mut ConsoleController) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(controller.title())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(controller.description())
        .allow_empty(true)
        .interact_text()?;

    controller.set_title(&title);
    controller.set_description(&description);
    Ok(())
}
