//! Interactive task screen.
//!
//! Keeps one controller alive for the whole session: the list is loaded once
//! on entry and then reconciled after every change, the same way the
//! one-shot commands do it.

use super::ConsoleController;
use crate::api::ApiConfig;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::view::View;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Edit,
    Toggle,
    Delete,
    Refresh,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [Action::Add, Action::Edit, Action::Toggle, Action::Delete, Action::Refresh, Action::Quit];

    fn message(self) -> Message {
        match self {
            Action::Add => Message::ActionAdd,
            Action::Edit => Message::ActionEdit,
            Action::Toggle => Message::ActionToggle,
            Action::Delete => Message::ActionDelete,
            Action::Refresh => Message::ActionRefresh,
            Action::Quit => Message::ActionQuit,
        }
    }
}

pub async fn cmd(api: &ApiConfig) -> Result<()> {
    let mut controller = super::controller(api);

    View::header(None);
    View::tasks(&[], true);
    controller.refresh().await;

    loop {
        View::tasks(controller.tasks(), controller.is_loading());

        let items: Vec<String> = Action::ALL.iter().map(|action| action.message().to_string()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&items)
            .default(0)
            .interact()?;

        match Action::ALL[selection] {
            Action::Add => add(&mut controller).await?,
            Action::Edit => edit(&mut controller).await?,
            Action::Toggle => {
                if let Some(task) = select_task(&controller)? {
                    controller.toggle_complete(&task.id, task.completed).await;
                }
            }
            Action::Delete => {
                if let Some(task) = select_task(&controller)? {
                    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptConfirmDelete(task.title.clone()).to_string())
                        .default(false)
                        .interact()?;
                    if confirmed {
                        controller.delete(&task.id).await;
                    }
                }
            }
            Action::Refresh => {
                controller.refresh().await;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

async fn add(controller: &mut ConsoleController) -> Result<()> {
    View::header(None);
    super::prompt_drafts(controller)?;
    controller.submit().await;
    Ok(())
}

/// Keeps the edit session open until it is saved or the user gives up.
async fn edit(controller: &mut ConsoleController) -> Result<()> {
    let Some(task) = select_task(controller)? else {
        return Ok(());
    };

    controller.begin_edit(&task);
    View::header(controller.editing());

    loop {
        super::prompt_drafts(controller)?;
        let save = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmSave.to_string())
            .default(true)
            .interact()?;

        if !save {
            controller.cancel_edit();
            crate::msg_info!(Message::EditCancelled);
            return Ok(());
        }
        if controller.submit().await.is_applied() {
            return Ok(());
        }
    }
}

fn select_task(controller: &ConsoleController) -> Result<Option<Task>> {
    if controller.tasks().is_empty() {
        crate::msg_info!(Message::NoTasksYet);
        return Ok(None);
    }

    let labels: Vec<String> = controller.tasks().iter().map(View::label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| controller.tasks()[index].clone()))
}
