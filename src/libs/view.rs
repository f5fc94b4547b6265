use super::messages::Message;
use super::task::Task;
use crate::msg_print;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Page header plus the title of the form currently in use.
    pub fn header(editing: Option<&Task>) {
        msg_print!(Message::AppHeader);
        msg_print!(Message::AppTagline);
        match editing {
            Some(task) => msg_print!(format!("{} · {}", Message::EditTaskHeader, Message::EditingTask(task.title.clone())), true),
            None => msg_print!(Message::CreateTaskHeader, true),
        }
    }

    pub fn tasks(tasks: &[Task], loading: bool) {
        if loading {
            msg_print!(Message::LoadingTasks);
            return;
        }
        if tasks.is_empty() {
            msg_print!(Message::NoTasksYet);
            return;
        }
        Self::table(tasks).printstd();
        msg_print!(Message::TasksCount(tasks.len()));
    }

    pub fn task(task: &Task) {
        let status = Self::status(task);
        let created = Self::format_created_at(&task.created_at);

        let mut table = Table::new();
        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["STATUS", status]);
        table.add_row(row!["CREATED", created]);
        table.printstd();
    }

    pub fn table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "DESCRIPTION", "CREATED"]);
        for task in tasks {
            let done = if task.completed { "✔" } else { "" };
            let created = Self::format_created_at(&task.created_at);
            table.add_row(row![task.id, done, task.title, task.description, created]);
        }
        table
    }

    /// One-line label used in selection menus.
    pub fn label(task: &Task) -> String {
        format!("[{}] #{} {}", if task.completed { "x" } else { " " }, task.id, task.title)
    }

    pub fn status(task: &Task) -> &'static str {
        if task.completed {
            "completed"
        } else {
            "pending"
        }
    }

    /// Renders a server timestamp as a local date. Unknown formats pass through unchanged.
    pub fn format_created_at(raw: &str) -> String {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.with_timezone(&Local).format("%x").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%x").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.format("%x").to_string();
        }
        raw.to_string()
    }
}
