//! # taskpad
//!
//! A command-line client for a REST task list.
//!
//! ## Features
//!
//! - **Task List**: Fetch and render every task the server holds
//! - **Task Form**: Create tasks and edit title and description
//! - **Status**: Toggle completion and delete tasks
//! - **Reconcile**: Every change is followed by a full refetch, so the list always mirrors the server
//! - **Shell**: An interactive session that keeps one task screen open
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
