//! # todo-cards - To-do board for the terminal
//!
//! A single-screen, in-memory to-do list rendered as a grid of cards.
//!
//! ## Key Features
//!
//! - **Quick capture**: Type a task name and description, press Enter to add a card
//! - **Inline editing**: `Edit` loads a card into the form; the submit button becomes `Save`
//! - **Status menus**: Each card has a status button with a one-item menu to flip completion
//! - **Filtering**: Show all tasks, only completed ones or only the rest
//! - **Mouse and keyboard**: Every control is clickable; clicking elsewhere closes open menus
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the board
//! todo-cards
//!
//! # Start on the not-completed filter, keyboard only
//! todo-cards --filter not-completed --no-mouse
//!
//! # Generate bash completions
//! todo-cards completions bash > /etc/bash_completion.d/todo-cards
//! ```
//!
//! Tasks are kept in memory and vanish when the program exits. Settings are read from
//! `<config dir>/todo-cards/config.toml` when present; logs go to
//! `<data dir>/todo-cards/todo-cards.log`.

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod dropdown;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Completions need no config or logging
    if let Some(Commands::Completions { shell }) = cli.command {
        cmd_completions(shell);
        return Ok(());
    }

    let (mut config, source) = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_overrides(cli.overrides());
    logging::init(&config, cli.log_level.is_some());
    match source {
        Some(path) => info!(config = %path.display(), "loaded config"),
        None => debug!("no config file found; using defaults"),
    }

    match cli.command {
        None | Some(Commands::Ui) => cmd_ui(&config),
        Some(Commands::Completions { .. }) => Ok(()),
    }
}
