use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::config::ConfigOverrides;
use crate::fields::FilterMode;

/// In-memory to-do board for the terminal.
/// Tasks live only for the session; settings come from an optional TOML file.
#[derive(Parser, Debug)]
#[command(name = "todo-cards", version, about = "Card-based to-do list in the terminal")]
pub struct Cli {
    /// Path to a TOML config file (default: <config dir>/todo-cards/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Filter selected when the board opens.
    #[arg(long, global = true, value_enum)]
    pub filter: Option<FilterMode>,

    /// Do not capture the mouse; keyboard only.
    #[arg(long, global = true)]
    pub no_mouse: bool,

    /// Write logs to this file instead of the default location.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `todo_cards=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Command-line values that take precedence over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            filter: self.filter,
            no_mouse: self.no_mouse,
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}
