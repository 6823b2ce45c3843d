use anyhow::Context;
use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::config::Config;
use crate::tui::run::run_tui;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Launch the interactive to-do board (default).
    Ui,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(config: &Config) -> anyhow::Result<()> {
    run_tui(config).context("terminal UI failed")
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
