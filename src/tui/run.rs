//! TUI entry point and terminal setup.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tracing::{info, warn};

use crate::{config::Config, error::Result, tui::app::App};

/// Raw mode, the alternate screen and (optionally) mouse capture, restored on drop.
///
/// Mouse capture is what delivers presses anywhere on screen to the view, so
/// dropdowns can be closed by clicking outside them. It lives exactly as long
/// as the session.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl TerminalSession {
    pub fn start(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        } else {
            execute!(stdout, EnterAlternateScreen)
        };
        if let Err(e) = entered {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
            return Err(e);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(TerminalSession { terminal, mouse }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
        let restored = if self.mouse {
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        } else {
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
        };
        if let Err(e) = restored {
            warn!(error = %e, "failed to restore terminal");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Initialise and run the terminal user interface until the user quits.
pub fn run_tui(config: &Config) -> Result<()> {
    let mut session = TerminalSession::start(config.mouse)?;
    info!(mouse = config.mouse, filter = %config.default_filter, "ui started");

    let mut app = App::new(config);
    let result = app.run(session.terminal_mut());
    drop(session);

    info!("ui exited");
    result?;
    Ok(())
}
