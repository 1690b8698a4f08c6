//! codepad - A small source editor for the terminal

use std::io::{stdout, Stdout};
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use codepad::app::{exit_code, pick_project_dir, run_app, Config, NO_PROJECT_MESSAGE};
use codepad::logging;

fn main() -> ExitCode {
    let _log_guard = logging::init();

    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn restore_terminal() -> std::io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        cursor::Show
    )
}

fn run_with_config(config: Config) -> anyhow::Result<i32> {
    // Leave raw mode before the panic message is printed
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));

    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_session(&mut terminal, config);

    // Restore terminal
    restore_terminal()?;

    match result? {
        Some(code) => Ok(code),
        None => {
            tracing::info!("no project directory selected");
            println!("{}", NO_PROJECT_MESSAGE);
            Ok(exit_code::SUCCESS)
        }
    }
}

/// Pick the project directory if needed, then run the editor.
/// Returns None when no directory was chosen.
fn run_session(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<Option<i32>> {
    let root = match config.root.clone() {
        Some(root) => root,
        None => match pick_project_dir(terminal, &std::env::current_dir()?)? {
            Some(root) => root,
            None => return Ok(None),
        },
    };
    Ok(Some(run_app(terminal, config, root)?.exit_code))
}
