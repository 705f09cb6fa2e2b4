use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use codetrack::app::Workbench;
use codetrack::kernel::services::adapters::{ensure_settings_file, get_settings_path};
use codetrack::tui::crossterm::poll_input;
use codetrack::tui::terminal_guard::{watch_stop_signals, StopSignal, TerminalGuard};
use codetrack::tui::view::View;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod logging;

const TICK: Duration = Duration::from_millis(100);

const USAGE: &str = "\
Usage: codetrack [PATH]

Opens PATH in two panes: the original text on the left, an editable copy on
the right. Changed lines are highlighted; Ctrl+S writes the copy back.

Options:
  -h, --help     Print this help
  -V, --version  Print the version";

enum Cli {
    Run(Option<String>),
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Cli, String> {
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Cli::Help),
            "-V" | "--version" => return Ok(Cli::Version),
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(format!("unknown option: {s}"));
            }
            _ if path.is_some() => return Err("only one PATH may be given".to_string()),
            _ => path = Some(arg),
        }
    }
    Ok(Cli::Run(path))
}

/// Resolve the startup argument against `cwd`. Directories are rejected; a
/// missing file is passed through so the UI can report it.
fn resolve_startup_file(cwd: &Path, arg: Option<&str>) -> io::Result<Option<PathBuf>> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    let path = Path::new(arg);
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }
    Ok(Some(path.canonicalize().unwrap_or(path)))
}

fn main() {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("codetrack: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    let arg = match cli {
        Cli::Help => {
            println!("{USAGE}");
            return;
        }
        Cli::Version => {
            println!("codetrack {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Cli::Run(arg) => arg,
    };

    if let Err(e) = run(arg.as_deref()) {
        eprintln!("codetrack: {e}");
        std::process::exit(1);
    }
}

fn run(arg: Option<&str>) -> io::Result<()> {
    let cwd = std::env::current_dir()?;
    let open_file = resolve_startup_file(&cwd, arg)?;

    let _logging = logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), file = ?open_file, "startup");

    let settings_path = ensure_settings_file()
        .map_err(|e| tracing::warn!(error = %e, "settings file unavailable"))
        .ok()
        .or_else(get_settings_path);

    let mut workbench = Workbench::new(settings_path);
    if let Some(path) = open_file {
        let _ = workbench.open_path(path);
    }

    let guard = TerminalGuard::new()?;
    let stop = watch_stop_signals(guard.restorer())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let stopped = event_loop(&mut terminal, &mut workbench, &stop);
    drop(guard);
    tracing::info!("shutdown");
    if let Some(signal) = stopped? {
        std::process::exit(signal.exit_code());
    }
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    stop: &Receiver<StopSignal>,
) -> io::Result<Option<StopSignal>> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
                if let Some((x, y)) = workbench.cursor_position() {
                    frame.set_cursor_position((x, y));
                }
            })?;
            dirty = false;
        }

        if let Ok(signal) = stop.try_recv() {
            return Ok(Some(signal));
        }

        if let Some(event) = poll_input(TICK)? {
            let result = workbench.handle_input(&event);
            if result.is_quit() {
                return Ok(None);
            }
            dirty |= result.is_consumed();
        }
        dirty |= workbench.tick();
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod tests;
