//! Interactive loop and script playback.
//!
//! Interactive mode reads one line at a time through `rustyline`; script mode
//! replays a file, echoing each command after the prompt before running it.

use crate::commands::exit::FAREWELL;
use crate::commands::{ExecResult, Outcome};
use crate::error::ShellError;
use crate::shell::Shell;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::borrow::Cow;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Write a command's streams, each followed by a newline when non-empty.
pub fn emit<O: Write, E: Write>(
    result: &ExecResult,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<()> {
    if !result.out.is_empty() {
        writeln!(out, "{}", result.out)?;
    }
    if !result.err.is_empty() {
        writeln!(err, "{}", result.err)?;
    }
    Ok(())
}

/// Replay the script at `path`. A missing or unreadable script is fatal.
pub fn run_script<O: Write, E: Write>(
    shell: &mut Shell,
    path: &Path,
    out: &mut O,
    err: &mut E,
) -> Result<(), ShellError> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        ShellError::Script(format!("cannot read script {}: {}", path.display(), e))
    })?;
    info!(script = %path.display(), "Running script");
    play_script(shell, &source, out, err)
}

/// Replay script text line by line.
///
/// Blank lines and lines starting with `#` are skipped. `exit` ends playback.
/// Failed commands report on `err` and playback continues.
pub fn play_script<O: Write, E: Write>(
    shell: &mut Shell,
    source: &str,
    out: &mut O,
    err: &mut E,
) -> Result<(), ShellError> {
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        writeln!(out, "{}{}", shell.prompt(), line)?;

        let Some(outcome) = shell.execute_line(line) else {
            continue;
        };
        emit(outcome.result(), out, err)?;
        if !outcome.result().ok() {
            warn!(line = idx + 1, code = outcome.result().code, "Script command failed");
        }
        if let Outcome::Exit(_) = outcome {
            break;
        }
    }
    Ok(())
}

/// Run the interactive loop until `exit`, Ctrl-C or end of input.
pub fn run_interactive(shell: &mut Shell, history: Option<PathBuf>) -> Result<(), ShellError> {
    let styled = std::io::stdout().is_terminal();
    let banner = format!("=== {} started successfully ===", shell.name().to_uppercase());
    if styled {
        println!("{}", banner.bold());
    } else {
        println!("{}", banner);
    }
    println!("Type 'exit' to quit.");

    let mut rl = DefaultEditor::new()?;
    if let Some(ref path) = history {
        if let Err(e) = rl.load_history(path) {
            let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
            if !is_not_found {
                warn!("Failed to load history: {}", e);
            }
        }
    }

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    warn!("Failed to add history entry: {}", e);
                }
                let Some(outcome) = shell.execute_line(&line) else {
                    continue;
                };

                let stdout = std::io::stdout();
                let stderr = std::io::stderr();
                let shown = for_terminal(outcome.result(), styled);
                if let Err(e) = emit(&shown, &mut stdout.lock(), &mut stderr.lock()) {
                    save_history(&mut rl, history.as_deref());
                    return Err(e.into());
                }
                if outcome.is_exit() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                println!("{}", FAREWELL);
                break;
            }
            Err(e) => {
                save_history(&mut rl, history.as_deref());
                return Err(e.into());
            }
        }
    }
    save_history(&mut rl, history.as_deref());
    Ok(())
}

/// Result as shown on a terminal: error text in red when `styled`.
fn for_terminal(result: &ExecResult, styled: bool) -> Cow<'_, ExecResult> {
    if styled && !result.err.is_empty() {
        Cow::Owned(ExecResult {
            err: result.err.red().to_string(),
            ..result.clone()
        })
    } else {
        Cow::Borrowed(result)
    }
}

fn save_history(rl: &mut DefaultEditor, history: Option<&Path>) {
    if let Some(path) = history {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create history directory: {}", e);
            }
        }
        if let Err(e) = rl.save_history(path) {
            warn!("Failed to save history: {}", e);
        }
    }
}
