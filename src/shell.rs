//! Command-line dispatch over a session.

use crate::commands::{CommandRegistry, ExecResult, Outcome};
use crate::expand;
use crate::session::Session;
use crate::tree::node::Directory;
use tracing::debug;

/// Default shell name shown in prompts and error messages.
pub const DEFAULT_SHELL_NAME: &str = "vfs";

pub struct Shell {
    name: String,
    session: Session,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new(name: impl Into<String>, root: Directory) -> Self {
        Self {
            name: name.into(),
            session: Session::new(root),
            registry: CommandRegistry::builtin(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Prompt showing the shell name and working directory.
    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", self.name, self.session.cwd())
    }

    /// Expand, split and run one input line. `None` for a blank line.
    pub fn execute_line(&mut self, line: &str) -> Option<Outcome> {
        let expanded = expand::expand_env(line);
        self.dispatch(&expanded)
    }

    /// Like [`Shell::execute_line`], reading variables through `lookup`.
    pub fn execute_line_with<F>(&mut self, line: &str, lookup: F) -> Option<Outcome>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = expand::expand_with(line, lookup);
        self.dispatch(&expanded)
    }

    fn dispatch(&mut self, expanded: &str) -> Option<Outcome> {
        let mut parts = expanded.split_whitespace();
        let command = parts.next()?;
        let args: Vec<&str> = parts.collect();
        debug!(command, ?args, cwd = self.session.cwd(), "Executing command");

        let outcome = match self.registry.get(command) {
            Some(cmd) => cmd.execute(&args, &mut self.session),
            None => Outcome::Continue(ExecResult::failure(
                127,
                format!("{}: command not found: {}", self.name, command),
            )),
        };
        Some(outcome)
    }
}
