//! Shell commands
//!
//! Each command is a [`Command`] looked up by name in a [`CommandRegistry`].
//! Commands never end the process themselves: `exit` returns
//! [`Outcome::Exit`] and the driver decides what to do with it.

pub mod cal;
pub mod cd;
pub mod exit;
pub mod ls;
pub mod pwd;
pub mod wc;
pub mod who;

use crate::session::Session;

/// Output of a single command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i32,
    /// Standard output, without a trailing newline.
    pub out: String,
    /// Standard error, without a trailing newline.
    pub err: String,
}

impl ExecResult {
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    pub fn failure(code: i32, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// Append `other`'s streams; the worst exit code wins.
    pub fn merge(&mut self, other: ExecResult) {
        append_line(&mut self.out, &other.out);
        append_line(&mut self.err, &other.err);
        self.code = self.code.max(other.code);
    }
}

fn append_line(buf: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push('\n');
    }
    buf.push_str(text);
}

/// What the driver should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(ExecResult),
    Exit(ExecResult),
}

impl Outcome {
    pub fn result(&self) -> &ExecResult {
        match self {
            Outcome::Continue(r) | Outcome::Exit(r) => r,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// A built-in shell command.
pub trait Command {
    fn name(&self) -> &str;

    fn execute(&self, args: &[&str], session: &mut Session) -> Outcome;
}

/// Built-in commands by name.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandRegistry {
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Registry holding every built-in command.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(ls::Ls));
        registry.register(Box::new(cd::Cd));
        registry.register(Box::new(pwd::Pwd));
        registry.register(Box::new(wc::Wc));
        registry.register(Box::new(cal::Cal));
        registry.register(Box::new(who::Who));
        registry.register(Box::new(exit::Exit));
        registry
    }

    /// Register a command, replacing one with the same name.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.retain(|c| c.name() != command.name());
        self.commands.push(command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name())
    }
}
