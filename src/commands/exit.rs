//! exit: End the session.

use super::{Command, ExecResult, Outcome};
use crate::session::Session;

/// Message printed whenever the shell shuts down.
pub const FAREWELL: &str = "Exiting shell...";

pub struct Exit;

impl Command for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn execute(&self, _args: &[&str], _session: &mut Session) -> Outcome {
        Outcome::Exit(ExecResult::success(FAREWELL))
    }
}
