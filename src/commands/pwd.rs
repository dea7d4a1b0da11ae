//! pwd: Print the working directory.

use super::{Command, ExecResult, Outcome};
use crate::session::Session;

pub struct Pwd;

impl Command for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn execute(&self, _args: &[&str], session: &mut Session) -> Outcome {
        Outcome::Continue(ExecResult::success(session.cwd()))
    }
}
