//! cd: Change the working directory.

use super::{Command, ExecResult, Outcome};
use crate::error::ResolveError;
use crate::session::Session;
use crate::tree::node::ROOT_NAME;

pub struct Cd;

impl Command for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn execute(&self, args: &[&str], session: &mut Session) -> Outcome {
        let path = match args {
            [] => ROOT_NAME,
            [path] => *path,
            _ => return Outcome::Continue(ExecResult::failure(1, "cd: too many arguments")),
        };

        let result = match session.change_dir(path) {
            Ok(_) => ExecResult::success(""),
            Err(ResolveError::NotFound { .. }) => {
                ExecResult::failure(1, format!("cd: no such file or directory: {}", path))
            }
            Err(ResolveError::NotADirectory { .. }) => {
                ExecResult::failure(1, format!("cd: not a directory: {}", path))
            }
        };
        Outcome::Continue(result)
    }
}
