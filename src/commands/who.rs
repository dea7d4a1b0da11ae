//! who: Show who is logged in to the shell.

use super::{Command, ExecResult, Outcome};
use crate::session::Session;

pub struct Who;

const TERMINAL: &str = "console";

impl Command for Who {
    fn name(&self) -> &str {
        "who"
    }

    fn execute(&self, _args: &[&str], session: &mut Session) -> Outcome {
        let user = current_user(|key| std::env::var(key).ok());
        let line = format!(
            "{} {} {}",
            user,
            TERMINAL,
            session.started_at().format("%Y-%m-%d %H:%M")
        );
        Outcome::Continue(ExecResult::success(line))
    }
}

fn current_user<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|key| lookup(key).filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}
