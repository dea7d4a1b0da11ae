//! ls: List a directory or show a file.

use super::{Command, ExecResult, Outcome};
use crate::error::ResolveError;
use crate::session::Session;
use crate::tree::node::{Node, NodeRef};

pub struct Ls;

impl Command for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn execute(&self, args: &[&str], session: &mut Session) -> Outcome {
        if args.is_empty() {
            return Outcome::Continue(list_one(session, "."));
        }

        let with_headers = args.len() > 1;
        let mut result = ExecResult::default();
        for path in args {
            let mut one = list_one(session, path);
            if with_headers && one.ok() {
                one.out = format!("{}:\n{}", path, one.out);
            }
            result.merge(one);
        }
        Outcome::Continue(result)
    }
}

fn list_one(session: &Session, path: &str) -> ExecResult {
    match session.resolve(path) {
        Ok(NodeRef::Directory(dir)) => {
            let lines: Vec<String> = dir
                .children()
                .map(|child| match child {
                    Node::Directory(d) => format!("{}/", d.name),
                    Node::File(f) => f.name.clone(),
                })
                .collect();
            ExecResult::success(lines.join("\n"))
        }
        Ok(NodeRef::File(file)) => ExecResult::success(file.display_text()),
        Err(ResolveError::NotADirectory { .. }) => {
            ExecResult::failure(1, format!("ls: cannot access '{}': Not a directory", path))
        }
        Err(ResolveError::NotFound { .. }) => ExecResult::failure(
            1,
            format!("ls: cannot access '{}': No such file or directory", path),
        ),
    }
}
