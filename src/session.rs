//! Shell session: the loaded tree plus the current working directory.
//!
//! The tree is read-only after load. The working directory is the only mutable
//! state and only [`Session::change_dir`] writes it, after the target has been
//! resolved to a directory.

use crate::error::ResolveError;
use crate::tree::node::{Directory, NodeRef, ROOT_NAME};
use crate::tree::resolver;
use chrono::{DateTime, Local};

pub struct Session {
    root: Directory,
    cwd: String,
    started_at: DateTime<Local>,
}

impl Session {
    pub fn new(root: Directory) -> Self {
        Self {
            root,
            cwd: ROOT_NAME.to_string(),
            started_at: Local::now(),
        }
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Current working directory, always a normalized absolute path.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// When the session was opened.
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Resolve `path` against the current working directory.
    pub fn resolve(&self, path: &str) -> Result<NodeRef<'_>, ResolveError> {
        resolver::resolve(path, &self.cwd, &self.root)
    }

    /// Change the working directory. Leaves it untouched on failure.
    ///
    /// Returns the new normalized working directory.
    pub fn change_dir(&mut self, path: &str) -> Result<&str, ResolveError> {
        let target = resolver::normalize(path, &self.cwd);
        match resolver::walk(&target, &self.root)? {
            NodeRef::Directory(_) => {
                tracing::debug!(from = %self.cwd, to = %target, "Changed directory");
                self.cwd = target;
                Ok(&self.cwd)
            }
            NodeRef::File(_) => Err(ResolveError::NotADirectory { path: target }),
        }
    }
}
