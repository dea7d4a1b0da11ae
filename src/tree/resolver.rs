//! Path resolution against a working directory.
//!
//! Resolution is a pure read of `(path, cwd, root)`: it never touches the tree
//! or the session's working directory.

use crate::error::ResolveError;
use crate::tree::node::{Directory, Node, NodeRef};

/// Canonical path separator.
pub const SEPARATOR: char = '/';

/// Join `input` onto `cwd` and normalize the result.
///
/// Backslashes are treated as separators. `.` segments are dropped and `..`
/// pops the previous segment, stopping at the root. An absolute `input`
/// ignores `cwd`. The result always starts with `/` and never ends with one
/// unless it is the root.
pub fn normalize(input: &str, cwd: &str) -> String {
    let input = input.replace('\\', "/");
    let cwd = cwd.replace('\\', "/");

    let mut segments: Vec<&str> = Vec::new();
    if !input.starts_with(SEPARATOR) {
        push_segments(&mut segments, &cwd);
    }
    push_segments(&mut segments, &input);

    if segments.is_empty() {
        return SEPARATOR.to_string();
    }
    let mut out = String::new();
    for segment in segments {
        out.push(SEPARATOR);
        out.push_str(segment);
    }
    out
}

fn push_segments<'a>(segments: &mut Vec<&'a str>, raw: &'a str) {
    for segment in raw.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
}

/// Resolve `input` relative to `cwd` and find the node it names.
///
/// Every segment before the last must name a directory; walking through a
/// file fails with [`ResolveError::NotADirectory`].
pub fn resolve<'a>(
    input: &str,
    cwd: &str,
    root: &'a Directory,
) -> Result<NodeRef<'a>, ResolveError> {
    let path = normalize(input, cwd);
    walk(&path, root)
}

/// Walk an already-normalized absolute path from `root`.
pub(crate) fn walk<'a>(path: &str, root: &'a Directory) -> Result<NodeRef<'a>, ResolveError> {
    let mut current = NodeRef::Directory(root);
    for segment in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
        let dir = match current {
            NodeRef::Directory(dir) => dir,
            NodeRef::File(_) => {
                return Err(ResolveError::NotADirectory {
                    path: path.to_string(),
                })
            }
        };
        current = match dir.child(segment) {
            Some(node) => Node::as_node_ref(node),
            None => {
                return Err(ResolveError::NotFound {
                    path: path.to_string(),
                })
            }
        };
    }
    Ok(current)
}
