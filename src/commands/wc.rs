//! wc: Line, word and byte counts of files.

use super::{Command, ExecResult, Outcome};
use crate::session::Session;
use crate::tree::node::NodeRef;

pub struct Wc;

/// Which counts to print. All three when no flag is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    lines: bool,
    words: bool,
    bytes: bool,
}

impl Selection {
    fn parse(flag: &str) -> Result<Self, char> {
        let mut sel = Selection {
            lines: false,
            words: false,
            bytes: false,
        };
        for c in flag.chars() {
            match c {
                'l' => sel.lines = true,
                'w' => sel.words = true,
                'c' => sel.bytes = true,
                other => return Err(other),
            }
        }
        Ok(sel)
    }

    fn union(self, other: Selection) -> Selection {
        Selection {
            lines: self.lines || other.lines,
            words: self.words || other.words,
            bytes: self.bytes || other.bytes,
        }
    }

    fn or_all(self) -> Selection {
        if self.lines || self.words || self.bytes {
            self
        } else {
            Selection {
                lines: true,
                words: true,
                bytes: true,
            }
        }
    }
}

/// Counts for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
}

impl Counts {
    pub fn of(data: &[u8]) -> Self {
        Counts {
            lines: data.iter().filter(|&&b| b == b'\n').count(),
            words: data
                .split(|b| b.is_ascii_whitespace())
                .filter(|w| !w.is_empty())
                .count(),
            bytes: data.len(),
        }
    }

    fn add(&mut self, other: Counts) {
        self.lines += other.lines;
        self.words += other.words;
        self.bytes += other.bytes;
    }

    fn render(&self, sel: Selection, label: &str) -> String {
        let mut fields = Vec::with_capacity(4);
        if sel.lines {
            fields.push(self.lines.to_string());
        }
        if sel.words {
            fields.push(self.words.to_string());
        }
        if sel.bytes {
            fields.push(self.bytes.to_string());
        }
        fields.push(label.to_string());
        fields.join(" ")
    }
}

impl Command for Wc {
    fn name(&self) -> &str {
        "wc"
    }

    fn execute(&self, args: &[&str], session: &mut Session) -> Outcome {
        let mut sel = Selection {
            lines: false,
            words: false,
            bytes: false,
        };
        let mut paths = Vec::new();
        for arg in args {
            match arg.strip_prefix('-') {
                Some(flag) if !flag.is_empty() => match Selection::parse(flag) {
                    Ok(parsed) => sel = sel.union(parsed),
                    Err(c) => {
                        return Outcome::Continue(ExecResult::failure(
                            1,
                            format!("wc: invalid option -- '{}'", c),
                        ))
                    }
                },
                _ => paths.push(*arg),
            }
        }
        if paths.is_empty() {
            return Outcome::Continue(ExecResult::failure(1, "wc: missing file operand"));
        }
        let sel = sel.or_all();

        let mut result = ExecResult::default();
        let mut total = Counts::default();
        let mut counted = 0;
        for path in &paths {
            let one = match session.resolve(path) {
                Ok(NodeRef::File(file)) => match file.decode_bytes() {
                    Ok(bytes) => {
                        let counts = Counts::of(&bytes);
                        total.add(counts);
                        counted += 1;
                        ExecResult::success(counts.render(sel, path))
                    }
                    Err(e) => ExecResult::failure(1, format!("wc: {}: {}", path, e)),
                },
                Ok(NodeRef::Directory(_)) => {
                    ExecResult::failure(1, format!("wc: {}: Is a directory", path))
                }
                Err(_) => {
                    ExecResult::failure(1, format!("wc: {}: No such file or directory", path))
                }
            };
            result.merge(one);
        }
        if counted > 1 {
            result.merge(ExecResult::success(total.render(sel, "total")));
        }
        Outcome::Continue(result)
    }
}
