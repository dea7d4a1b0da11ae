//! Tree loader
//!
//! Builds the in-memory tree from an XML description:
//!
//! ```xml
//! <vfs>
//!   <dir name="docs">
//!     <file name="a.txt">hello</file>
//!   </dir>
//!   <file name="bin.dat" encoding="base64">AAEC/w==</file>
//! </vfs>
//! ```
//!
//! Loading never fails the caller. A missing or malformed source degrades to an
//! empty root; a malformed declaration is skipped and the rest of the tree loads.

use crate::error::LoadError;
use crate::tree::node::{Directory, File, Node, TransportEncoding};
use std::path::Path;
use tracing::{error, info, warn};

/// Tag of the document's root element.
pub const ROOT_TAG: &str = "vfs";
const DIR_TAG: &str = "dir";
const FILE_TAG: &str = "file";

/// Load the tree at `source`, substituting an empty root on any failure.
pub fn load(source: &Path) -> Directory {
    match load_file(source) {
        Ok(root) => {
            info!(
                source = %source.display(),
                nodes = root.descendant_count(),
                "Loaded virtual filesystem"
            );
            root
        }
        Err(e) => {
            error!(
                source = %source.display(),
                error = %e,
                "Failed to load virtual filesystem, starting with an empty root"
            );
            Directory::root()
        }
    }
}

/// Read and parse the tree at `source`.
pub fn load_file(source: &Path) -> Result<Directory, LoadError> {
    let text = std::fs::read_to_string(source)?;
    parse_str(&text)
}

/// Parse a tree description held in memory.
pub fn parse_str(text: &str) -> Result<Directory, LoadError> {
    let doc = roxmltree::Document::parse(text)?;
    let root_el = doc.root_element();
    let tag = root_el.tag_name().name();
    if tag != ROOT_TAG {
        return Err(LoadError::UnexpectedRoot {
            expected: ROOT_TAG.to_string(),
            found: tag.to_string(),
        });
    }

    let mut root = Directory::root();
    populate(&mut root, root_el, "");
    Ok(root)
}

/// Depth-first: each directory is filled before it is attached to its parent.
fn populate(dir: &mut Directory, element: roxmltree::Node<'_, '_>, parent_path: &str) {
    for child in element.children().filter(|n| n.is_element()) {
        let tag = child.tag_name().name();
        if tag != DIR_TAG && tag != FILE_TAG {
            warn!(
                parent = display_path(parent_path),
                tag,
                line = line_of(child),
                "Skipping unknown element"
            );
            continue;
        }

        let name = match child.attribute("name").map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!(
                    parent = display_path(parent_path),
                    tag,
                    line = line_of(child),
                    "Skipping <{}> without a name attribute",
                    tag
                );
                continue;
            }
        };
        if !is_reachable_name(name) {
            warn!(
                parent = display_path(parent_path),
                tag,
                name,
                line = line_of(child),
                "Skipping <{}> whose name cannot appear in a path",
                tag
            );
            continue;
        }
        let path = format!("{}/{}", parent_path, name);

        let node = if tag == DIR_TAG {
            let mut sub = Directory::new(name);
            populate(&mut sub, child, &path);
            Node::Directory(sub)
        } else {
            let encoding = TransportEncoding::from_attribute(child.attribute("encoding"));
            let content = child.text().map(str::trim).unwrap_or_default();
            Node::File(File::new(name, content, encoding))
        };

        if let Some(previous) = dir.insert(node) {
            warn!(
                path = %path,
                replaced_directory = previous.is_directory(),
                "Duplicate entry, keeping the last declaration"
            );
        }
    }
}

/// Separators and dot segments are consumed by path normalization, so a node
/// carrying one could be listed but never resolved.
fn is_reachable_name(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(|c: char| c == '/' || c == '\\')
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

fn line_of(node: roxmltree::Node<'_, '_>) -> u32 {
    node.document().text_pos_at(node.range().start).row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::NodeRef;

    fn file_content<'a>(dir: &'a Directory, name: &str) -> &'a str {
        match dir.child(name).map(Node::as_node_ref) {
            Some(NodeRef::File(f)) => &f.content,
            other => panic!("expected file {name}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_nested_tree() {
        let root = parse_str(
            r#"<vfs>
                 <dir name="docs">
                   <file name="a.txt">hello</file>
                   <dir name="empty"/>
                 </dir>
                 <file name="top.txt"/>
               </vfs>"#,
        )
        .unwrap();

        assert_eq!(root.name, "/");
        assert_eq!(root.len(), 2);
        let docs = root.child("docs").unwrap().as_node_ref().as_directory().unwrap();
        assert_eq!(file_content(docs, "a.txt"), "hello");
        assert!(docs.child("empty").unwrap().is_directory());
        assert_eq!(file_content(&root, "top.txt"), "");
    }

    #[test]
    fn test_payload_is_trimmed() {
        let root = parse_str("<vfs><file name=\"t\">\n   padded text  \n</file></vfs>").unwrap();
        assert_eq!(file_content(&root, "t"), "padded text");
    }

    #[test]
    fn test_encoding_attribute_is_recorded() {
        let root = parse_str(
            r#"<vfs><file name="b" encoding="base64">AAEC/w==</file><file name="p" encoding="rot13">x</file></vfs>"#,
        )
        .unwrap();
        let b = root.child("b").unwrap().as_node_ref().as_file().unwrap();
        let p = root.child("p").unwrap().as_node_ref().as_file().unwrap();
        assert_eq!(b.encoding, TransportEncoding::Base64);
        assert_eq!(p.encoding, TransportEncoding::None);
    }

    #[test]
    fn test_nameless_declarations_are_skipped() {
        let root = parse_str(
            r#"<vfs>
                 <file>orphan</file>
                 <dir><file name="lost">x</file></dir>
                 <dir name="">x</dir>
                 <file name="kept">y</file>
               </vfs>"#,
        )
        .unwrap();
        let names: Vec<&str> = root.children().map(Node::name).collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn test_unreachable_names_are_skipped() {
        let root = parse_str(
            r#"<vfs>
                 <dir name="."><file name="x">x</file></dir>
                 <dir name=".."/>
                 <file name="a/b">slash</file>
                 <file name="a\b">backslash</file>
                 <file name="...">dots</file>
               </vfs>"#,
        )
        .unwrap();
        let names: Vec<&str> = root.children().map(Node::name).collect();
        assert_eq!(names, vec!["..."]);
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let root = parse_str(r#"<vfs><link name="l"/><file name="f"/></vfs>"#).unwrap();
        assert_eq!(root.len(), 1);
        assert!(root.child("l").is_none());
    }

    #[test]
    fn test_duplicate_siblings_last_wins() {
        let root = parse_str(
            r#"<vfs>
                 <file name="x">first</file>
                 <file name="y"/>
                 <file name="x">second</file>
               </vfs>"#,
        )
        .unwrap();
        assert_eq!(root.len(), 2);
        assert_eq!(root.children().next().unwrap().name(), "x");
        assert_eq!(file_content(&root, "x"), "second");
    }

    #[test]
    fn test_wrong_root_tag() {
        let err = parse_str("<filesystem/>").unwrap_err();
        assert!(matches!(err, LoadError::UnexpectedRoot { ref found, .. } if found == "filesystem"));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(parse_str("<vfs><dir name=\"a\">"), Err(LoadError::Xml(_))));
    }

    #[test]
    fn test_load_missing_source_degrades_to_empty_root() {
        let root = load(Path::new("/nonexistent/path/vfs.xml"));
        assert_eq!(root.name, "/");
        assert!(root.is_empty());
    }

    #[test]
    fn test_load_malformed_file_degrades_to_empty_root() {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("vfs.xml");
        std::fs::write(&source, "<vfs><unclosed>").unwrap();
        assert!(load(&source).is_empty());
    }
}
