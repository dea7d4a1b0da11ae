use super::support::{sample_root, write_source};
use std::path::Path;
use vfsh::tree::{self, Node, NodeRef, TransportEncoding};

#[test]
fn loads_nested_tree_from_disk() {
    let root = sample_root();
    let names: Vec<&str> = root.children().map(Node::name).collect();
    assert_eq!(names, vec!["docs", "other", "bin.dat"]);
    assert_eq!(root.descendant_count(), 6);
}

#[test]
fn multiline_payload_keeps_inner_text() {
    let root = sample_root();
    let intro = tree::resolve("/docs/guide/intro.md", "/", &root).unwrap();
    let text = intro.as_file().unwrap().decode_text().unwrap().into_owned();
    assert!(text.starts_with("# Intro"));
    assert!(text.ends_with("Welcome aboard."));
}

#[test]
fn scenario_a_plain_file() {
    let (_temp, path) = write_source(
        r#"<vfs><dir name="docs"><file name="a.txt">hello</file></dir></vfs>"#,
    );
    let root = tree::load(&path);
    let node = tree::resolve("/docs/a.txt", "/", &root).unwrap();
    let file = node.as_file().expect("a.txt is a file");
    assert_eq!(file.encoding, TransportEncoding::None);
    assert_eq!(file.decode_text().unwrap(), "hello");
}

#[test]
fn scenario_b_base64_bytes() {
    let root = sample_root();
    match tree::resolve("bin.dat", "/", &root).unwrap() {
        NodeRef::File(file) => {
            assert_eq!(file.decode_bytes().unwrap().as_ref(), &[0u8, 1, 2, 255]);
            assert!(file.decode_text().is_err());
        }
        other => panic!("expected file, got {other:?}"),
    }
}

#[test]
fn missing_source_degrades_to_empty_root() {
    let root = tree::load(Path::new("/nonexistent/path"));
    assert_eq!(root.name, "/");
    assert!(root.is_empty());
}

#[test]
fn wrong_root_tag_degrades_to_empty_root() {
    let (_temp, path) = write_source(r#"<tree><dir name="docs"/></tree>"#);
    assert!(tree::load(&path).is_empty());
}

#[test]
fn duplicate_siblings_keep_last_declaration() {
    let (_temp, path) = write_source(
        r#"<vfs>
             <file name="dup">first</file>
             <dir name="dup"><file name="inside"/></dir>
           </vfs>"#,
    );
    let root = tree::load(&path);
    assert_eq!(root.len(), 1);
    assert!(tree::resolve("/dup/inside", "/", &root).is_ok());
}

#[test]
fn nameless_node_does_not_abort_load() {
    let (_temp, path) = write_source(
        r#"<vfs>
             <dir name="a"><file>no name</file><file name="ok">x</file></dir>
             <dir name="b"/>
           </vfs>"#,
    );
    let root = tree::load(&path);
    assert!(tree::resolve("/a/ok", "/", &root).is_ok());
    assert!(tree::resolve("/b", "/", &root).is_ok());
    let a = tree::resolve("/a", "/", &root).unwrap();
    assert_eq!(a.as_directory().unwrap().len(), 1);
}
