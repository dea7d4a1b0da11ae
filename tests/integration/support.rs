use std::path::PathBuf;
use tempfile::TempDir;
use vfsh::tree::{self, Directory};

/// Tree used across scenarios:
///
/// ```text
/// /
/// ├── docs/
/// │   ├── a.txt        "hello"
/// │   └── guide/
/// │       └── intro.md
/// ├── other/
/// └── bin.dat          base64 of [0, 1, 2, 255]
/// ```
pub const SAMPLE_TREE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<vfs>
  <dir name="docs">
    <file name="a.txt">hello</file>
    <dir name="guide">
      <file name="intro.md">
        # Intro
        Welcome aboard.
      </file>
    </dir>
  </dir>
  <dir name="other"/>
  <file name="bin.dat" encoding="base64">AAEC/w==</file>
</vfs>
"#;

/// Write `xml` to a temp dir and return the dir with the source path.
pub fn write_source(xml: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vfs.xml");
    std::fs::write(&path, xml).unwrap();
    (temp, path)
}

/// Load [`SAMPLE_TREE`] from disk.
pub fn sample_root() -> Directory {
    let (_temp, path) = write_source(SAMPLE_TREE);
    tree::load(&path)
}
