use super::support::sample_root;
use proptest::prelude::*;
use vfsh::error::ResolveError;
use vfsh::tree;

/// Directories present in the sample tree.
const DIRS: &[&str] = &["/", "/docs", "/docs/guide", "/other"];

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just("docs".to_string()),
        Just("guide".to_string()),
        Just("other".to_string()),
        "[a-z]{1,6}",
    ]
}

fn path() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment(), 0..6),
        any::<bool>(),
    )
        .prop_map(|(absolute, segs, backslash)| {
            let sep = if backslash { "\\" } else { "/" };
            let body = segs.join(sep);
            if absolute {
                format!("/{}", body)
            } else {
                body
            }
        })
}

proptest! {
    #[test]
    fn dot_resolves_to_cwd(idx in 0..DIRS.len()) {
        let root = sample_root();
        let cwd = DIRS[idx];
        let here = tree::resolve(".", cwd, &root).unwrap();
        let direct = tree::resolve(cwd, "/", &root).unwrap();
        prop_assert_eq!(here, direct);
    }

    #[test]
    fn normalized_paths_are_canonical(input in path(), idx in 0..DIRS.len()) {
        let normalized = tree::normalize(&input, DIRS[idx]);
        prop_assert!(normalized.starts_with('/'));
        prop_assert!(!normalized.contains('\\'));
        prop_assert!(!normalized.contains("//"));
        prop_assert!(normalized == "/" || !normalized.ends_with('/'));
        prop_assert!(!normalized.split('/').any(|s| s == "." || s == ".."));
        prop_assert_eq!(tree::normalize(&normalized, "/"), normalized.clone());
    }

    #[test]
    fn resolution_is_a_function_of_the_normalized_path(input in path(), idx in 0..DIRS.len()) {
        let root = sample_root();
        let cwd = DIRS[idx];
        let direct = tree::resolve(&input, cwd, &root);
        let via_normalized = tree::resolve(&tree::normalize(&input, cwd), "/", &root);
        prop_assert_eq!(direct, via_normalized);
    }

    #[test]
    fn resolution_never_panics(input in ".{0,40}", idx in 0..DIRS.len()) {
        let root = sample_root();
        let _ = tree::resolve(&input, DIRS[idx], &root);
    }
}

#[test]
fn root_clamp() {
    let root = sample_root();
    assert_eq!(
        tree::resolve("..", "/", &root).unwrap(),
        tree::resolve(".", "/", &root).unwrap()
    );
    assert_eq!(tree::normalize("../../..", "/docs/guide"), "/");
}

#[test]
fn scenario_c_parent_relative() {
    let root = sample_root();
    let other = tree::resolve("../other", "/docs", &root).unwrap();
    assert_eq!(other.name(), "other");

    let (_temp, path) = super::support::write_source(r#"<vfs><dir name="docs"/></vfs>"#);
    let bare = tree::load(&path);
    assert!(matches!(
        tree::resolve("../other", "/docs", &bare),
        Err(ResolveError::NotFound { .. })
    ));
}

#[test]
fn scenario_d_missing_is_not_a_fault() {
    let root = sample_root();
    let err = tree::resolve("/missing/x", "/", &root).unwrap_err();
    assert_eq!(err, ResolveError::NotFound { path: "/missing/x".to_string() });
}

#[test]
fn walking_through_a_file_fails() {
    let root = sample_root();
    assert!(matches!(
        tree::resolve("/docs/a.txt/deeper", "/", &root),
        Err(ResolveError::NotADirectory { .. })
    ));
}
