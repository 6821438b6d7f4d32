use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;
use tempfile::TempDir;

use superbalanced::util::testing;
use superbalanced::{is_super_balanced, load_tree, BinaryTree, TreeError};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn resource(name: &str) -> PathBuf {
    Path::new("./tests/resources/trees").join(name)
}

#[rstest]
#[case("single.toml", 1, true)]
#[case("right_child.toml", 2, true)]
#[case("right_chain.toml", 3, true)]
#[case("one_apart.toml", 4, true)]
#[case("two_apart.toml", 5, false)]
#[case("ten_nodes.toml", 10, false)]
fn test_load_tree_resources(#[case] name: &str, #[case] nodes: usize, #[case] expected: bool) {
    let tree = load_tree(&resource(name)).unwrap().expect("non-empty tree");
    assert_eq!(tree.node_count(), nodes);
    assert_eq!(is_super_balanced(Some(&tree)), expected, "{name}");
}

#[test]
fn test_load_tree_ten_nodes_shape() {
    let tree = load_tree(&resource("ten_nodes.toml")).unwrap().unwrap();
    assert_eq!(tree.height(), 4);
    assert_eq!(
        tree.leaf_depths().into_iter().collect::<Vec<_>>(),
        vec![2, 3, 4]
    );
}

#[test]
fn test_load_tree_empty_file() {
    let tree = load_tree(&resource("empty.toml")).unwrap();
    assert!(tree.is_none());
    assert!(is_super_balanced(tree.as_ref()));
}

#[test]
fn test_load_tree_invalid_file() {
    let err = load_tree(&resource("invalid.toml")).unwrap_err();
    match &err {
        TreeError::InvalidFormat { path, reason } => {
            assert!(path.ends_with("invalid.toml"));
            assert!(reason.contains("name"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_tree_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_tree(&missing).unwrap_err();
    assert!(matches!(err, TreeError::FileNotFound(ref p) if p == &missing));
}

#[test]
fn test_load_tree_directory_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load_tree(dir.path()).unwrap_err();
    assert!(matches!(err, TreeError::FileRead { .. }), "{err:?}");
}

#[test]
fn test_load_tree_serialized_tree() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.toml");
    let tree = BinaryTree::new(-1)
        .with_left(BinaryTree::new(2).with_right(BinaryTree::new(5)))
        .with_right(BinaryTree::new(3));
    fs::write(&path, toml::to_string(&tree).unwrap()).unwrap();

    assert_eq!(load_tree(&path).unwrap(), Some(tree));
}
