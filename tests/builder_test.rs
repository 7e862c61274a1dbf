//! Tests for TreeBuilder using TOML tree descriptions

use std::fs;
use std::path::Path;

use linktree::application::{ApplicationError, InsertOp, OpKind, TreeBuilder};
use linktree::domain::{LinkError, NodeKind};
use linktree::util::testing;
use rstest::rstest;
use tempfile::TempDir;

const NESTED: &str = r#"
[root]
name = "root"

[[root.children]]
name = "1"

[[root.children.children]]
name = "11"
kind = "leaf"

[[root.children.children]]
name = "12"
kind = "leaf"

[[root.children]]
name = "2"

[[root.children.children]]
name = "21"
kind = "leaf"

[[ops]]
op = "add_first"
target = "2"
name = "20"
kind = "leaf"

[[ops]]
op = "add_after"
target = "11"
name = "115"
kind = "leaf"
"#;

#[rstest]
fn given_description_file_when_building_then_keeps_document_order() {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.toml");
    fs::write(&path, NESTED).unwrap();

    let tree = TreeBuilder::new().build_from_file(&path).unwrap();

    assert_eq!(
        tree.pre_order_names(),
        vec!["root", "1", "11", "115", "12", "2", "20", "21"]
    );
    assert_eq!(tree.arena.check_tree(tree.root), Ok(()));
    assert_eq!(tree.arena.len(), 8);
}

#[rstest]
fn given_missing_file_when_building_then_io_error() {
    let err = TreeBuilder::new()
        .build_from_file(Path::new("does/not/exist.toml"))
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Io { .. }));
}

#[rstest]
fn given_duplicate_names_when_building_then_rejected() {
    let content = r#"
[root]
name = "r"

[[root.children]]
name = "x"

[[root.children]]
name = "x"
"#;
    let err = TreeBuilder::new()
        .build_from_str(content, Path::new("dup.toml"))
        .unwrap_err();
    assert!(matches!(err, ApplicationError::DuplicateName(name) if name == "x"));
}

#[rstest]
fn given_op_on_root_anchor_when_building_then_not_a_child() {
    let content = r#"
[root]
name = "r"

[[ops]]
op = "add_after"
target = "r"
name = "x"
"#;
    let err = TreeBuilder::new()
        .build_from_str(content, Path::new("root-anchor.toml"))
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Link(LinkError::NotAChild(_))));
}

#[rstest]
#[case::first(OpKind::AddFirst, vec!["x", "a", "b"])]
#[case::last(OpKind::AddLast, vec!["a", "b", "x"])]
fn given_builder_api_when_applying_ops_then_children_ordered(
    #[case] op: OpKind,
    #[case] expected: Vec<&str>,
) {
    let mut builder = TreeBuilder::new();
    let root = builder.create("r", NodeKind::Root).unwrap();
    builder
        .apply(&InsertOp::new(OpKind::AddLast, "r", "a").with_kind(NodeKind::Leaf))
        .unwrap();
    builder
        .apply(&InsertOp::new(OpKind::AddAfter, "a", "b").with_kind(NodeKind::Leaf))
        .unwrap();
    builder.apply(&InsertOp::new(op, "r", "x")).unwrap();

    let tree = builder.finish(root);
    assert_eq!(tree.child_names("r").unwrap(), expected);
}

#[rstest]
fn given_finished_builder_when_reused_then_starts_empty() {
    let mut builder = TreeBuilder::new();
    let first = builder.create("r", NodeKind::Root).unwrap();
    let tree = builder.finish(first);
    assert_eq!(tree.arena.len(), 1);

    // Names are released with the finished tree
    assert!(builder.create("r", NodeKind::Root).is_ok());
}
