//! Iteration over first-child / next-sibling / parent links

use linktree::application::{Scenario, TreeRender};
use linktree::domain::{NodeId, TreeArena};
use linktree::util::testing;
use rstest::{fixture, rstest};

/// root
/// ├── 1
/// │   ├── 11 12 13
/// ├── 2
/// │   ├── 21 22 23
/// └── 3
///     └── 31 32 33
#[fixture]
fn three_level() -> (TreeArena<String>, NodeId, Vec<NodeId>) {
    testing::init_test_setup();
    let mut arena = TreeArena::new();
    let root = arena.create_root("root".to_string());
    let mut middle = Vec::new();
    for i in 1..=3 {
        let child = arena.create_node(i.to_string());
        arena.add_last(root, child).unwrap();
        for j in 1..=3 {
            let leaf = arena.create_leaf(format!("{i}{j}"));
            arena.add_last(child, leaf).unwrap();
        }
        middle.push(child);
    }
    (arena, root, middle)
}

#[rstest]
fn pre_order_visits_depth_first(three_level: (TreeArena<String>, NodeId, Vec<NodeId>)) {
    let (arena, root, _) = three_level;
    let visited: Vec<&str> = arena.pre_order(root).map(|(_, n)| n.data.as_str()).collect();
    assert_eq!(
        visited,
        vec!["root", "1", "11", "12", "13", "2", "21", "22", "23", "3", "31", "32", "33"]
    );
    assert_eq!(arena.check_tree(root), Ok(()));
}

#[rstest]
fn pre_order_of_subtree_stays_inside(three_level: (TreeArena<String>, NodeId, Vec<NodeId>)) {
    let (arena, _, middle) = three_level;
    let visited: Vec<&str> = arena
        .pre_order(middle[1])
        .map(|(_, n)| n.data.as_str())
        .collect();
    assert_eq!(visited, vec!["2", "21", "22", "23"]);
}

#[rstest]
fn pre_order_of_last_leaf_is_itself(three_level: (TreeArena<String>, NodeId, Vec<NodeId>)) {
    let (arena, _, middle) = three_level;
    let last_leaf = arena.node(middle[2]).unwrap().last().unwrap();
    let visited: Vec<&str> = arena
        .pre_order(last_leaf)
        .map(|(_, n)| n.data.as_str())
        .collect();
    assert_eq!(visited, vec!["33"]);
}

#[rstest]
fn children_follow_sibling_order(three_level: (TreeArena<String>, NodeId, Vec<NodeId>)) {
    let (arena, root, middle) = three_level;
    let ids: Vec<NodeId> = arena.children(root).map(|(id, _)| id).collect();
    assert_eq!(ids, middle);

    let leaves: Vec<&str> = arena
        .children(middle[0])
        .map(|(_, n)| n.data.as_str())
        .collect();
    assert_eq!(leaves, vec!["11", "12", "13"]);
}

#[rstest]
fn scenario_matches_hand_built_tree(three_level: (TreeArena<String>, NodeId, Vec<NodeId>)) {
    let (arena, root, _) = three_level;
    let tree = Scenario::ThreeLevel.build().unwrap();
    assert_eq!(
        tree.arena.to_pre_order_string(tree.root),
        arena.to_pre_order_string(root)
    );
}

#[rstest]
fn splice_scenario_keeps_head() {
    testing::init_test_setup();
    let tree = Scenario::Splice.build().unwrap();
    assert_eq!(tree.child_names("root").unwrap(), vec!["A", "B", "C"]);

    let root = tree.arena.node(tree.root).unwrap();
    assert_eq!(root.first(), Some(tree.id("A").unwrap()));
    assert_eq!(root.last(), Some(tree.id("C").unwrap()));
    assert_eq!(tree.arena.check_tree(tree.root), Ok(()));
}
