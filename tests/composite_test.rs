//! Tests for the folder tree: rendering, mutation rules, traversal

use rstest::{fixture, rstest};

use patterns::domain::{DomainError, Folder, ImageLeaf, Node, NodeKind, TextLeaf, INDENT_STEP};
use patterns::tree_traits::TreeNodeConvert;
use patterns::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Root -> [fileA, User -> [fileB, fileC]]
#[fixture]
fn user_tree() -> Node {
    let mut user = Folder::new("User");
    user.add(TextLeaf::new("fileB", 8));
    user.add(ImageLeaf::new("fileC", 120));

    let mut root: Node = Folder::new("Root").into();
    root.add_child(TextLeaf::new("fileA", 2)).unwrap();
    root.add_child(user).unwrap();
    root
}

fn prefix_len(line: &str) -> usize {
    line.chars().take_while(|c| *c == '-').count()
}

// ============================================================
// Rendering
// ============================================================

#[rstest]
fn given_user_tree_when_rendering_at_depth_one_then_lines_follow_insertion_order(user_tree: Node) {
    let lines = user_tree.render_lines(1);

    let names: Vec<&str> = lines.iter().map(|l| l.trim_start_matches('-')).collect();
    assert_eq!(names, vec!["Root", "fileA", "User", "fileB", "fileC"]);

    let depths: Vec<usize> = lines.iter().map(|l| prefix_len(l)).collect();
    assert_eq!(depths, vec![1, 3, 3, 5, 5]);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn given_folder_when_child_added_then_child_rendered_two_deeper(#[case] depth: usize) {
    let mut folder: Node = Folder::new("parent").into();
    folder.add_child(TextLeaf::new("child", 1)).unwrap();

    let lines = folder.render_lines(depth);

    assert_eq!(lines.len(), 2);
    assert_eq!(prefix_len(&lines[0]), depth);
    assert_eq!(prefix_len(&lines[1]), depth + INDENT_STEP);
    assert!(lines[1].ends_with("child"));
}

#[rstest]
fn given_user_tree_when_rendering_then_string_matches_lines(user_tree: Node) {
    assert_eq!(user_tree.render(1), user_tree.render_lines(1).join("\n"));
}

#[rstest]
fn given_user_tree_when_rendering_then_tree_is_not_mutated(user_tree: Node) {
    let before = user_tree.clone();
    let _ = user_tree.render(1);
    let _ = user_tree.to_tree_string();
    assert_eq!(user_tree, before);
}

#[rstest]
fn given_user_tree_when_converting_to_termtree_then_contains_labels(user_tree: Node) {
    let rendered = user_tree.to_tree_string().to_string();
    assert!(rendered.starts_with("[Root] (Total: 130 KB)"));
    assert!(rendered.contains("[User] (Total: 128 KB)"));
    assert!(rendered.contains("fileC (120 KB, image)"));
}

// ============================================================
// Leaf mutation is rejected
// ============================================================

#[rstest]
#[case(TextLeaf::new("notes.txt", 3).into())]
#[case(ImageLeaf::new("photo.png", 900).into())]
fn given_leaf_when_adding_child_then_unsupported_naming_leaf(#[case] leaf: Node) {
    let mut leaf = leaf;
    let name = leaf.name().to_string();

    let err = leaf.add_child(Folder::new("anything")).unwrap_err();

    match &err {
        DomainError::UnsupportedOperation { name: n, .. } => assert_eq!(n, &name),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains(&name));
    assert_eq!(leaf.child_count(), 0);
}

#[rstest]
#[case(TextLeaf::new("notes.txt", 3).into())]
#[case(ImageLeaf::new("photo.png", 900).into())]
fn given_leaf_when_removing_child_then_unsupported_naming_leaf(#[case] leaf: Node) {
    let mut leaf = leaf;
    let name = leaf.name().to_string();

    // Fails even when the argument is the leaf itself
    let itself = leaf.clone();
    let err = leaf.remove_child(&itself).unwrap_err();

    assert!(matches!(err, DomainError::UnsupportedOperation { .. }));
    assert!(err.to_string().contains(&name));
}

// ============================================================
// Folder mutation
// ============================================================

#[rstest]
fn given_folder_when_removing_absent_child_then_succeeds_unchanged(user_tree: Node) {
    let mut user_tree = user_tree;
    let before = user_tree.clone();

    let result = user_tree.remove_child(&TextLeaf::new("nope", 1).into());

    assert!(result.is_ok());
    assert_eq!(user_tree, before);
}

#[rstest]
fn given_folder_when_removing_present_child_then_gone_from_render(user_tree: Node) {
    let mut user_tree = user_tree;
    user_tree.remove_child(&TextLeaf::new("fileA", 2).into()).unwrap();

    let lines = user_tree.render_lines(0);
    assert!(!lines.iter().any(|l| l.ends_with("fileA")));
    assert_eq!(user_tree.child_count(), 1);
}

#[rstest]
fn given_same_child_added_twice_when_rendering_then_both_appear() {
    let leaf = TextLeaf::new("twin", 1);
    let mut folder = Folder::new("box");
    folder.add(leaf.clone());
    folder.add(leaf);

    let node: Node = folder.into();
    assert_eq!(node.render_lines(0), vec!["box", "--twin", "--twin"]);
}

// ============================================================
// Traversal and sizes
// ============================================================

#[rstest]
fn given_user_tree_when_iterating_then_preorder_with_levels(user_tree: Node) {
    let visited: Vec<(usize, &str, NodeKind)> = user_tree
        .iter()
        .map(|(level, node)| (level, node.name(), node.kind()))
        .collect();

    assert_eq!(
        visited,
        vec![
            (0, "Root", NodeKind::Folder),
            (1, "fileA", NodeKind::Text),
            (1, "User", NodeKind::Folder),
            (2, "fileB", NodeKind::Text),
            (2, "fileC", NodeKind::Image),
        ]
    );
}

#[rstest]
fn given_user_tree_when_querying_shape_then_depth_leaves_and_size(user_tree: Node) {
    assert_eq!(user_tree.depth(), 3);
    assert_eq!(user_tree.leaf_names(), vec!["fileA", "fileB", "fileC"]);
    assert_eq!(user_tree.size_kb(), 130);
    assert!(user_tree.is_composite());
}
