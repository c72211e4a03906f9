//! Rendering trees with termtree

use bintree::arena::BinaryTree;
use bintree::config::DisplaySettings;
use bintree::tree_traits::TreeDisplay;

fn render(encoded: &str, settings: &DisplaySettings) -> Vec<String> {
    let tree = BinaryTree::deserialize(encoded).unwrap();
    tree.to_tree_string(settings)
        .to_string()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn given_full_tree_when_rendering_then_children_follow_parents() {
    let lines = render(
        "1,2,4,null,null,5,null,null,3,null,null,",
        &DisplaySettings::default(),
    );
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "1");
    assert!(lines[1].ends_with("2"));
    assert!(lines[2].ends_with("4"));
    assert!(lines[3].ends_with("5"));
    assert!(lines[4].ends_with("3"));
}

#[test]
fn given_single_left_child_when_rendering_then_right_placeholder_follows() {
    let lines = render("1,2,null,null,null,", &DisplaySettings::default());
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with("2"));
    assert!(lines[2].ends_with("∅"));
}

#[test]
fn given_placeholders_disabled_when_rendering_then_only_real_nodes() {
    let settings = DisplaySettings {
        show_missing: false,
        ..DisplaySettings::default()
    };
    let lines = render("1,null,3,null,null,", &settings);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("3"));
}

#[test]
fn given_empty_tree_when_rendering_then_shows_empty_label() {
    let settings = DisplaySettings {
        empty_label: "<nothing>".into(),
        ..DisplaySettings::default()
    };
    assert_eq!(render("null,", &settings), vec!["<nothing>".to_string()]);
}
