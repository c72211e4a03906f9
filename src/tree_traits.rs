use termtree::Tree;
use tracing::instrument;

use crate::arena::{BinaryTree, NodeId};
use crate::config::DisplaySettings;

pub trait TreeDisplay {
    fn to_tree_string(&self, settings: &DisplaySettings) -> Tree<String>;
}

impl TreeDisplay for BinaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, settings: &DisplaySettings) -> Tree<String> {
        fn build_tree(
            tree: &BinaryTree,
            id: NodeId,
            settings: &DisplaySettings,
        ) -> Tree<String> {
            let Some(node) = tree.node(id) else {
                return Tree::new(settings.missing_label.clone());
            };
            let mut out = Tree::new(node.value().to_string());
            if node.is_leaf() {
                return out;
            }

            for child in [node.left(), node.right()] {
                match child {
                    Some(child) => {
                        out.push(build_tree(tree, child, settings));
                    }
                    // Keeps left and right apart when only one child exists
                    None if settings.show_missing => {
                        out.push(Tree::new(settings.missing_label.clone()));
                    }
                    None => {}
                }
            }
            out
        }

        match self.root() {
            Some(root) => build_tree(self, root, settings),
            None => Tree::new(settings.empty_label.clone()),
        }
    }
}
