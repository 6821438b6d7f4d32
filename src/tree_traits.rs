use termtree::Tree;
use tracing::instrument;

use crate::tree::BinaryTree;

/// Placeholder label for the absent sibling of a node with a single child.
pub const EMPTY_SLOT: &str = "·";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for BinaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build(node: &BinaryTree, depth: usize) -> Tree<String> {
            if node.is_leaf() {
                return Tree::new(format!("{} (depth {})", node.value, depth));
            }

            // keep left/right position visible when only one child exists
            let leaves = [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .map(|child| match child {
                    Some(c) => build(c, depth + 1),
                    None => Tree::new(EMPTY_SLOT.to_string()),
                })
                .collect::<Vec<_>>();

            Tree::new(node.value.to_string()).with_leaves(leaves)
        }

        build(self, 0)
    }
}

impl TreeNodeConvert for Option<&BinaryTree> {
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
