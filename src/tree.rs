use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A node of a binary tree. Children are owned exclusively by their parent,
/// so a `BinaryTree` is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinaryTree {
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<BinaryTree>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<BinaryTree>>,
}

/*
Recursive descent over the tree, the straightforward way.
The explicit stack version used for the actual superbalance check lives in tree_stack.rs,
these are kept as the reference the stack walk is tested against.
 */
impl BinaryTree {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, node: BinaryTree) -> Self {
        self.left = Some(Box::new(node));
        self
    }

    pub fn with_right(mut self, node: BinaryTree) -> Self {
        self.right = Some(Box::new(node));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn children(&self) -> impl Iterator<Item = &BinaryTree> {
        self.left.iter().chain(self.right.iter()).map(|c| c.as_ref())
    }

    /// Number of nodes, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(|c| c.node_count()).sum::<usize>()
    }

    /// Edges on the longest root-to-leaf path; a single node has height 0.
    pub fn height(&self) -> usize {
        self.children()
            .map(|c| 1 + c.height())
            .max()
            .unwrap_or(0)
    }

    /// Distinct depths at which leaves occur, root at depth 0.
    pub fn leaf_depths(&self) -> BTreeSet<usize> {
        let mut depths = BTreeSet::new();
        self.collect_leaf_depths(0, &mut depths);
        depths
    }

    fn collect_leaf_depths(&self, depth: usize, depths: &mut BTreeSet<usize>) {
        if self.is_leaf() {
            depths.insert(depth);
        }
        for child in self.children() {
            child.collect_leaf_depths(depth + 1, depths);
        }
    }

    /// Copy of the tree with left and right swapped at every node.
    pub fn mirror(&self) -> Self {
        Self {
            value: self.value,
            left: self.right.as_ref().map(|c| Box::new(c.mirror())),
            right: self.left.as_ref().map(|c| Box::new(c.mirror())),
        }
    }

    /// Superbalance decided from the full set of leaf depths.
    pub fn is_super_balanced_recursive(&self) -> bool {
        let depths = self.leaf_depths();
        match (depths.first(), depths.last()) {
            (Some(min), Some(max)) => depths.len() <= 2 && max - min <= 1,
            _ => true,
        }
    }
}

// The derived drop would recurse once per level; unlink children onto a stack instead.
impl Drop for BinaryTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<BinaryTree>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
