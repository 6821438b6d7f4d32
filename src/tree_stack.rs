/*
Stack based superbalance check.

A tree is superbalanced when the depths of any two leaves differ by at most one.
Instead of recursing we keep an explicit stack of (node, depth) frames, so deep
(e.g. fully skewed) trees cannot overflow the call stack.

Only leaf depths matter, hence the order in which children are pushed is irrelevant.
Distinct leaf depths are collected in a plain Vec: as soon as it holds a third depth,
or two depths more than one apart, the walk stops. It never grows beyond 3 entries.
 */
use tracing::{debug, instrument, trace};

use crate::tree::BinaryTree;

/// Outcome of a superbalance check with the distinct leaf depths recorded
/// until the decision was made, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Balance {
    Balanced { depths: Vec<usize> },
    Unbalanced { depths: Vec<usize> },
}

impl Balance {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Balance::Balanced { .. })
    }

    pub fn depths(&self) -> &[usize] {
        match self {
            Balance::Balanced { depths } | Balance::Unbalanced { depths } => depths,
        }
    }
}

struct Frame<'a> {
    node: &'a BinaryTree,
    depth: usize,
}

fn contains(depths: &[usize], target: usize) -> bool {
    depths.iter().any(|&d| d == target)
}

fn more_than_one_apart(a: usize, b: usize) -> bool {
    a.abs_diff(b) > 1
}

fn violates(depths: &[usize]) -> bool {
    match depths {
        [a, b] => more_than_one_apart(*a, *b),
        _ => depths.len() > 2,
    }
}

/// Returns true if all leaves of the tree are within one level of each other.
/// An empty tree is superbalanced.
pub fn is_super_balanced(root: Option<&BinaryTree>) -> bool {
    check_super_balance(root).is_balanced()
}

/// Depth-first walk over the tree deciding superbalance, stops at the first
/// leaf that breaks it.
#[instrument(level = "debug", skip(root))]
pub fn check_super_balance(root: Option<&BinaryTree>) -> Balance {
    let Some(root) = root else {
        debug!("empty tree");
        return Balance::Balanced { depths: Vec::new() };
    };

    let mut depths: Vec<usize> = Vec::with_capacity(3);
    let mut stack = vec![Frame {
        node: root,
        depth: 0,
    }];

    while let Some(Frame { node, depth }) = stack.pop() {
        if node.is_leaf() {
            trace!(value = node.value, depth, "leaf");
            if !contains(&depths, depth) {
                depths.push(depth);
            }
            if violates(&depths) {
                debug!(?depths, "not superbalanced");
                return Balance::Unbalanced { depths };
            }
            continue;
        }

        if let Some(left) = node.left.as_deref() {
            stack.push(Frame {
                node: left,
                depth: depth + 1,
            });
        }
        if let Some(right) = node.right.as_deref() {
            stack.push(Frame {
                node: right,
                depth: depth + 1,
            });
        }
    }

    debug!(?depths, "superbalanced");
    Balance::Balanced { depths }
}
