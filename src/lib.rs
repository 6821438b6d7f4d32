//! Superbalance check for binary trees: a tree is superbalanced when the
//! depths of any two of its leaves differ by at most one.
//!
//! ```
//! use superbalanced::{is_super_balanced, BinaryTree};
//!
//! let tree = BinaryTree::new(1)
//!     .with_left(BinaryTree::new(2))
//!     .with_right(BinaryTree::new(3).with_right(BinaryTree::new(4)));
//! assert!(is_super_balanced(Some(&tree)));
//! assert!(is_super_balanced(None));
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod parser;
pub mod tree;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use errors::{ConfigError, TreeError, TreeResult};
pub use parser::{load_tree, parse_tree};
pub use tree::BinaryTree;
pub use tree_stack::{check_super_balance, is_super_balanced, Balance};
