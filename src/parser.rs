//! Loading binary trees from TOML tree files.
//!
//! The top-level table is the root node; `left` and `right` sub-tables are its
//! children, nested as deep as the tree goes:
//!
//! ```toml
//! value = 1
//!
//! [left]
//! value = 2
//!
//! [right]
//! value = 3
//!
//! [right.right]
//! value = 4
//! ```
//!
//! A document without any keys (blank or comments only) is the empty tree.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::tree::BinaryTree;

const INLINE_SOURCE: &str = "<input>";

/// Parse tree file text. `None` is the empty tree.
pub fn parse_tree(text: &str) -> TreeResult<Option<BinaryTree>> {
    parse_tree_from(text, Path::new(INLINE_SOURCE))
}

/// Read and parse a tree file. `None` is the empty tree.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> TreeResult<Option<BinaryTree>> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TreeError::FileNotFound(path.to_path_buf()),
        _ => TreeError::FileRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse_tree_from(&text, path)
}

fn parse_tree_from(text: &str, path: &Path) -> TreeResult<Option<BinaryTree>> {
    let invalid = |reason: String| TreeError::InvalidFormat {
        path: PathBuf::from(path),
        reason,
    };

    let table: toml::Table = toml::from_str(text).map_err(|e| invalid(e.message().to_string()))?;
    if table.is_empty() {
        debug!("empty tree: {}", path.display());
        return Ok(None);
    }

    let tree: BinaryTree = toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| invalid(e.message().to_string()))?;
    debug!(nodes = tree.node_count(), "parsed tree: {}", path.display());
    Ok(Some(tree))
}
