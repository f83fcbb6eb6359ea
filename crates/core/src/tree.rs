//! Directory tree enumeration for listings

use crate::store::Store;
use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// One entry in a directory listing.
///
/// `path` is the entry's key relative to the listing request: the requested
/// prefix joined with the entry name by `/`. Built fresh on every listing,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Entry name
    pub name: String,
    /// Relative path key
    pub path: String,
    #[serde(rename = "isDirectory")]
    pub is_directory: bool,
    /// Modification time (Unix seconds)
    pub modified: i64,
    /// File size in bytes; absent for directories
    pub size: Option<u64>,
    /// Child nodes, present only for directories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Store {
    /// List the tree rooted at `path`.
    ///
    /// Fails with [`Error::NotFound`] if the starting path does not exist.
    /// Unreadable subtrees are skipped, so partial results are possible.
    pub fn list(&self, path: &str) -> Result<Vec<Node>> {
        let start = self.resolve(path)?;
        if !start.exists() {
            return Err(Error::NotFound(PathBuf::from(path)));
        }
        Ok(build_tree(&start, path))
    }
}

/// Recursively enumerate `dir` into an ordered node tree.
///
/// Each directory node exclusively owns its children; recursion bottoms out
/// at files, and no cycles are possible since the source is a real
/// filesystem tree. Ordering at every level is deterministic: directories
/// before files, then case-insensitive alphabetical by name.
pub fn build_tree(dir: &Path, prefix: &str) -> Vec<Node> {
    let mut nodes = Vec::new();

    // Unreadable directories yield an empty listing instead of an error
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return nodes,
    };

    for entry in entries.flatten() {
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(_) => continue,
        };

        let is_dir = meta.is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };

        let children = is_dir.then(|| build_tree(&entry.path(), &path));

        nodes.push(Node {
            name,
            path,
            is_directory: is_dir,
            modified: meta
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64)
                .unwrap_or_default(),
            size: (!is_dir).then(|| meta.len()),
            children,
        });
    }

    nodes.sort_by_key(|n| (!n.is_directory, n.name.to_lowercase()));
    nodes
}
