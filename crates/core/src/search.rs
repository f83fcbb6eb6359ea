//! File search across a subtree, by name or content

use crate::store::Store;
use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Files larger than this are never content-searched
const MAX_CONTENT_SEARCH_BYTES: u64 = 1_000_000;

/// One search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Path relative to the storage root
    pub path: String,
    /// Which field matched: "name" or "content"
    pub matched: &'static str,
}

impl Store {
    /// Search the subtree at `path` for files matching `query`.
    ///
    /// Matching is case-insensitive. A file whose root-relative path
    /// contains the query matches by name; otherwise files up to 1 MiB are
    /// read and matched by content. Unreadable entries are skipped.
    pub fn search(&self, path: &str, query: &str) -> Result<Vec<SearchHit>> {
        let start = self.resolve(path)?;
        if !start.exists() {
            return Err(Error::NotFound(PathBuf::from(path)));
        }

        let needle = query.to_lowercase();
        let mut hits = Vec::new();

        for entry in WalkDir::new(&start).into_iter().flatten() {
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = match entry.path().strip_prefix(&self.root) {
                Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
                Err(_) => continue,
            };

            if rel.to_lowercase().contains(&needle) {
                hits.push(SearchHit {
                    path: rel,
                    matched: "name",
                });
                continue;
            }

            let searchable = entry
                .metadata()
                .map(|m| m.len() <= MAX_CONTENT_SEARCH_BYTES)
                .unwrap_or(false);
            if searchable {
                if let Ok(content) = fs::read_to_string(entry.path()) {
                    if content.to_lowercase().contains(&needle) {
                        hits.push(SearchHit {
                            path: rel,
                            matched: "content",
                        });
                    }
                }
            }
        }

        Ok(hits)
    }
}
