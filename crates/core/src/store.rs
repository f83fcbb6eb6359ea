//! On-disk store management

use crate::revision::{self, HEAD_FILE};
use crate::sandbox;
use crate::{Error, Result};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// A versioned file store rooted at a single directory.
///
/// Manages the storage root layout:
/// ```text
/// <root>/
///   HEAD          current revision number, as text
///   0/            working tree (mutable by convention)
///   1/            full-copy snapshot
///   2/
///   ...
/// ```
///
/// Revisions in use always form the contiguous range `[0, HEAD]`. The store
/// holds no cached state: every operation reads current on-disk state, so
/// any number of `Store` instances (or processes) may share one root as long
/// as revision allocation goes through [`Store::allocate`].
pub struct Store {
    /// Storage root directory
    pub(crate) root: PathBuf,
    /// Serializes the read HEAD -> create directory -> persist HEAD sequence
    pub(crate) alloc_lock: Mutex<()>,
}

impl Store {
    /// Initialize a new store at the given root.
    ///
    /// Creates the root directory, an empty revision `0`, and HEAD = 0.
    /// Fails if a store already exists there.
    pub fn init(root: &Path) -> Result<Self> {
        if root.join(HEAD_FILE).exists() {
            return Err(Error::AlreadyInitialized(root.to_path_buf()));
        }

        fs::create_dir_all(root.join("0"))?;
        revision::write_head(root, 0)?;

        tracing::info!(root = %root.display(), "initialized store");

        Ok(Self {
            root: root.to_path_buf(),
            alloc_lock: Mutex::new(()),
        })
    }

    /// Open an existing store.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.join(HEAD_FILE).exists() || !root.join("0").exists() {
            return Err(Error::NotInitialized(root.to_path_buf()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            alloc_lock: Mutex::new(()),
        })
    }

    /// Open a store, creating the missing pieces on first startup.
    ///
    /// Revision `0` and the HEAD record are created if absent; an existing
    /// store is left untouched.
    pub fn open_or_init(root: &Path) -> Result<Self> {
        fs::create_dir_all(root.join("0"))?;
        if !root.join(HEAD_FILE).exists() {
            revision::write_head(root, 0)?;
            tracing::info!(root = %root.display(), "initialized store");
        }

        Ok(Self {
            root: root.to_path_buf(),
            alloc_lock: Mutex::new(()),
        })
    }

    /// Storage root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a caller-supplied relative path through the sandbox.
    ///
    /// The result is guaranteed to lie within the storage root.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        sandbox::resolve(&self.root, path)
    }

    /// Path of the HEAD record
    pub(crate) fn head_path(&self) -> PathBuf {
        self.root.join(HEAD_FILE)
    }

    /// Directory holding the given revision's tree
    pub fn revision_dir(&self, revision: u64) -> PathBuf {
        self.root.join(revision.to_string())
    }
}
