//! Sandboxed file operations against the storage root
//!
//! Paths are relative to the storage root, so `0/a.txt` addresses a file in
//! revision 0. Nothing marks historical revisions read-only: an operation
//! can be pointed at any revision's directory, matching the store's
//! documented ambiguity about revision immutability.

use crate::error::io_error;
use crate::store::Store;
use crate::{Error, Result};
use std::fs;
use std::path::PathBuf;

impl Store {
    /// Read a file's full textual content.
    pub fn read(&self, path: &str) -> Result<String> {
        let full = self.resolve(path)?;
        fs::read_to_string(&full).map_err(|err| io_error(path, err))
    }

    /// Create or overwrite a file, creating parent directories as needed.
    pub fn write(&self, path: &str, content: &str) -> Result<()> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content).map_err(|err| io_error(path, err))
    }

    /// Move a file or directory, creating the destination's parents.
    ///
    /// Fails with [`Error::NotFound`] if the source is absent. The move
    /// itself is a single rename.
    pub fn rename(&self, from: &str, to: &str) -> Result<()> {
        let src = self.resolve(from)?;
        let dst = self.resolve(to)?;

        if !src.exists() {
            return Err(Error::NotFound(PathBuf::from(from)));
        }
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(&src, &dst).map_err(|err| io_error(from, err))
    }

    /// Remove a file, or a directory and all of its contents.
    pub fn delete(&self, path: &str) -> Result<()> {
        let full = self.resolve(path)?;
        let meta = fs::metadata(&full).map_err(|err| io_error(path, err))?;

        let removed = if meta.is_dir() {
            fs::remove_dir_all(&full)
        } else {
            fs::remove_file(&full)
        };
        removed.map_err(|err| io_error(path, err))
    }

    /// Create a directory and any missing parents.
    pub fn mkdir(&self, path: &str) -> Result<()> {
        let full = self.resolve(path)?;
        fs::create_dir_all(&full).map_err(|err| io_error(path, err))
    }

    /// Fetch a file's raw bytes from a specific revision.
    pub fn read_revision_file(&self, revision: u64, path: &str) -> Result<Vec<u8>> {
        let rel = format!("{revision}/{path}");
        let full = self.resolve(&rel)?;

        if !full.is_file() {
            return Err(Error::NotFound(PathBuf::from(rel)));
        }
        fs::read(&full).map_err(|err| io_error(&rel, err))
    }
}
