//! Error types for the storage engine

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by store operations.
///
/// Listing and search tolerate `PermissionDenied` by skipping the
/// unreadable subtree; every other operation fails on first error.
#[derive(Debug, Error)]
pub enum Error {
    /// Path, file, or revision does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Resolved path would land outside the storage root.
    #[error("path escapes storage root: {}", .0.display())]
    PathEscape(PathBuf),

    /// Path exists but is not accessible.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Archive payload could not be decoded or extracted.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// HEAD exists but does not parse as a revision number.
    #[error("corrupt HEAD record: {0:?}")]
    CorruptHead(String),

    /// Revision directory already exists at allocation time.
    ///
    /// Unreachable while allocation is serialized; seeing it means the
    /// store was modified behind our back.
    #[error("revision {0} already exists")]
    AllocationConflict(u64),

    /// No store at the given root.
    #[error("store not initialized at {}", .0.display())]
    NotInitialized(PathBuf),

    /// A store already exists at the given root.
    #[error("store already initialized at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Map an I/O error for a caller-supplied path onto the store error kinds.
pub(crate) fn io_error(path: &str, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.into()),
        io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.into()),
        _ => Error::Io(err),
    }
}
