//! Revision numbering: the persisted HEAD counter and its allocation protocol

use crate::store::Store;
use crate::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Name of the HEAD record inside the storage root
pub(crate) const HEAD_FILE: &str = "HEAD";

impl Store {
    /// Read the current highest revision number.
    pub fn current_revision(&self) -> Result<u64> {
        read_head(&self.root)
    }

    /// Allocate the next revision number.
    ///
    /// Runs the full read HEAD -> create directory -> persist HEAD sequence
    /// under the allocation lock, so concurrent callers observe strictly
    /// increasing, gapless numbers. The returned revision's directory exists
    /// and is empty.
    pub fn allocate(&self) -> Result<u64> {
        let _guard = self.alloc_lock.lock();
        let _head_lock = lock_head(&self.head_path())?;

        let next = read_head(&self.root)? + 1;
        let dir = self.revision_dir(next);

        match fs::create_dir(&dir) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(Error::AllocationConflict(next));
            }
            Err(err) => return Err(err.into()),
        }

        write_head(&self.root, next)?;

        tracing::info!(revision = next, "allocated revision");
        Ok(next)
    }

    /// All revisions in use: the contiguous range `0..=HEAD`.
    pub fn list_revisions(&self) -> Result<Vec<u64>> {
        let head = self.current_revision()?;
        Ok((0..=head).collect())
    }
}

/// Read and parse the HEAD record.
pub(crate) fn read_head(root: &Path) -> Result<u64> {
    let contents = fs::read_to_string(root.join(HEAD_FILE)).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::NotInitialized(root.to_path_buf()),
        _ => Error::Io(err),
    })?;

    contents
        .trim()
        .parse()
        .map_err(|_| Error::CorruptHead(contents.trim().to_string()))
}

/// Persist HEAD durably: in-place truncating write plus fsync.
///
/// Written in place rather than write-to-temp-and-rename so no transient
/// entry ever appears in a root listing.
pub(crate) fn write_head(root: &Path, revision: u64) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(root.join(HEAD_FILE))?;

    file.write_all(revision.to_string().as_bytes())?;
    file.sync_all()?;
    Ok(())
}

/// Guard holding an advisory lock on the HEAD file.
///
/// The in-process mutex serializes allocations within one process; this
/// flock extends that to processes sharing the root (a CLI snapshot racing
/// a server, for instance). Released when the guard drops.
struct HeadGuard {
    #[cfg(unix)]
    _file: fs::File,
}

#[cfg(unix)]
fn lock_head(head_path: &Path) -> Result<HeadGuard> {
    use nix::fcntl::{flock, FlockArg};
    use std::os::unix::io::AsRawFd;

    let file = OpenOptions::new().read(true).write(true).open(head_path)?;
    flock(file.as_raw_fd(), FlockArg::LockExclusive).map_err(io::Error::from)?;
    Ok(HeadGuard { _file: file })
}

#[cfg(not(unix))]
fn lock_head(_head_path: &Path) -> Result<HeadGuard> {
    Ok(HeadGuard {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fresh_store() -> (TempDir, Store) {
        let temp = TempDir::new().unwrap();
        let store = Store::init(&temp.path().join("storage")).unwrap();
        (temp, store)
    }

    #[test]
    fn test_fresh_store_head_is_zero() -> Result<()> {
        let (_temp, store) = fresh_store();
        assert_eq!(store.current_revision()?, 0);
        assert_eq!(store.list_revisions()?, vec![0]);
        Ok(())
    }

    #[test]
    fn test_allocate_sequence() -> Result<()> {
        let (_temp, store) = fresh_store();

        assert_eq!(store.allocate()?, 1);
        assert_eq!(store.allocate()?, 2);
        assert_eq!(store.allocate()?, 3);

        assert_eq!(store.current_revision()?, 3);
        assert_eq!(store.list_revisions()?, vec![0, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_allocate_creates_empty_directory() -> Result<()> {
        let (_temp, store) = fresh_store();

        let rev = store.allocate()?;
        let dir = store.revision_dir(rev);

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir)?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_allocate_persists_head() -> Result<()> {
        let (_temp, store) = fresh_store();

        store.allocate()?;
        assert_eq!(fs::read_to_string(store.head_path())?, "1");
        Ok(())
    }

    #[test]
    fn test_allocate_conflict_on_existing_directory() -> Result<()> {
        let (_temp, store) = fresh_store();

        // Someone created "1" behind the store's back
        fs::create_dir(store.revision_dir(1))?;

        assert!(matches!(store.allocate(), Err(Error::AllocationConflict(1))));
        // HEAD must not advance past the failed allocation
        assert_eq!(store.current_revision()?, 0);
        Ok(())
    }

    #[test]
    fn test_corrupt_head_is_reported() -> Result<()> {
        let (_temp, store) = fresh_store();

        fs::write(store.head_path(), "not-a-number")?;

        assert!(matches!(
            store.current_revision(),
            Err(Error::CorruptHead(_))
        ));
        Ok(())
    }

    #[test]
    fn test_head_parse_tolerates_whitespace() -> Result<()> {
        let (_temp, store) = fresh_store();

        fs::write(store.head_path(), "4\n")?;
        assert_eq!(store.current_revision()?, 4);
        Ok(())
    }
}
