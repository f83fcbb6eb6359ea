//! Archive import: materialize an uploaded ZIP as a new revision

use crate::store::Store;
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;
use zip::ZipArchive;

impl Store {
    /// Import a base64-encoded ZIP payload as a brand-new revision.
    ///
    /// The payload is decoded, a fresh revision directory is allocated, and
    /// the archive's full entry set is extracted into it. On extraction
    /// failure the allocated revision may remain empty or partially
    /// populated; callers must not assume atomicity.
    pub fn import_archive(&self, zip_b64: &str) -> Result<u64> {
        let bytes = STANDARD
            .decode(zip_b64.trim())
            .map_err(|err| Error::InvalidArchive(format!("base64 decode failed: {err}")))?;
        self.import_archive_bytes(&bytes)
    }

    /// Import raw ZIP bytes as a brand-new revision.
    pub fn import_archive_bytes(&self, bytes: &[u8]) -> Result<u64> {
        let rev = self.allocate()?;
        extract_zip(bytes, &self.revision_dir(rev))?;

        tracing::info!(revision = rev, "archive imported");
        Ok(rev)
    }
}

/// Extract every archive entry into `dest`.
///
/// Entry names are validated before use: an entry whose name would escape
/// the destination directory is rejected as [`Error::InvalidArchive`].
fn extract_zip(bytes: &[u8], dest: &Path) -> Result<()> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|err| Error::InvalidArchive(err.to_string()))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|err| Error::InvalidArchive(err.to_string()))?;

        let rel = entry.enclosed_name().ok_or_else(|| {
            Error::InvalidArchive(format!("entry escapes archive root: {}", entry.name()))
        })?;
        let target = dest.join(rel);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = fs::File::create(&target)?;
            io::copy(&mut entry, &mut out)?;
        }
    }
    Ok(())
}
