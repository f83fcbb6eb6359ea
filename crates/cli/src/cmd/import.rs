//! Import a ZIP archive from disk as a new revision

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use strata_core::Store;

pub fn run(archive: &Path, root: &Path) -> Result<()> {
    let store =
        Store::open(root).with_context(|| format!("no store at {}", root.display()))?;

    let bytes = std::fs::read(archive)
        .with_context(|| format!("failed to read {}", archive.display()))?;

    let id = store
        .import_archive_bytes(&bytes)
        .with_context(|| format!("failed to import {}", archive.display()))?;

    println!(
        "{} revision {} from {}",
        "Imported".green().bold(),
        id.to_string().yellow(),
        archive.display()
    );
    Ok(())
}
